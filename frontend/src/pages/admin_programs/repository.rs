use crate::api::{ApiClient, ApiError, Id, Program, ProgramPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProgramsRepository {
    client: Rc<ApiClient>,
}

impl Default for ProgramsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_programs(&self) -> Result<Vec<Program>, ApiError> {
        self.client.list_programs().await
    }

    /// Creates when `id` is `None`, updates otherwise.
    pub async fn save_program(
        &self,
        id: Option<Id>,
        payload: ProgramPayload,
    ) -> Result<Program, ApiError> {
        match id {
            Some(id) => self.client.update_program(id, payload).await,
            None => self.client.create_program(payload).await,
        }
    }

    pub async fn delete_program(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_program(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::collection::ListState;
    use serde_json::json;

    #[tokio::test]
    async fn created_program_appears_once_after_reload() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/programs");
            then.status(200).json_body(json!({
                "id": 7, "programCode": "BSC-DS", "programTitle": "BSc Data Science"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/programs");
            then.status(200).json_body(json!([
                { "id": 1, "programCode": "BSC-CS", "programTitle": "BSc Computer Science" },
                { "id": 7, "programCode": "BSC-DS", "programTitle": "BSc Data Science" }
            ]));
        });
        let repo = ProgramsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let mut list = ListState::<Program>::default();
        let ticket = list.begin_load();
        list.apply_load(
            ticket,
            Ok(vec![Program {
                id: 1,
                program_code: "BSC-CS".into(),
                program_title: "BSc Computer Science".into(),
            }]),
        );

        let created = repo
            .save_program(
                None,
                ProgramPayload {
                    program_code: "BSC-DS".into(),
                    program_title: "BSc Data Science".into(),
                },
            )
            .await
            .unwrap();
        list.upsert(created);
        assert_eq!(list.len(), 2);

        let ticket = list.begin_load();
        list.apply_load(ticket, repo.fetch_programs().await);
        let matching = list
            .items()
            .iter()
            .filter(|program| program.program_code == "BSC-DS")
            .count();
        assert_eq!(matching, 1);
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn failed_delete_keeps_row() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/programs/1");
            then.status(409)
                .json_body(json!({ "message": "Program has enrolled students" }));
        });
        let repo = ProgramsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let mut list = ListState::default();
        list.upsert(Program {
            id: 1,
            program_code: "BSC-CS".into(),
            program_title: "BSc Computer Science".into(),
        });
        let result = repo.delete_program(1).await;
        assert!(!list.apply_delete(1, &result));
        assert_eq!(list.len(), 1);
        assert_eq!(result.unwrap_err().error, "Program has enrolled students");
    }
}
