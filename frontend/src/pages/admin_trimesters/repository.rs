use crate::api::{ApiClient, ApiError, Id, Trimester, TrimesterPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct TrimestersRepository {
    client: Rc<ApiClient>,
}

impl Default for TrimestersRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TrimestersRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_trimesters(&self) -> Result<Vec<Trimester>, ApiError> {
        self.client.list_trimesters().await
    }

    pub async fn save_trimester(
        &self,
        id: Option<Id>,
        payload: TrimesterPayload,
    ) -> Result<Trimester, ApiError> {
        match id {
            Some(id) => self.client.update_trimester(id, payload).await,
            None => self.client.create_trimester(payload).await,
        }
    }

    pub async fn delete_trimester(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_trimester(id).await
    }
}
