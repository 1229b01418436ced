use crate::{
    api::{ApiClient, ApiError, CsvDataset},
    utils::upload::SelectedFile,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct BulkRepository {
    client: Rc<ApiClient>,
}

impl Default for BulkRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn export(&self, dataset: CsvDataset) -> Result<Vec<u8>, ApiError> {
        self.client.export_csv(dataset).await
    }

    pub async fn template(&self, dataset: CsvDataset) -> Result<Vec<u8>, ApiError> {
        self.client.download_csv_template(dataset).await
    }

    pub async fn import(
        &self,
        dataset: CsvDataset,
        file: SelectedFile,
    ) -> Result<Vec<String>, ApiError> {
        self.client.import_csv(dataset, file.name, file.bytes).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> BulkRepository {
        BulkRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))))
    }

    #[tokio::test]
    async fn export_returns_raw_csv_bytes() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/csv/export/enrollments");
            then.status(200)
                .bytes_body(b"student,program\nSTU001,BSC-CS\n", "text/csv");
        });
        let bytes = repository(&server)
            .export(CsvDataset::Enrollments)
            .await
            .unwrap();
        assert!(bytes.starts_with(b"student,program"));
    }

    #[tokio::test]
    async fn import_returns_result_lines() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/csv/import/students");
            then.status(200).json_body(json!([
                "Row 1: created STU020",
                "Error: row 2 is missing a registration number"
            ]));
        });
        let lines = repository(&server)
            .import(
                CsvDataset::Students,
                SelectedFile {
                    name: "students.csv".into(),
                    bytes: b"registrationNumber\nSTU020\n".to_vec(),
                },
            )
            .await
            .unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(server.hits(POST, "/api/csv/import/students"), 1);
    }

    #[tokio::test]
    async fn failed_template_download_surfaces_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/csv/template/students");
            then.status(500).body("");
        });
        let err = repository(&server)
            .template(CsvDataset::Students)
            .await
            .unwrap_err();
        assert_eq!(err.error, "Failed to download students template");
        assert_eq!(err.status, Some(500));
    }
}
