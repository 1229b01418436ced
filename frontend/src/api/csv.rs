use reqwest::multipart::{Form, Part};

use super::{
    client::{map_binary_response, map_typed_response, ApiClient},
    types::ApiError,
};

/// CSV datasets the backend can export, import and template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvDataset {
    Students,
    Enrollments,
}

impl CsvDataset {
    fn segment(&self) -> &'static str {
        match self {
            CsvDataset::Students => "students",
            CsvDataset::Enrollments => "enrollments",
        }
    }

    pub fn export_filename(&self) -> &'static str {
        match self {
            CsvDataset::Students => "students_export.csv",
            CsvDataset::Enrollments => "enrollments_export.csv",
        }
    }

    pub fn template_filename(&self) -> &'static str {
        match self {
            CsvDataset::Students => "students_template.csv",
            CsvDataset::Enrollments => "enrollments_template.csv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CsvDataset::Students => "students",
            CsvDataset::Enrollments => "enrollments",
        }
    }
}

impl ApiClient {
    pub async fn export_csv(&self, dataset: CsvDataset) -> Result<Vec<u8>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/csv/export/{}",
                base_url,
                dataset.segment()
            )))
            .await?;
        map_binary_response(response, &format!("Failed to export {}", dataset.label())).await
    }

    pub async fn download_csv_template(&self, dataset: CsvDataset) -> Result<Vec<u8>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!(
                "{}/csv/template/{}",
                base_url,
                dataset.segment()
            )))
            .await?;
        map_binary_response(
            response,
            &format!("Failed to download {} template", dataset.label()),
        )
        .await
    }

    /// Uploads a CSV file; the backend answers with one result line per row.
    pub async fn import_csv(
        &self,
        dataset: CsvDataset,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<Vec<String>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")
            .map_err(|e| ApiError::unknown(format!("Invalid upload: {}", e)))?;
        let form = Form::new().part("file", part);
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/csv/import/{}", base_url, dataset.segment()))
                    .multipart(form),
            )
            .await?;
        map_typed_response(response).await
    }
}
