use crate::api::ApiError;

pub const CSV_MIME: &str = "text/csv";
pub const PDF_MIME: &str = "application/pdf";

#[cfg(target_arch = "wasm32")]
pub fn trigger_download(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let element = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_download(filename: &str, _mime: &str, bytes: &[u8]) -> Result<(), String> {
    Err(format!(
        "Cannot save {} ({} bytes) outside a browser",
        filename,
        bytes.len()
    ))
}

/// Hands downloaded bytes to `save` and turns the outcome into a result line.
pub fn save_download<F>(
    filename: &str,
    result: Result<Vec<u8>, ApiError>,
    save: F,
) -> Result<String, ApiError>
where
    F: FnOnce(&str, &[u8]) -> Result<(), String>,
{
    let bytes = result?;
    save(filename, &bytes).map_err(ApiError::unknown)?;
    Ok(format!("Successfully downloaded {}", filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn save_download_reports_each_failure() {
        let saved = save_download("students_export.csv", Ok(b"a,b".to_vec()), |name, bytes| {
            assert_eq!(name, "students_export.csv");
            assert_eq!(bytes, b"a,b");
            Ok(())
        });
        assert_eq!(saved.unwrap(), "Successfully downloaded students_export.csv");

        let blocked = save_download("students_export.csv", Ok(Vec::new()), |_, _| {
            Err("No document".to_string())
        });
        assert_eq!(blocked.unwrap_err().error, "No document");

        let failed = save_download(
            "students_export.csv",
            Err(ApiError::http(500, "Failed to export students")),
            |_, _| Ok(()),
        );
        assert_eq!(failed.unwrap_err().error, "Failed to export students");
    }
}
