use leptos::ev::Event;
use wasm_bindgen::JsCast;

/// A file picked by the user, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// First file of an `<input type="file">` change event.
pub fn file_from_event(ev: &Event) -> Option<web_sys::File> {
    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())?;
    input.files().and_then(|files| files.get(0))
}

pub async fn read_file(file: web_sys::File) -> Result<SelectedFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Failed to read {}", file.name()))?;
    Ok(SelectedFile {
        name: file.name(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
