//! Evidence-image upload to the external asset host.
//!
//! Unsigned multipart POST, single-shot: no chunking, no progress events,
//! no retry. Callers hold a boolean "uploading" flag and must not attempt
//! any dependent confirmation call unless this returns a URL.

use gloo_net::http::Request;
use serde::Deserialize;

const UPLOAD_URL: &str = "https://api.cloudinary.com/v1_1/refashion/image/upload";
const UPLOAD_PRESET: &str = "refashion_unsigned";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Upload one image file, returning the hosted secure URL.
pub async fn upload_image(file: web_sys::File) -> Result<String, String> {
    let form = web_sys::FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob("file", &file)
        .map_err(|_| "Failed to attach file".to_string())?;
    form.append_with_str("upload_preset", UPLOAD_PRESET)
        .map_err(|_| "Failed to attach preset".to_string())?;

    let response = Request::post(UPLOAD_URL)
        .body(form)
        .map_err(|e| format!("Failed to build upload request: {}", e))?
        .send()
        .await
        .map_err(|_| "Image upload failed".to_string())?;

    if !response.ok() {
        return Err(format!("Image upload failed: {}", response.status()));
    }

    response
        .json::<UploadResponse>()
        .await
        .map(|r| r.secure_url)
        .map_err(|_| "Image upload returned no URL".to_string())
}

/// Pull the first selected file out of an `<input type="file">` event.
pub fn file_from_input(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;
    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}
