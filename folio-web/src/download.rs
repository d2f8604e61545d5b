//! Browser download plumbing: blob URLs and synthetic anchor clicks.

use folio_common::{site_url, DownloadPlan};
use wasm_bindgen::JsCast;

use crate::api;

fn create_blob_url(data: &[u8], mime_type: &str) -> Result<String, String> {
    let uint8_array = js_sys::Uint8Array::from(data);
    let array = js_sys::Array::new();
    array.push(&uint8_array);

    let opts = web_sys::BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &opts)
        .map_err(|e| format!("Failed to create blob: {e:?}"))?;

    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create blob URL: {e:?}"))
}

fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

/// Click a transient `<a download>` pointing at `href`.
fn trigger_download(href: &str, filename: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(elem) = document.create_element("a") else {
        return;
    };
    let _ = elem.set_attribute("href", href);
    let _ = elem.set_attribute("download", filename);
    let _ = elem.set_attribute("style", "display:none");
    let Some(body) = document.body() else {
        return;
    };
    let _ = body.append_child(&elem);
    if let Some(html_elem) = elem.dyn_ref::<web_sys::HtmlElement>() {
        html_elem.click();
    }
    let _ = body.remove_child(&elem);
}

/// Execute a resolved download plan. The placeholder's blob URL is revoked
/// as soon as the click has been dispatched.
pub fn perform(plan: &DownloadPlan) {
    match plan {
        DownloadPlan::Direct { path } => {
            let name = path.rsplit('/').next().unwrap_or(path);
            let href = api::page_origin()
                .map(|origin| site_url(&origin, path))
                .unwrap_or_else(|| path.clone());
            trigger_download(&href, name);
        }
        DownloadPlan::Placeholder { file_name, content } => {
            match create_blob_url(content.as_bytes(), "application/octet-stream") {
                Ok(url) => {
                    trigger_download(&url, file_name);
                    revoke_blob_url(&url);
                }
                Err(e) => tracing::warn!("placeholder CV blob failed: {e}"),
            }
        }
    }
}
