//! HTTP calls: the CV existence check and the EmailJS contact endpoint.

use folio_common::{site_url, ContactForm};
use serde::Serialize;

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Fill these in with your EmailJS credentials. While they hold the
// placeholder values the form short-circuits to an error banner instead of
// calling the service.
const EMAILJS_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";
const EMAILJS_SERVICE_ID: &str = "YOUR_SERVICE_ID";
const EMAILJS_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";

const CONTACT_RECIPIENT: &str = "Daniel Ferrer";

pub fn email_configured() -> bool {
    EMAILJS_PUBLIC_KEY != "YOUR_PUBLIC_KEY"
        && EMAILJS_SERVICE_ID != "YOUR_SERVICE_ID"
        && EMAILJS_TEMPLATE_ID != "YOUR_TEMPLATE_ID"
}

#[derive(Serialize)]
struct EmailSendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    to_name: &'a str,
}

/// Send a validated contact form through EmailJS. Status 200 is the only
/// success signal the service defines.
pub async fn send_contact_email(form: &ContactForm) -> Result<(), String> {
    let payload = EmailSendRequest {
        service_id: EMAILJS_SERVICE_ID,
        template_id: EMAILJS_TEMPLATE_ID,
        user_id: EMAILJS_PUBLIC_KEY,
        template_params: TemplateParams {
            from_name: &form.name,
            from_email: &form.email,
            message: &form.message,
            to_name: CONTACT_RECIPIENT,
        },
    };

    let resp = reqwest::Client::new()
        .post(EMAILJS_ENDPOINT)
        .json(&payload)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if resp.status().as_u16() == 200 {
        Ok(())
    } else {
        Err(format!("Email service returned status {}", resp.status()))
    }
}

/// The page origin, for absolutizing site-relative paths: reqwest rejects
/// relative URLs instead of resolving them against the document base the
/// way the browser's fetch does.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Metadata-only existence check for a static file. Any failure (network
/// fault or non-success status) reads as "missing" and routes the caller
/// to the placeholder fallback.
pub async fn resource_exists(path: &str) -> bool {
    let Some(origin) = page_origin() else {
        return false;
    };
    let url = site_url(&origin, path);
    match reqwest::Client::new().head(&url).send().await {
        Ok(resp) => resp.status().is_success(),
        Err(e) => {
            tracing::debug!("existence check for {path} failed: {e}");
            false
        }
    }
}
