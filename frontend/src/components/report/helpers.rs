//! Browser-side utilities for the report board.
//!
//! - **Settings**: reading the JSON settings the host page embeds.
//! - **Requests**: posting a `FormData` body and handing the status and
//!   text to the response boundary in `common::response`.
//! - **DOM effects**: blocking notifications and form resets.
//! - **Clock**: the current instant, taken from `Date.now()`.

use chrono::{DateTime, Utc};
use common::config::Settings;
use common::datetime::from_epoch_millis;
use common::error::ClientError;
use common::response::interpret;
use gloo_console as console;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{FormData, HtmlFormElement};
use yew::NodeRef;

/// Id of the `<script type="application/json">` element holding page settings.
pub const SETTINGS_ELEMENT_ID: &str = "roadwatch-settings";

/// Reads the page settings, falling back to defaults when the element is
/// absent or its content is invalid.
pub fn load_settings() -> Settings {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        None => Settings::default(),
        Some(raw) => Settings::from_json(&raw).unwrap_or_else(|err| {
            console::error!(format!("{}; falling back to default settings", err));
            Settings::default()
        }),
    }
}

/// Snapshot of every named field of `form`, files included.
pub fn form_data(form: &HtmlFormElement) -> Result<FormData, ClientError> {
    FormData::new_with_form(form).map_err(|e| ClientError::Transport(js_error_text(&e)))
}

/// POSTs `body` as multipart to `endpoint` and decodes the JSON answer.
///
/// The body is read as text before decoding so that a non-JSON body still
/// yields the status-based error instead of a decoding failure.
pub async fn post_form<T: DeserializeOwned>(
    endpoint: &str,
    body: FormData,
) -> Result<T, ClientError> {
    let response = Request::post(endpoint)
        .body(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    let text = response.text().await.map_err(transport)?;
    interpret(status, &text)
}

fn transport(err: gloo_net::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Shows a blocking notification.
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            console::error!(format!("could not show notification: {}", message));
        }
    }
}

/// Clears the fields of the form behind `form_ref`, if it is mounted.
pub fn reset_form(form_ref: &NodeRef) {
    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
        form.reset();
    }
}

pub fn now_utc() -> DateTime<Utc> {
    from_epoch_millis(js_sys::Date::now()).unwrap_or_default()
}
