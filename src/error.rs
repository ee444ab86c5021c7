use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring page features to the DOM.
///
/// A missing optional element is never one of these; features that cannot
/// find their element are skipped silently.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("canvas #{0} has no 2d context")]
    NoContext(String),
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
