use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser-facing motion plumbing.
///
/// None of these ever reach the page: callers log them and degrade to
/// rendering immediately or rendering without the enhancement.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("target element is not attached to the document")]
    Detached,
    #[error("runtime does not provide {0}")]
    Unsupported(&'static str),
    #[error("drawing surface unavailable: {0}")]
    Surface(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for MotionError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        MotionError::Js(message)
    }
}
