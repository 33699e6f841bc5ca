use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::ApiError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invokes a backend command and decodes its JSON result.
pub async fn invoke_cmd<T: DeserializeOwned>(
    command: &str,
    args: &serde_json::Value,
) -> Result<T, ApiError> {
    // Plain objects, not ES2015 Maps, so the backend can read the arguments.
    let js_args = args
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|_| ApiError::Encode(command.to_string()))?;

    if !bridge_available() {
        return Err(ApiError::Unavailable(format!("Tauri bridge missing for {command}")));
    }

    let result = invoke(command, js_args)
        .await
        .map_err(|e| ApiError::from(Rejection::read(e)))?;
    if result.is_undefined() {
        return Err(ApiError::Unavailable(format!("no response from {command}")));
    }

    serde_wasm_bindgen::from_value(result).map_err(|e| ApiError::Decode {
        command: command.to_string(),
        reason: e.to_string(),
    })
}

fn bridge_available() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str("__TAURI__")).ok())
        .unwrap_or(false)
}

/// What a failed invoke carried.
#[derive(Debug, Clone, PartialEq)]
enum Rejection {
    /// Backend rejection: a plain string or an error object's `message`.
    Message(String),
    /// Thrown by the JS glue itself, e.g. `window.__TAURI__.core` missing.
    Script(String),
    Opaque(String),
}

impl Rejection {
    fn read(value: JsValue) -> Self {
        if let Some(message) = value.as_string() {
            return Rejection::Message(message);
        }
        let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string());
        match message {
            Some(message) if value.is_instance_of::<js_sys::TypeError>() => {
                Rejection::Script(message)
            }
            Some(message) => Rejection::Message(message),
            None => Rejection::Opaque(format!("{value:?}")),
        }
    }
}

impl From<Rejection> for ApiError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Message(message) => ApiError::Rejected(message),
            Rejection::Script(detail) | Rejection::Opaque(detail) => ApiError::Unavailable(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_shown_as_is() {
        let err = ApiError::from(Rejection::Message("Task not found".into()));
        assert_eq!(err, ApiError::Rejected("Task not found".into()));
        assert_eq!(err.to_string(), "Task not found");
    }

    #[test]
    fn test_glue_type_error_means_bridge_unavailable() {
        let err = ApiError::from(Rejection::Script(
            "Cannot read properties of undefined (reading 'invoke')".into(),
        ));
        assert!(matches!(err, ApiError::Unavailable(_)));
        assert!(err.to_string().starts_with("Task service unavailable"));
    }

    #[test]
    fn test_unreadable_rejection_is_unavailable() {
        let err = ApiError::from(Rejection::Opaque("JsValue(Symbol)".into()));
        assert!(matches!(err, ApiError::Unavailable(_)));
    }
}
