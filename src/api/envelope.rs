//! Response envelope `{status_code, message, data}`

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::RequestError;

/// A parsed backend response
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// `status_code` echoed by the backend, if any
    pub status_code: Option<u16>,
    /// Human-readable message, if any
    pub message: Option<String>,
    /// The `data` member, or the whole payload when `data` is absent
    pub data: Value,
}

impl Envelope {
    /// Split a raw JSON body into envelope parts
    pub fn from_body(body: Value) -> Self {
        let status_code = body
            .get("status_code")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok());
        let message = message_of(&body);

        let data = match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) if !data.is_null() => data,
                Some(_) | None => Value::Object(map),
            },
            other => other,
        };

        Self {
            status_code,
            message,
            data,
        }
    }

    /// Deserialize the data member
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, RequestError> {
        Ok(serde_json::from_value(self.data)?)
    }
}

/// Error text carried by a response body (`message`, or `detail` as a fallback)
pub fn message_of(body: &Value) -> Option<String> {
    ["message", "detail"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
