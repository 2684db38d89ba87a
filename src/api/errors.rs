use serde_json::Value;
use thiserror::Error;

/// Failure of an API call. Non-2xx responses keep the decoded body around so
/// views can surface whatever message the backend produced.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized { body: Value },

    #[error("not found")]
    NotFound { body: Value },

    #[error("request rejected with status {status}")]
    Rejected { status: u16, body: Value },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Maps a non-2xx status and its decoded body onto an error variant.
    pub fn from_status(status: u16, body: Value) -> Self {
        match status {
            401 => ApiError::Unauthorized { body },
            404 => ApiError::NotFound { body },
            _ => ApiError::Rejected { status, body },
        }
    }

    /// Normalizes the error into a display string. Precedence: plain string
    /// body verbatim, then a `message` field, then the object's values joined
    /// with commas, then the caller-supplied fallback.
    pub fn display_message(&self, fallback: &str) -> String {
        let body = match self {
            ApiError::Unauthorized { body }
            | ApiError::NotFound { body }
            | ApiError::Rejected { body, .. } => body,
            ApiError::Transport(_) | ApiError::Decode(_) => return fallback.to_string(),
        };
        normalize_body(body).unwrap_or_else(|| fallback.to_string())
    }
}

fn normalize_body(body: &Value) -> Option<String> {
    match body {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Object(fields) => {
            if let Some(Value::String(message)) = fields.get("message") {
                return Some(message.clone());
            }
            if fields.is_empty() {
                return None;
            }
            Some(
                fields
                    .values()
                    .map(render_value)
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
        _ => None,
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_body_is_shown_verbatim() {
        let err = ApiError::from_status(400, json!("Error: Username is already taken!"));
        assert_eq!(
            err.display_message("fallback"),
            "Error: Username is already taken!"
        );
    }

    #[test]
    fn message_field_takes_precedence_over_other_values() {
        let err = ApiError::from_status(
            409,
            json!({"message": "Restaurant name already exists", "timestamp": "now"}),
        );
        assert_eq!(
            err.display_message("fallback"),
            "Restaurant name already exists"
        );
    }

    #[test]
    fn object_values_are_joined_with_commas() {
        let err = ApiError::from_status(
            400,
            json!({"password": "Password is too short", "username": "Username is mandatory"}),
        );
        // serde_json objects iterate in key order.
        assert_eq!(
            err.display_message("fallback"),
            "Password is too short, Username is mandatory"
        );
    }

    #[test]
    fn non_text_bodies_fall_back() {
        assert_eq!(
            ApiError::from_status(500, Value::Null).display_message("fallback"),
            "fallback"
        );
        assert_eq!(
            ApiError::Transport("connection refused".into()).display_message("fallback"),
            "fallback"
        );
    }

    #[test]
    fn status_codes_map_to_variants() {
        assert!(matches!(
            ApiError::from_status(401, Value::Null),
            ApiError::Unauthorized { .. }
        ));
        assert!(matches!(
            ApiError::from_status(404, Value::Null),
            ApiError::NotFound { .. }
        ));
        assert!(matches!(
            ApiError::from_status(500, Value::Null),
            ApiError::Rejected { status: 500, .. }
        ));
    }
}
