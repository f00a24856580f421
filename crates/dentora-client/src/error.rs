//! Client error taxonomy
//!
//! Every failure is recoverable from the wizard's point of view: the draft is
//! never mutated by a failed request. The taxonomy separates "the record does
//! not exist" (callers fall back to create mode) from "the backend rejected
//! the payload" (shown to the author) and everything else.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
	#[error("resource not found")]
	NotFound,

	#[error("the backend rejected the request: {message}")]
	Validation { message: String },

	#[error("server error ({status}): {message}")]
	Server { status: u16, message: String },

	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),
}

/// Map a non-success HTTP status and response body to the taxonomy.
///
/// 4xx bodies carry a human-readable reason under `error` or `message`; when
/// neither is present the raw body (or a generic fallback) is used.
pub(crate) fn classify(status: StatusCode, body: &str) -> ClientError {
	if status == StatusCode::NOT_FOUND {
		return ClientError::NotFound;
	}
	let message = extract_message(body);
	if status.is_client_error() {
		ClientError::Validation { message }
	} else {
		ClientError::Server {
			status: status.as_u16(),
			message,
		}
	}
}

fn extract_message(body: &str) -> String {
	if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
		&& let Some(message) = value
			.get("error")
			.or_else(|| value.get("message"))
			.and_then(|m| m.as_str())
	{
		return message.to_string();
	}
	let trimmed = body.trim();
	if trimmed.is_empty() {
		"Something went wrong!".to_string()
	} else {
		trimmed.to_string()
	}
}
