//! Async REST client
//!
//! One client per admin session, built from the runtime configuration. All
//! writes go out as multipart form data: scalar fields as text parts, list
//! fields JSON-stringified, pending file uploads as binary parts. Existing
//! stored file references travel as plain text so an edit without a new
//! upload keeps the current file.

use crate::config::RuntimeConfig;
use crate::error::{ClientError, classify};
use dentora_forms::FieldKind;
use dentora_schema::{EntityKind, EntitySchema};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// A file selected for upload, bound to the schema field it fills.
#[derive(Debug, Clone)]
pub struct Attachment {
	pub field: String,
	pub filename: String,
	pub content_type: String,
	pub bytes: Vec<u8>,
}

impl Attachment {
	pub fn new(
		field: impl Into<String>,
		filename: impl Into<String>,
		content_type: impl Into<String>,
		bytes: Vec<u8>,
	) -> Self {
		Self {
			field: field.into(),
			filename: filename.into(),
			content_type: content_type.into(),
			bytes,
		}
	}
}

/// REST client for the admin backend.
pub struct ApiClient {
	base_url: String,
	http: reqwest::Client,
}

impl ApiClient {
	pub fn new(config: &RuntimeConfig) -> Result<Self, ClientError> {
		let http = reqwest::Client::builder()
			.timeout(Duration::from_secs(30))
			.build()?;
		Ok(Self {
			base_url: config.api_url.trim_end_matches('/').to_string(),
			http,
		})
	}

	fn collection_url(&self, kind: EntityKind) -> String {
		format!("{}{}", self.base_url, kind.collection_path())
	}

	fn item_url(&self, kind: EntityKind, id: &str) -> String {
		format!("{}/{}", self.collection_url(kind), id)
	}

	/// Fetch every record of a kind.
	pub async fn list(&self, kind: EntityKind) -> Result<Vec<Value>, ClientError> {
		let url = self.collection_url(kind);
		tracing::debug!(%url, "listing records");
		let response = self.http.get(&url).send().await?;
		Self::parse(response).await
	}

	/// Fetch one record by id.
	pub async fn get(
		&self,
		kind: EntityKind,
		id: &str,
	) -> Result<HashMap<String, Value>, ClientError> {
		let url = self.item_url(kind, id);
		tracing::debug!(%url, "fetching record");
		let response = self.http.get(&url).send().await?;
		Self::parse(response).await
	}

	pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), ClientError> {
		let url = self.item_url(kind, id);
		tracing::debug!(%url, "deleting record");
		let response = self.http.delete(&url).send().await?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(classify(status, &body));
		}
		Ok(())
	}

	/// Fetch a record and overlay it onto the schema's default draft, so the
	/// wizard always starts from a complete field set even when the backend
	/// omits keys.
	pub async fn fetch_for_edit(
		&self,
		schema: &EntitySchema,
		id: &str,
	) -> Result<HashMap<String, Value>, ClientError> {
		let record = self.get(schema.kind(), id).await?;
		Ok(overlay(schema.default_draft(), record))
	}

	/// Like [`ApiClient::fetch_for_edit`], but a missing record falls back to
	/// the default draft (create mode) instead of failing.
	pub async fn fetch_or_default(
		&self,
		schema: &EntitySchema,
		id: &str,
	) -> Result<HashMap<String, Value>, ClientError> {
		match self.fetch_for_edit(schema, id).await {
			Err(ClientError::NotFound) => {
				tracing::debug!(kind = schema.kind().name(), %id, "record not found, using defaults");
				Ok(schema.default_draft())
			}
			other => other,
		}
	}

	/// Create a record from a draft snapshot.
	pub async fn create(
		&self,
		schema: &EntitySchema,
		snapshot: &HashMap<String, Value>,
		attachments: Vec<Attachment>,
	) -> Result<Value, ClientError> {
		let url = self.collection_url(schema.kind());
		tracing::debug!(%url, "creating record");
		self.submit(self.http.post(&url), schema, snapshot, attachments)
			.await
	}

	/// Update a record from a draft snapshot.
	pub async fn update(
		&self,
		schema: &EntitySchema,
		id: &str,
		snapshot: &HashMap<String, Value>,
		attachments: Vec<Attachment>,
	) -> Result<Value, ClientError> {
		let url = self.item_url(schema.kind(), id);
		tracing::debug!(%url, "updating record");
		self.submit(self.http.put(&url), schema, snapshot, attachments)
			.await
	}

	async fn submit(
		&self,
		request: reqwest::RequestBuilder,
		schema: &EntitySchema,
		snapshot: &HashMap<String, Value>,
		attachments: Vec<Attachment>,
	) -> Result<Value, ClientError> {
		let mut form = reqwest::multipart::Form::new();
		for (name, text) in text_parts(schema, snapshot) {
			form = form.text(name, text);
		}
		for attachment in attachments {
			let part = reqwest::multipart::Part::bytes(attachment.bytes)
				.file_name(attachment.filename)
				.mime_str(&attachment.content_type)?;
			form = form.part(attachment.field, part);
		}
		let response = request.multipart(form).send().await?;
		Self::parse(response).await
	}

	async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			tracing::debug!(status = %status, "request failed");
			return Err(classify(status, &body));
		}
		Ok(response.json().await?)
	}
}

/// Overlay a fetched record onto the default draft; record keys win, defaults
/// fill whatever the backend omitted.
pub(crate) fn overlay(
	mut defaults: HashMap<String, Value>,
	record: HashMap<String, Value>,
) -> HashMap<String, Value> {
	defaults.extend(record);
	defaults
}

/// Shape the text parts of a multipart submit, in schema field order.
///
/// List fields are JSON-stringified; a list that arrives as newline-delimited
/// text (an import) is split first. File fields contribute a text part only
/// when they hold an existing stored reference.
pub(crate) fn text_parts(
	schema: &EntitySchema,
	snapshot: &HashMap<String, Value>,
) -> Vec<(String, String)> {
	let mut parts = vec![];
	for field in schema.fields() {
		let Some(value) = snapshot.get(&field.name) else {
			continue;
		};
		match field.kind {
			FieldKind::List => parts.push((field.name.clone(), list_part(value))),
			FieldKind::FileRef => {
				if let Value::String(reference) = value
					&& !reference.is_empty()
				{
					parts.push((field.name.clone(), reference.clone()));
				}
			}
			_ => parts.push((field.name.clone(), scalar_part(value))),
		}
	}
	parts
}

fn list_part(value: &Value) -> String {
	let items: Vec<String> = match value {
		Value::Array(items) => items
			.iter()
			.map(|item| match item {
				Value::String(s) => s.clone(),
				other => other.to_string(),
			})
			.collect(),
		Value::String(text) => text
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(str::to_string)
			.collect(),
		_ => vec![],
	};
	serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string())
}

fn scalar_part(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use dentora_schema::EntityKind;
	use serde_json::json;

	fn client() -> ApiClient {
		let config = RuntimeConfig {
			api_url: "https://api.dentora.md/".to_string(),
			..RuntimeConfig::default()
		};
		ApiClient::new(&config).unwrap()
	}

	#[test]
	fn test_urls_join_without_double_slashes() {
		let client = client();

		assert_eq!(
			client.collection_url(EntityKind::Service),
			"https://api.dentora.md/api/services"
		);
		assert_eq!(
			client.item_url(EntityKind::BlogPost, "66f2"),
			"https://api.dentora.md/api/blog-posts/66f2"
		);
	}

	#[test]
	fn test_list_fields_are_json_stringified() {
		let schema = EntityKind::Service.schema();
		let mut snapshot = schema.default_draft();
		snapshot.insert("featuresEn".to_string(), json!(["Painless", "Fast"]));

		let parts = text_parts(&schema, &snapshot);
		let features = parts.iter().find(|(name, _)| name == "featuresEn").unwrap();
		assert_eq!(features.1, r#"["Painless","Fast"]"#);
	}

	#[test]
	fn test_imported_newline_lists_are_split_before_stringifying() {
		let schema = EntityKind::Service.schema();
		let mut snapshot = schema.default_draft();
		snapshot.insert(
			"featuresRo".to_string(),
			json!("Caracteristica 1\n\nCaracteristica 2\n"),
		);

		let parts = text_parts(&schema, &snapshot);
		let features = parts.iter().find(|(name, _)| name == "featuresRo").unwrap();
		assert_eq!(features.1, r#"["Caracteristica 1","Caracteristica 2"]"#);
	}

	#[test]
	fn test_pending_uploads_are_not_text_parts() {
		let schema = EntityKind::Service.schema();
		let mut snapshot = schema.default_draft();
		snapshot.insert(
			"heroImage".to_string(),
			json!({"filename": "hero.jpg", "size": 2048}),
		);
		snapshot.insert("firstIconPath".to_string(), json!("/uploads/icon.svg"));

		let parts = text_parts(&schema, &snapshot);
		assert!(!parts.iter().any(|(name, _)| name == "heroImage"));

		let icon = parts
			.iter()
			.find(|(name, _)| name == "firstIconPath")
			.unwrap();
		assert_eq!(icon.1, "/uploads/icon.svg");
	}

	#[test]
	fn test_scalars_render_as_text() {
		let schema = EntityKind::Testimonial.schema();
		let mut snapshot = schema.default_draft();
		snapshot.insert("rating".to_string(), json!(4));
		snapshot.insert("isActive".to_string(), json!(false));

		let parts = text_parts(&schema, &snapshot);
		let get = |name: &str| {
			parts
				.iter()
				.find(|(n, _)| n == name)
				.map(|(_, v)| v.as_str())
				.unwrap()
		};
		assert_eq!(get("rating"), "4");
		assert_eq!(get("isActive"), "false");
	}

	#[tokio::test]
	async fn test_unreachable_backend_is_a_transport_error() {
		let config = RuntimeConfig {
			// Discard port, nothing listens there.
			api_url: "http://127.0.0.1:9/".to_string(),
			..RuntimeConfig::default()
		};
		let client = ApiClient::new(&config).unwrap();

		let err = client.list(EntityKind::Service).await.unwrap_err();
		assert!(matches!(err, ClientError::Transport(_)));
	}

	#[test]
	fn test_overlay_fills_omitted_keys_from_defaults() {
		let schema = EntityKind::Service.schema();
		let mut record = HashMap::new();
		record.insert("titleEn".to_string(), json!("Implants"));
		record.insert("_id".to_string(), json!("66f2"));

		let draft = overlay(schema.default_draft(), record);

		assert_eq!(draft.get("titleEn"), Some(&json!("Implants")));
		assert_eq!(draft.get("titleRo"), Some(&json!("")));
		assert_eq!(draft.get("_id"), Some(&json!("66f2")));
	}
}
