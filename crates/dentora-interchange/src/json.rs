//! Structured JSON import/export
//!
//! Import accepts a single JSON object and canonicalizes it to flat text
//! values: arrays become one newline-delimited string, scalars are rendered
//! as text, and every expected field is present afterwards even if the
//! document omitted it. Export dumps the authoring template, never a live
//! draft.

use crate::InterchangeError;
use crate::template::Template;
use serde_json::Value;
use std::collections::HashMap;

/// Decode an imported JSON document into flat field values.
///
/// # Examples
///
/// ```
/// use dentora_interchange::json;
///
/// let doc = r#"{"titleEn": "Implants", "featuresEn": ["Painless", "Fast"]}"#;
/// let expected = ["titleEn", "titleRo", "featuresEn"];
/// let values = json::decode(doc, &expected).unwrap();
///
/// assert_eq!(values["titleEn"], "Implants");
/// assert_eq!(values["featuresEn"], "Painless\nFast");
/// assert_eq!(values["titleRo"], "");
/// ```
pub fn decode<S: AsRef<str>>(
	text: &str,
	expected_fields: &[S],
) -> Result<HashMap<String, String>, InterchangeError> {
	let document: Value = serde_json::from_str(text)
		.map_err(|e| InterchangeError::Malformed(format!("invalid JSON: {e}")))?;
	let Value::Object(object) = document else {
		return Err(InterchangeError::Malformed(
			"expected a JSON object at the top level".to_string(),
		));
	};

	let mut values: HashMap<String, String> = object
		.into_iter()
		.map(|(key, value)| (key, canonicalize(value)))
		.collect();

	for field in expected_fields {
		values.entry(field.as_ref().to_string()).or_default();
	}
	Ok(values)
}

/// Render the authoring template as a pretty JSON document.
pub fn encode(template: &Template) -> String {
	let mut object = serde_json::Map::new();
	for field in template.fields() {
		object.insert(field.name.to_string(), Value::String(field.example.to_string()));
	}
	// A map of plain strings cannot fail to serialize.
	serde_json::to_string_pretty(&Value::Object(object)).unwrap_or_default()
}

/// Flatten one JSON value to text: arrays join their items with newlines,
/// scalars render as-is, null becomes empty.
fn canonicalize(value: Value) -> String {
	match value {
		Value::String(s) => s,
		Value::Array(items) => items
			.into_iter()
			.map(canonicalize)
			.collect::<Vec<_>>()
			.join("\n"),
		Value::Null => String::new(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		// Nested objects have no flat representation; keep them as JSON text.
		other @ Value::Object(_) => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::template::service_template;

	const EXPECTED: [&str; 17] = [
		"titleKey",
		"price",
		"titleEn",
		"titleRo",
		"titleRu",
		"descEn",
		"descRo",
		"descRu",
		"metaDescriptionEn",
		"metaDescriptionRo",
		"metaDescriptionRu",
		"metaKeywordsEn",
		"metaKeywordsRo",
		"metaKeywordsRu",
		"featuresEn",
		"featuresRo",
		"featuresRu",
	];

	#[test]
	fn test_arrays_join_with_newlines() {
		let doc = r#"{"featuresEn": ["Panoramic X-ray", "3D scan"], "titleEn": "Diagnostics"}"#;
		let values = decode(doc, &EXPECTED).unwrap();

		assert_eq!(values["featuresEn"], "Panoramic X-ray\n3D scan");
		assert_eq!(values["titleEn"], "Diagnostics");
	}

	#[test]
	fn test_absent_expected_fields_default_to_empty() {
		let values = decode("{}", &EXPECTED).unwrap();

		assert_eq!(values.len(), EXPECTED.len());
		assert!(values.values().all(String::is_empty));
	}

	#[test]
	fn test_scalars_canonicalize_to_text() {
		let doc = r#"{"price": 500, "isActive": true, "note": null}"#;
		let values = decode(doc, &[] as &[&str]).unwrap();

		assert_eq!(values["price"], "500");
		assert_eq!(values["isActive"], "true");
		assert_eq!(values["note"], "");
	}

	#[test]
	fn test_unexpected_keys_are_kept() {
		let doc = r#"{"customField": "kept"}"#;
		let values = decode(doc, &EXPECTED).unwrap();

		assert_eq!(values["customField"], "kept");
	}

	#[test]
	fn test_non_object_documents_are_rejected() {
		assert!(matches!(
			decode("[1, 2]", &EXPECTED),
			Err(InterchangeError::Malformed(_))
		));
		assert!(matches!(
			decode("not json", &EXPECTED),
			Err(InterchangeError::Malformed(_))
		));
	}

	#[test]
	fn test_template_round_trip() {
		let template = service_template();
		let encoded = encode(&template);
		let values = decode(&encoded, &EXPECTED).unwrap();

		for field in template.fields() {
			assert_eq!(values[field.name], field.example, "{}", field.name);
		}
	}
}
