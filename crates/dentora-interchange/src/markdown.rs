//! Heading-delimited markdown import/export
//!
//! The markdown form is the author-friendly one: each field is a `## name`
//! heading followed by its value lines. Document headings (`# ...`) and
//! blockquote section comments (`> ...`) are structural and never part of a
//! value. Decoding is forgiving -- missing headings simply leave the expected
//! field empty.

use crate::template::Template;
use regex::Regex;
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::LazyLock;

static FIELD_HEADING: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^##\s+(.+)$").expect("FIELD_HEADING: invalid regex pattern")
});

/// Decode a heading-delimited document into flat field values.
///
/// Values are trimmed of surrounding blank lines; interior newlines (feature
/// lists) survive. There is no hard failure mode: text before the first
/// heading is ignored and absent expected fields default to empty.
///
/// # Examples
///
/// ```
/// use dentora_interchange::markdown;
///
/// let doc = "## titleRo\nAlfa\n\n## titleRu\nBeta\n";
/// let values = markdown::decode(doc, &["titleEn", "titleRo", "titleRu"]);
///
/// assert_eq!(values["titleRo"], "Alfa");
/// assert_eq!(values["titleRu"], "Beta");
/// assert_eq!(values["titleEn"], "");
/// ```
pub fn decode<S: AsRef<str>>(text: &str, expected_fields: &[S]) -> HashMap<String, String> {
	let mut values = HashMap::new();
	let mut current_field: Option<&str> = None;
	let mut current_value = String::new();

	for line in text.lines() {
		if let Some(captures) = FIELD_HEADING.captures(line) {
			if let Some(field) = current_field.take() {
				values.insert(field.to_string(), current_value.trim().to_string());
			}
			current_field = captures.get(1).map(|m| m.as_str().trim());
			current_value.clear();
		} else if line.starts_with('#') || line.starts_with('>') {
			// Structural line, not field content.
		} else if current_field.is_some() {
			current_value.push_str(line);
			current_value.push('\n');
		}
	}
	if let Some(field) = current_field {
		values.insert(field.to_string(), current_value.trim().to_string());
	}

	for field in expected_fields {
		values.entry(field.as_ref().to_string()).or_default();
	}
	values
}

/// Render the authoring template as a heading-delimited document.
///
/// Sections become `> LABEL` comment lines, each field a `## name` block with
/// its example value, in the template's fixed order.
pub fn encode(template: &Template) -> String {
	let mut out = format!("# {}\n", template.title);
	for section in &template.sections {
		let _ = write!(out, "\n> {}\n", section.label);
		for field in section.fields {
			let _ = write!(out, "\n## {}\n{}\n", field.name, field.example);
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::template::service_template;
	use rstest::rstest;

	#[test]
	fn test_two_heading_document() {
		let values = decode("## titleRo\nAlfa\n## titleRu\nBeta\n", &[] as &[&str]);

		assert_eq!(values.len(), 2);
		assert_eq!(values["titleRo"], "Alfa");
		assert_eq!(values["titleRu"], "Beta");
	}

	#[test]
	fn test_multiline_values_keep_interior_newlines() {
		let doc = "## featuresEn\nFeature 1\nFeature 2\n\nFeature 3\n\n\n## price\n500 MDL\n";
		let values = decode(doc, &[] as &[&str]);

		assert_eq!(values["featuresEn"], "Feature 1\nFeature 2\n\nFeature 3");
		assert_eq!(values["price"], "500 MDL");
	}

	#[test]
	fn test_structural_lines_are_not_field_content() {
		let doc = "# Service Template\n\n> BASIC INFO\n\n## price\n500 MDL\n\n> NEXT SECTION\n";
		let values = decode(doc, &[] as &[&str]);

		assert_eq!(values["price"], "500 MDL");
	}

	#[rstest]
	#[case("")]
	#[case("no headings at all\njust prose\n")]
	#[case("## titleEn\nImplants\n")]
	fn test_missing_headings_default_to_empty(#[case] doc: &str) {
		let values = decode(doc, &["titleEn", "titleRo"]);

		assert!(values.contains_key("titleEn"));
		assert_eq!(values["titleRo"], "");
	}

	#[test]
	fn test_template_round_trip() {
		let template = service_template();
		let encoded = encode(&template);
		let values = decode(&encoded, &[] as &[&str]);

		for field in template.fields() {
			assert_eq!(values[field.name], field.example, "{}", field.name);
		}
	}

	#[test]
	fn test_encode_shape() {
		let encoded = encode(&service_template());

		assert!(encoded.starts_with("# Service Template\n"));
		assert!(encoded.contains("\n> BASIC INFO\n"));
		assert!(encoded.contains("\n## titleKey\nexample-service-slug\n"));
		assert!(encoded.contains("\n## featuresEn\nFeature 1\nFeature 2\nFeature 3\n"));
	}
}
