//! Declarative field definitions for wizard steps
//!
//! Every entity schema is a list of [`FieldDef`] values; there is one field
//! definition type for the whole admin panel rather than a struct per entity.
//! A definition carries the field's kind, its default value, and its
//! validation rules. [`FieldDef::check`] evaluates every applicable rule and
//! returns the complete list of violation messages for the value.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// HTTP/HTTPS URL pattern.
//
// Validates URLs with:
// - http or https scheme only
// - Valid domain labels (no leading/trailing hyphens)
// - Optional port number (1-5 digits)
// - Optional path, query string, and fragment
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^https?://[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]*[a-zA-Z0-9])?)*(:[0-9]{1,5})?(/[^\s?#]*)?(\?[^\s#]*)?(#[^\s]*)?$",
	)
	.expect("URL_REGEX: invalid regex pattern")
});

/// The value shape a field accepts.
///
/// `FileRef` accepts either an object payload (`{"filename": "...", "size": N}`)
/// describing a file selected for upload, or a plain string referencing a
/// resource the backend already stores (an image URL or path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
	Text,
	Integer,
	Boolean,
	Choice,
	Url,
	List,
	FileRef,
}

/// A single field of an entity schema.
///
/// # Examples
///
/// ```
/// use dentora_forms::FieldDef;
///
/// let field = FieldDef::text("titleEn").required().with_max_length(160);
/// assert_eq!(field.name, "titleEn");
/// assert!(field.required);
/// assert_eq!(field.max_length, Some(160));
/// ```
#[derive(Debug, Clone)]
pub struct FieldDef {
	pub name: String,
	pub label: Option<String>,
	pub kind: FieldKind,
	pub required: bool,
	pub max_length: Option<usize>,
	pub min_value: Option<i64>,
	pub max_value: Option<i64>,
	pub choices: Vec<String>,
	pub default: Option<Value>,
}

impl FieldDef {
	fn new(name: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			label: None,
			kind,
			required: false,
			max_length: None,
			min_value: None,
			max_value: None,
			choices: vec![],
			default: None,
		}
	}

	/// Create a free-text field
	pub fn text(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Text)
	}

	/// Create an integer field
	pub fn integer(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Integer)
	}

	/// Create a boolean field
	pub fn boolean(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Boolean)
	}

	/// Create an enumerated field restricted to the given values.
	///
	/// # Examples
	///
	/// ```
	/// use dentora_forms::FieldDef;
	///
	/// let field = FieldDef::choice("platform", ["instagram", "tiktok"]);
	/// assert_eq!(field.choices, vec!["instagram", "tiktok"]);
	/// ```
	pub fn choice<I, S>(name: impl Into<String>, choices: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut field = Self::new(name, FieldKind::Choice);
		field.choices = choices.into_iter().map(Into::into).collect();
		field
	}

	/// Create a URL field (http/https format checked)
	pub fn url(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::Url)
	}

	/// Create an ordered-list-of-text field
	pub fn list(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::List)
	}

	/// Create a file-or-existing-reference field
	pub fn file(name: impl Into<String>) -> Self {
		Self::new(name, FieldKind::FileRef)
	}

	/// Mark the field as required
	///
	/// # Examples
	///
	/// ```
	/// use dentora_forms::FieldDef;
	///
	/// let field = FieldDef::text("name").required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the maximum length in characters
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Set the minimum allowed value for an integer field
	pub fn with_min_value(mut self, min_value: i64) -> Self {
		self.min_value = Some(min_value);
		self
	}

	/// Set the maximum allowed value for an integer field
	pub fn with_max_value(mut self, max_value: i64) -> Self {
		self.max_value = Some(max_value);
		self
	}

	/// Set a human-readable label
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Override the documented default value for the field
	///
	/// # Examples
	///
	/// ```
	/// use dentora_forms::FieldDef;
	/// use serde_json::json;
	///
	/// let field = FieldDef::boolean("isActive").with_default(json!(true));
	/// assert_eq!(field.default_value(), json!(true));
	/// ```
	pub fn with_default(mut self, default: Value) -> Self {
		self.default = Some(default);
		self
	}

	/// The value a fresh draft holds for this field.
	///
	/// Explicit defaults win; otherwise the kind decides: empty string for
	/// text/URL, `0` for integers, `false` for booleans, the first choice for
	/// enumerations, an empty array for lists, and `null` for file references.
	pub fn default_value(&self) -> Value {
		if let Some(default) = &self.default {
			return default.clone();
		}
		match self.kind {
			FieldKind::Text | FieldKind::Url => Value::String(String::new()),
			FieldKind::Integer => Value::from(0),
			FieldKind::Boolean => Value::Bool(false),
			FieldKind::Choice => self
				.choices
				.first()
				.map(|c| Value::String(c.clone()))
				.unwrap_or(Value::String(String::new())),
			FieldKind::List => Value::Array(vec![]),
			FieldKind::FileRef => Value::Null,
		}
	}

	fn label_or_name(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.name)
	}

	/// Evaluate every rule of the field against the given value and return
	/// all violation messages. An empty vector means the value is valid.
	///
	/// # Examples
	///
	/// ```
	/// use dentora_forms::FieldDef;
	/// use serde_json::json;
	///
	/// let field = FieldDef::text("titleEn").required().with_max_length(5);
	/// assert!(field.check(Some(&json!("Alfa"))).is_empty());
	/// assert_eq!(field.check(Some(&json!(""))).len(), 1);
	/// assert_eq!(field.check(Some(&json!("Too long title"))).len(), 1);
	/// ```
	pub fn check(&self, value: Option<&Value>) -> Vec<String> {
		let mut messages = vec![];

		if self.is_empty(value) {
			if self.required {
				messages.push(format!("{} is required", self.label_or_name()));
			}
			// No further rules apply to an absent value.
			return messages;
		}

		let value = match value {
			Some(v) => v,
			None => return messages,
		};

		match self.kind {
			FieldKind::Text => {
				let Some(text) = value.as_str() else {
					messages.push(format!("{} must be text", self.label_or_name()));
					return messages;
				};
				if let Some(max) = self.max_length
					&& text.chars().count() > max
				{
					messages.push(format!("Max {} characters", max));
				}
			}
			FieldKind::Integer => {
				let Some(n) = value.as_i64() else {
					messages.push(format!("{} must be a number", self.label_or_name()));
					return messages;
				};
				if let Some(min) = self.min_value
					&& n < min
				{
					messages.push(format!(
						"{} must be at least {}",
						self.label_or_name(),
						min
					));
				}
				if let Some(max) = self.max_value
					&& n > max
				{
					messages.push(format!("{} must be at most {}", self.label_or_name(), max));
				}
			}
			FieldKind::Boolean => {
				if !value.is_boolean() {
					messages.push(format!("{} must be true or false", self.label_or_name()));
				}
			}
			FieldKind::Choice => {
				let Some(text) = value.as_str() else {
					messages.push(format!("{} must be text", self.label_or_name()));
					return messages;
				};
				if !self.choices.iter().any(|c| c == text) {
					messages.push(format!(
						"{} must be one of: {}",
						self.label_or_name(),
						self.choices.join(", ")
					));
				}
			}
			FieldKind::Url => {
				let Some(text) = value.as_str() else {
					messages.push(format!("{} must be text", self.label_or_name()));
					return messages;
				};
				if !URL_REGEX.is_match(text) {
					messages.push("Must be a valid URL".to_string());
				}
				if let Some(max) = self.max_length
					&& text.chars().count() > max
				{
					messages.push(format!("Max {} characters", max));
				}
			}
			FieldKind::List => {
				let Some(items) = value.as_array() else {
					messages.push(format!("{} must be a list", self.label_or_name()));
					return messages;
				};
				if items.iter().any(|item| !item.is_string()) {
					messages.push(format!(
						"{} must contain only text entries",
						self.label_or_name()
					));
				}
			}
			FieldKind::FileRef => {
				// A string is an existing stored reference; an object is a
				// pending upload and must name its file.
				match value {
					Value::String(_) => {}
					Value::Object(obj) => {
						let filename = obj.get("filename").and_then(|f| f.as_str());
						if filename.is_none_or(str::is_empty) {
							messages.push(format!(
								"{} upload is missing a filename",
								self.label_or_name()
							));
						}
					}
					_ => messages.push(format!(
						"{} must be a file or an existing reference",
						self.label_or_name()
					)),
				}
			}
		}

		messages
	}

	/// Whether the value counts as absent for the required rule.
	fn is_empty(&self, value: Option<&Value>) -> bool {
		let Some(value) = value else {
			return true;
		};
		match value {
			Value::Null => true,
			Value::String(s) => s.trim().is_empty(),
			Value::Array(items) => items.is_empty() && self.kind == FieldKind::List,
			Value::Object(obj) => {
				// A file payload without a filename is as good as absent.
				self.kind == FieldKind::FileRef
					&& obj
						.get("filename")
						.and_then(|f| f.as_str())
						.is_none_or(str::is_empty)
			}
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_required_text_field() {
		let field = FieldDef::text("titleEn").required();

		assert_eq!(field.check(Some(&json!("Alfa"))), Vec::<String>::new());
		assert_eq!(field.check(Some(&json!(""))).len(), 1);
		assert_eq!(field.check(Some(&json!("   "))).len(), 1);
		assert_eq!(field.check(None).len(), 1);
	}

	#[test]
	fn test_optional_field_accepts_absence() {
		let field = FieldDef::text("subtitleEn");

		assert!(field.check(None).is_empty());
		assert!(field.check(Some(&json!(""))).is_empty());
	}

	#[test]
	fn test_max_length_counts_chars_not_bytes() {
		let field = FieldDef::text("metaDescriptionRu").with_max_length(10);

		// Ten Cyrillic characters are more than ten bytes but within the limit.
		assert!(field.check(Some(&json!("Описание у"))).is_empty());
		assert_eq!(field.check(Some(&json!("Описание усл"))).len(), 1);
	}

	#[test]
	fn test_integer_bounds() {
		let field = FieldDef::integer("rating")
			.required()
			.with_min_value(1)
			.with_max_value(5);

		assert!(field.check(Some(&json!(3))).is_empty());
		assert_eq!(field.check(Some(&json!(0))).len(), 1);
		assert_eq!(field.check(Some(&json!(6))).len(), 1);
		assert_eq!(field.check(Some(&json!("three"))).len(), 1);
	}

	#[test]
	fn test_choice_membership() {
		let field = FieldDef::choice("platform", ["instagram", "tiktok"]).required();

		assert!(field.check(Some(&json!("tiktok"))).is_empty());
		assert_eq!(field.check(Some(&json!("youtube"))).len(), 1);
	}

	#[test]
	fn test_url_format() {
		let field = FieldDef::url("videoUrl").required();

		assert!(
			field
				.check(Some(&json!("https://www.instagram.com/p/abc")))
				.is_empty()
		);
		assert_eq!(field.check(Some(&json!("not-a-url"))).len(), 1);
		assert_eq!(field.check(Some(&json!("ftp://example.com"))).len(), 1);
	}

	#[test]
	fn test_file_ref_accepts_payload_or_reference() {
		let field = FieldDef::file("beforeImage").required();

		assert!(
			field
				.check(Some(&json!({"filename": "before.jpg", "size": 1024})))
				.is_empty()
		);
		assert!(
			field
				.check(Some(&json!("/uploads/before-123.jpg")))
				.is_empty()
		);
		assert_eq!(field.check(Some(&json!({"size": 1024}))).len(), 1);
		assert_eq!(field.check(None).len(), 1);
	}

	#[test]
	fn test_list_entries_must_be_text() {
		let field = FieldDef::list("ctaButtons");

		assert!(field.check(Some(&json!(["Book now", "Call us"]))).is_empty());
		assert_eq!(field.check(Some(&json!(["Book now", 7]))).len(), 1);
	}

	#[test]
	fn test_default_values_per_kind() {
		assert_eq!(FieldDef::text("a").default_value(), json!(""));
		assert_eq!(FieldDef::integer("b").default_value(), json!(0));
		assert_eq!(FieldDef::boolean("c").default_value(), json!(false));
		assert_eq!(
			FieldDef::choice("d", ["hero", "cta"]).default_value(),
			json!("hero")
		);
		assert_eq!(FieldDef::list("e").default_value(), json!([]));
		assert_eq!(FieldDef::file("f").default_value(), Value::Null);
		assert_eq!(
			FieldDef::integer("g").with_default(json!(7)).default_value(),
			json!(7)
		);
	}

	#[test]
	fn test_all_violations_reported_not_just_first() {
		let field = FieldDef::url("siteUrl").with_max_length(5);

		let messages = field.check(Some(&json!("not a url and too long")));
		assert_eq!(messages.len(), 2);
	}
}
