//! Per-step validation
//!
//! A step is validated as a whole: every rule of every field is evaluated and
//! the complete set of violations comes back, each tagged with the concrete
//! field key it belongs to. Nothing here mutates the draft.

use crate::field::FieldDef;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
	pub field: String,
	pub message: String,
}

impl Violation {
	pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			message: message.into(),
		}
	}
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.field, self.message)
	}
}

/// Validate the given step fields against a value map.
///
/// Returns every violation, not just the first, so the whole form can be
/// annotated in one pass.
///
/// # Examples
///
/// ```
/// use dentora_forms::{FieldDef, validate_step};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let fields = vec![
///     FieldDef::text("titleEn").required(),
///     FieldDef::text("titleRo").required(),
/// ];
///
/// let mut values = HashMap::new();
/// values.insert("titleEn".to_string(), json!(""));
/// values.insert("titleRo".to_string(), json!("Titlu"));
///
/// let violations = validate_step(&fields, &values);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].field, "titleEn");
/// ```
pub fn validate_step(fields: &[FieldDef], values: &HashMap<String, Value>) -> Vec<Violation> {
	let mut violations = vec![];
	for field in fields {
		for message in field.check(values.get(&field.name)) {
			violations.push(Violation::new(field.name.clone(), message));
		}
	}
	violations
}
