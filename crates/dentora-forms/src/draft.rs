//! Draft store
//!
//! The in-memory accumulator for the entity under construction. A draft is
//! created when a wizard session mounts (empty, or seeded from a fetched
//! record), mutated step by step, and discarded on submission or reset. It is
//! never persisted beyond the session.

use crate::field::FieldDef;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
	#[error("draft store has not been initialized")]
	NotInitialized,
}

pub type DraftResult<T> = Result<T, DraftError>;

/// In-memory entity draft.
///
/// After [`Draft::initialize`] every expected field is present, so step forms
/// and the interchange layer never see a missing key. Merging is shallow:
/// later keys overwrite earlier ones and arrays are replaced wholesale.
///
/// # Examples
///
/// ```
/// use dentora_forms::Draft;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let mut seed = HashMap::new();
/// seed.insert("titleRo".to_string(), json!("Titlu"));
///
/// let mut draft = Draft::new();
/// draft.initialize(seed);
///
/// let mut partial = HashMap::new();
/// partial.insert("titleEn".to_string(), json!("Title"));
/// draft.merge(partial).unwrap();
///
/// assert_eq!(draft.get("titleRo"), Some(&json!("Titlu")));
/// assert_eq!(draft.get("titleEn"), Some(&json!("Title")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Draft {
	values: Option<HashMap<String, Value>>,
}

impl Draft {
	/// Create an uninitialized draft
	pub fn new() -> Self {
		Self { values: None }
	}

	/// Initialize the draft from a seed map (shallow copy semantics).
	pub fn initialize(&mut self, seed: HashMap<String, Value>) {
		self.values = Some(seed);
	}

	/// Initialize the draft with the documented default of every field,
	/// overlaid by an optional seed (a record fetched for editing).
	///
	/// Every field named in `fields` is guaranteed present afterwards; seed
	/// keys outside the schema are kept as-is (the backend may return ids and
	/// timestamps the wizard does not edit but must send back).
	///
	/// # Examples
	///
	/// ```
	/// use dentora_forms::{Draft, FieldDef};
	/// use serde_json::json;
	///
	/// let fields = vec![FieldDef::text("titleEn"), FieldDef::boolean("isActive")];
	/// let mut draft = Draft::new();
	/// draft.initialize_with_defaults(&fields, None);
	///
	/// assert_eq!(draft.get("titleEn"), Some(&json!("")));
	/// assert_eq!(draft.get("isActive"), Some(&json!(false)));
	/// ```
	pub fn initialize_with_defaults(
		&mut self,
		fields: &[FieldDef],
		seed: Option<HashMap<String, Value>>,
	) {
		let mut values: HashMap<String, Value> = fields
			.iter()
			.map(|f| (f.name.clone(), f.default_value()))
			.collect();
		if let Some(seed) = seed {
			values.extend(seed);
		}
		self.values = Some(values);
	}

	pub fn is_initialized(&self) -> bool {
		self.values.is_some()
	}

	/// Shallow-merge a partial update into the draft.
	///
	/// Later keys overwrite earlier ones; list values are replaced, never
	/// concatenated. Merging the same partial twice leaves the draft unchanged
	/// after the first application.
	pub fn merge(&mut self, partial: HashMap<String, Value>) -> DraftResult<()> {
		let values = self.values.as_mut().ok_or(DraftError::NotInitialized)?;
		values.extend(partial);
		Ok(())
	}

	/// Return an immutable copy of the draft for submission.
	///
	/// Mutations after the snapshot was taken never affect it.
	pub fn snapshot(&self) -> DraftResult<HashMap<String, Value>> {
		self.values.clone().ok_or(DraftError::NotInitialized)
	}

	pub fn get(&self, field: &str) -> Option<&Value> {
		self.values.as_ref()?.get(field)
	}

	pub fn values(&self) -> Option<&HashMap<String, Value>> {
		self.values.as_ref()
	}

	/// Discard all accumulated state, returning to the uninitialized state.
	pub fn reset(&mut self) {
		self.values = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_merge_before_initialize_fails() {
		let mut draft = Draft::new();

		let result = draft.merge(HashMap::new());
		assert!(matches!(result, Err(DraftError::NotInitialized)));
	}

	#[test]
	fn test_merge_is_idempotent() {
		let mut draft = Draft::new();
		draft.initialize(HashMap::new());

		let mut partial = HashMap::new();
		partial.insert("titleEn".to_string(), json!("Title"));
		partial.insert("features".to_string(), json!(["a", "b"]));

		draft.merge(partial.clone()).unwrap();
		let once = draft.snapshot().unwrap();
		draft.merge(partial).unwrap();
		let twice = draft.snapshot().unwrap();

		assert_eq!(once, twice);
	}

	#[test]
	fn test_merge_replaces_arrays_wholesale() {
		let mut seed = HashMap::new();
		seed.insert("items".to_string(), json!(["old-1", "old-2"]));

		let mut draft = Draft::new();
		draft.initialize(seed);

		let mut partial = HashMap::new();
		partial.insert("items".to_string(), json!(["new"]));
		draft.merge(partial).unwrap();

		assert_eq!(draft.get("items"), Some(&json!(["new"])));
	}

	#[test]
	fn test_snapshot_is_isolated_from_later_mutation() {
		let mut draft = Draft::new();
		draft.initialize(HashMap::new());

		let mut partial = HashMap::new();
		partial.insert("name".to_string(), json!("before"));
		draft.merge(partial).unwrap();

		let snapshot = draft.snapshot().unwrap();

		let mut partial = HashMap::new();
		partial.insert("name".to_string(), json!("after"));
		draft.merge(partial).unwrap();

		assert_eq!(snapshot.get("name"), Some(&json!("before")));
		assert_eq!(draft.get("name"), Some(&json!("after")));
	}

	#[test]
	fn test_defaults_present_and_seed_overlays() {
		let fields = vec![
			FieldDef::text("titleEn"),
			FieldDef::integer("displayOrder"),
			FieldDef::boolean("isActive").with_default(json!(true)),
		];

		let mut seed = HashMap::new();
		seed.insert("titleEn".to_string(), json!("Hero"));
		seed.insert("_id".to_string(), json!("abc123"));

		let mut draft = Draft::new();
		draft.initialize_with_defaults(&fields, Some(seed));

		assert_eq!(draft.get("titleEn"), Some(&json!("Hero")));
		assert_eq!(draft.get("displayOrder"), Some(&json!(0)));
		assert_eq!(draft.get("isActive"), Some(&json!(true)));
		// Backend bookkeeping keys survive the overlay.
		assert_eq!(draft.get("_id"), Some(&json!("abc123")));
	}

	#[test]
	fn test_reset_discards_state() {
		let mut draft = Draft::new();
		draft.initialize(HashMap::new());
		assert!(draft.is_initialized());

		draft.reset();
		assert!(!draft.is_initialized());
		assert!(matches!(draft.snapshot(), Err(DraftError::NotInitialized)));
	}
}
