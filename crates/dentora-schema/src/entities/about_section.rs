//! About-page sections
//!
//! The about page is composed of ordered sections of different shapes,
//! discriminated by `sectionType`. List-backed types (values, expertise,
//! qualifications) get an extra authoring step for their items; the other
//! types skip it entirely.

use super::{localized_text, localized_with};
use crate::entity::{EntityKind, EntitySchema};
use crate::localized::LocalizedField;
use dentora_forms::{FieldDef, StepCondition, StepDef};
use serde_json::json;

pub const SECTION_TYPES: [&str; 7] = [
	"hero",
	"approach",
	"values",
	"expertise",
	"qualifications",
	"diaspora",
	"cta",
];

/// Section types whose content is a list of items.
pub const ITEMIZED_SECTION_TYPES: [&str; 3] = ["values", "expertise", "qualifications"];

const TITLE: LocalizedField = LocalizedField::new("title", "titleEn", "titleRo", "titleRu");
const SUBTITLE: LocalizedField =
	LocalizedField::new("subtitle", "subtitleEn", "subtitleRo", "subtitleRu");
const CONTENT: LocalizedField =
	LocalizedField::new("content", "contentEn", "contentRo", "contentRu");
const IMAGE_ALT: LocalizedField = LocalizedField::new(
	"imageAltText",
	"imageAltTextEn",
	"imageAltTextRo",
	"imageAltTextRu",
);

pub fn schema() -> EntitySchema {
	let mut info = vec![FieldDef::choice("sectionType", SECTION_TYPES).required()];
	info.extend(localized_with(&TITLE, |f| f.required()));
	info.extend(localized_text(&SUBTITLE));
	info.extend(localized_text(&CONTENT));
	info.extend([
		FieldDef::list("ctaButtons"),
		FieldDef::integer("displayOrder").with_min_value(0),
		FieldDef::text("backgroundColor").with_default(json!("bg-background")),
		FieldDef::boolean("isActive").with_default(json!(true)),
	]);

	let items = vec![FieldDef::list("items")];

	let mut images = vec![FieldDef::file("imageUrl")];
	images.extend(localized_text(&IMAGE_ALT));

	EntitySchema::new(
		EntityKind::AboutSection,
		vec![
			StepDef::new("info", info),
			StepDef::new("items", items)
				.with_condition(StepCondition::new("sectionType", ITEMIZED_SECTION_TYPES)),
			StepDef::new("images", images),
			StepDef::new("review", vec![]),
		],
		vec![TITLE, SUBTITLE, CONTENT, IMAGE_ALT],
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use std::collections::HashMap;

	fn seed(section_type: &str) -> HashMap<String, serde_json::Value> {
		let mut seed = HashMap::new();
		seed.insert("sectionType".to_string(), json!(section_type));
		seed
	}

	#[rstest]
	#[case("values", 4)]
	#[case("expertise", 4)]
	#[case("qualifications", 4)]
	#[case("hero", 3)]
	#[case("cta", 3)]
	fn test_items_step_only_for_itemized_types(#[case] section_type: &str, #[case] steps: usize) {
		let wizard = schema().wizard(Some(seed(section_type))).unwrap();
		assert_eq!(wizard.total_steps(), steps);
	}

	#[test]
	fn test_defaults() {
		let draft = schema().default_draft();
		assert_eq!(draft.get("sectionType"), Some(&json!("hero")));
		assert_eq!(draft.get("backgroundColor"), Some(&json!("bg-background")));
		assert_eq!(draft.get("isActive"), Some(&json!(true)));
		assert_eq!(draft.get("items"), Some(&json!([])));
	}

	#[test]
	fn test_titles_required_in_all_languages() {
		let mut wizard = schema().wizard(Some(seed("hero"))).unwrap();

		let mut input = HashMap::new();
		input.insert("titleEn".to_string(), json!("Our clinic"));
		let err = wizard.advance(input).unwrap_err();

		let dentora_forms::WizardError::Validation(violations) = err else {
			panic!("expected validation failure");
		};
		let offending: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
		assert_eq!(offending, vec!["titleRo", "titleRu"]);
	}
}
