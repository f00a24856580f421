//! Embedded social-media videos

use super::{localized_text, localized_with};
use crate::entity::{EntityKind, EntitySchema};
use crate::localized::LocalizedField;
use dentora_forms::{FieldDef, StepDef};
use serde_json::json;

pub const PLATFORMS: [&str; 2] = ["instagram", "tiktok"];

const TITLE: LocalizedField = LocalizedField::new("title", "titleEn", "titleRo", "titleRu");
const DESCRIPTION: LocalizedField = LocalizedField::new(
	"description",
	"descriptionEn",
	"descriptionRo",
	"descriptionRu",
);

pub fn schema() -> EntitySchema {
	let mut text = vec![
		FieldDef::choice("platform", PLATFORMS).required(),
		FieldDef::url("videoUrl").required(),
	];
	text.extend(localized_with(&TITLE, |f| f.required()));
	text.extend(localized_text(&DESCRIPTION));
	text.extend([
		FieldDef::integer("displayOrder").required().with_min_value(0),
		FieldDef::boolean("isActive").with_default(json!(true)),
	]);

	EntitySchema::new(
		EntityKind::SocialMedia,
		vec![StepDef::new("text", text), StepDef::new("review", vec![])],
		vec![TITLE, DESCRIPTION],
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use std::collections::HashMap;

	#[test]
	fn test_platform_defaults_to_instagram() {
		let draft = schema().default_draft();
		assert_eq!(draft.get("platform"), Some(&json!("instagram")));
	}

	#[test]
	fn test_video_url_format_checked() {
		let mut wizard = schema().wizard(None).unwrap();

		let mut input = HashMap::new();
		input.insert("platform".to_string(), json!("tiktok"));
		input.insert("videoUrl".to_string(), json!("not-a-url"));
		input.insert("titleEn".to_string(), json!("Smile makeover"));
		input.insert("titleRo".to_string(), json!("Transformarea zâmbetului"));
		input.insert("titleRu".to_string(), json!("Преображение улыбки"));

		let err = wizard.advance(input.clone()).unwrap_err();
		let dentora_forms::WizardError::Validation(violations) = err else {
			panic!("expected validation failure");
		};
		assert!(violations.iter().all(|v| v.field == "videoUrl"));

		input.insert(
			"videoUrl".to_string(),
			json!("https://www.instagram.com/reel/abc123/"),
		);
		wizard.advance(input).unwrap();
	}
}
