//! Therapy session types
//!
//! Session offerings (in-office, online, first consultation) with a location,
//! duration and per-language benefit lists. The icon choice doubles as the
//! session-kind discriminant on the public site.

use super::localized_with;
use crate::entity::{EntityKind, EntitySchema};
use crate::localized::LocalizedField;
use dentora_forms::{FieldDef, StepDef};
use serde_json::json;

pub const ICON_TYPES: [&str; 3] = ["building", "video", "message"];

const TITLE: LocalizedField = LocalizedField::new("title", "titleEn", "titleRo", "titleRu");
const LOCATION: LocalizedField =
	LocalizedField::new("location", "locationEn", "locationRo", "locationRu");
const DESCRIPTION: LocalizedField = LocalizedField::new(
	"description",
	"descriptionEn",
	"descriptionRo",
	"descriptionRu",
);
const BENEFITS: LocalizedField =
	LocalizedField::new("benefits", "benefitsEn", "benefitsRo", "benefitsRu");

pub fn schema() -> EntitySchema {
	let mut info = vec![FieldDef::choice("iconType", ICON_TYPES).required()];
	info.extend(localized_with(&TITLE, |f| f.required()));
	info.extend(localized_with(&LOCATION, |f| f.required()));
	info.push(
		FieldDef::text("duration")
			.required()
			.with_default(json!("50 minute")),
	);
	info.extend(localized_with(&DESCRIPTION, |f| f.required()));
	info.extend(BENEFITS.keys().into_iter().map(FieldDef::list));
	info.extend([
		FieldDef::boolean("isActive").with_default(json!(true)),
		FieldDef::integer("displayOrder").with_min_value(0),
	]);

	EntitySchema::new(
		EntityKind::SessionType,
		vec![StepDef::new("info", info), StepDef::new("review", vec![])],
		vec![TITLE, LOCATION, DESCRIPTION, BENEFITS],
	)
}
