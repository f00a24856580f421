//! Before/after treatment galleries

use super::localized_with;
use crate::entity::{EntityKind, EntitySchema};
use crate::localized::LocalizedField;
use dentora_forms::{FieldDef, StepDef};
use serde_json::json;

const SERVICE_NAME: LocalizedField = LocalizedField::new(
	"serviceName",
	"serviceNameEn",
	"serviceNameRo",
	"serviceNameRu",
);
const SEO_DESCRIPTION: LocalizedField = LocalizedField::new(
	"seoDescription",
	"seoDescriptionEn",
	"seoDescriptionRo",
	"seoDescriptionRu",
);

pub fn schema() -> EntitySchema {
	let mut info = localized_with(&SERVICE_NAME, |f| f.required());
	info.extend(localized_with(&SEO_DESCRIPTION, |f| f.with_max_length(160)));
	info.extend([
		FieldDef::integer("orderIndex").with_min_value(0),
		FieldDef::boolean("isActive").with_default(json!(true)),
	]);

	let images = vec![
		FieldDef::file("beforeImage").required(),
		FieldDef::file("afterImage").required(),
	];

	EntitySchema::new(
		EntityKind::BeforeAfter,
		vec![
			StepDef::new("info", info),
			StepDef::new("images", images),
			StepDef::new("review", vec![]),
		],
		vec![SERVICE_NAME, SEO_DESCRIPTION],
	)
}
