//! Patient testimonials

use crate::entity::{EntityKind, EntitySchema};
use dentora_forms::{FieldDef, StepDef};
use serde_json::json;

pub fn schema() -> EntitySchema {
	let text = vec![
		FieldDef::text("name").required(),
		FieldDef::text("role").required(),
		FieldDef::text("text").required(),
		FieldDef::integer("rating")
			.required()
			.with_min_value(1)
			.with_max_value(5)
			.with_default(json!(5)),
		FieldDef::boolean("isActive").with_default(json!(true)),
	];

	EntitySchema::new(
		EntityKind::Testimonial,
		vec![StepDef::new("text", text), StepDef::new("review", vec![])],
		vec![],
	)
}
