//! Clinic team members

use crate::entity::{EntityKind, EntitySchema};
use dentora_forms::{FieldDef, StepDef};

pub fn schema() -> EntitySchema {
	let text = vec![
		FieldDef::text("name").required(),
		FieldDef::text("role").required(),
		FieldDef::text("bio").required(),
		FieldDef::integer("orderIndex").with_min_value(0),
	];

	let image = vec![FieldDef::file("imageUrl").required()];

	EntitySchema::new(
		EntityKind::TeamMember,
		vec![
			StepDef::new("text", text),
			StepDef::new("image", image),
			StepDef::new("review", vec![]),
		],
		vec![],
	)
}
