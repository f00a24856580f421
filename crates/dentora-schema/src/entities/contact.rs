//! Clinic contact details
//!
//! A single record: phone numbers, addresses and working hours per language,
//! social profile links and map coordinates. The wizard is one info step plus
//! review.

use super::localized_text;
use crate::entity::{EntityKind, EntitySchema};
use crate::localized::LocalizedField;
use dentora_forms::{FieldDef, StepDef};

const ADDRESS: LocalizedField =
	LocalizedField::new("address", "addressEn", "addressRo", "addressRu");
const WORKING_HOURS: LocalizedField = LocalizedField::new(
	"workingHours",
	"workingHoursEn",
	"workingHoursRo",
	"workingHoursRu",
);

pub fn schema() -> EntitySchema {
	let mut info = vec![
		FieldDef::text("phoneNumber").required(),
		FieldDef::text("email").required(),
		FieldDef::text("secondaryPhoneNumber"),
		FieldDef::text("secondaryEmail"),
		FieldDef::text("whatsappNumber"),
		FieldDef::text("emergencyContact"),
	];
	info.extend(localized_text(&ADDRESS));
	info.extend(localized_text(&WORKING_HOURS));
	info.extend([
		FieldDef::url("facebookUrl"),
		FieldDef::url("instagramUrl"),
		FieldDef::url("twitterUrl"),
		FieldDef::url("linkedinUrl"),
		FieldDef::text("latitude"),
		FieldDef::text("longitude"),
	]);

	EntitySchema::new(
		EntityKind::Contact,
		vec![StepDef::new("info", info), StepDef::new("review", vec![])],
		vec![ADDRESS, WORKING_HOURS],
	)
}
