//! Per-entity schema tables
//!
//! One module per entity kind, each exposing a single `schema()` constructor.
//! Field names here are the wire names the backend expects; the localized
//! tables mirror the flat `<name><Lang>` key convention.

pub mod about_section;
pub mod before_after;
pub mod blog_post;
pub mod contact;
pub mod service;
pub mod session_type;
pub mod social_media;
pub mod team_member;
pub mod testimonial;

use crate::localized::LocalizedField;
use dentora_forms::FieldDef;

/// Three plain text fields, one per language.
pub(crate) fn localized_text(lf: &LocalizedField) -> Vec<FieldDef> {
	lf.keys().into_iter().map(FieldDef::text).collect()
}

/// Three text fields with a shared builder applied to each.
pub(crate) fn localized_with(
	lf: &LocalizedField,
	build: impl Fn(FieldDef) -> FieldDef,
) -> Vec<FieldDef> {
	lf.keys()
		.into_iter()
		.map(|key| build(FieldDef::text(key)))
		.collect()
}
