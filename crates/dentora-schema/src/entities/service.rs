//! Dental service pages
//!
//! A service page carries its landing copy in all three languages plus the
//! SEO block (meta description capped at 160 characters) and a bullet list of
//! features per language. The `titleKey` slug identifies the service in
//! public URLs.

use super::{localized_text, localized_with};
use crate::entity::{EntityKind, EntitySchema};
use crate::localized::LocalizedField;
use dentora_forms::{FieldDef, StepDef};

const TITLE: LocalizedField = LocalizedField::new("title", "titleEn", "titleRo", "titleRu");
const DESC: LocalizedField = LocalizedField::new("desc", "descEn", "descRo", "descRu");
const FEATURES: LocalizedField =
	LocalizedField::new("features", "featuresEn", "featuresRo", "featuresRu");
const META_DESCRIPTION: LocalizedField = LocalizedField::new(
	"metaDescription",
	"metaDescriptionEn",
	"metaDescriptionRo",
	"metaDescriptionRu",
);
const META_KEYWORDS: LocalizedField = LocalizedField::new(
	"metaKeywords",
	"metaKeywordsEn",
	"metaKeywordsRo",
	"metaKeywordsRu",
);

pub fn schema() -> EntitySchema {
	let mut info = vec![
		FieldDef::text("titleKey").required().with_label("URL slug"),
		FieldDef::text("price").required(),
	];
	info.extend(localized_with(&TITLE, |f| f.required()));
	info.extend(localized_text(&DESC));
	info.extend(FEATURES.keys().into_iter().map(FieldDef::list));
	info.extend(localized_with(&META_DESCRIPTION, |f| f.with_max_length(160)));
	info.extend(localized_text(&META_KEYWORDS));

	let images = vec![
		FieldDef::file("heroImage"),
		FieldDef::file("firstIconPath"),
		FieldDef::file("secondIconPath"),
	];

	EntitySchema::new(
		EntityKind::Service,
		vec![
			StepDef::new("info", info),
			StepDef::new("images", images),
			StepDef::new("review", vec![]),
		],
		vec![TITLE, DESC, FEATURES, META_DESCRIPTION, META_KEYWORDS],
	)
}
