//! Blog posts
//!
//! Posts have a fixed editorial structure: intro, up to three subheadings
//! with their body text, and a conclusion, each in all three languages. The
//! publishing date defaults to today in the site's long form
//! (`August 23, 2026`).

use super::{localized_text, localized_with};
use crate::entity::{EntityKind, EntitySchema};
use crate::localized::LocalizedField;
use dentora_forms::{FieldDef, StepDef};
use serde_json::json;

const BLOG_TITLE: LocalizedField =
	LocalizedField::new("blogTitle", "blogTitleEn", "blogTitleRo", "blogTitleRu");
const BLOG_INTRO: LocalizedField =
	LocalizedField::new("blogIntro", "blogIntroEn", "blogIntroRo", "blogIntroRu");
const FIRST_SUBHEADING_TITLE: LocalizedField = LocalizedField::new(
	"firstSubheadingTitle",
	"firstSubheadingTitleEn",
	"firstSubheadingTitleRo",
	"firstSubheadingTitleRu",
);
const FIRST_SUBHEADING_TEXT: LocalizedField = LocalizedField::new(
	"firstSubheadingText",
	"firstSubheadingTextEn",
	"firstSubheadingTextRo",
	"firstSubheadingTextRu",
);
const SECOND_SUBHEADING_TITLE: LocalizedField = LocalizedField::new(
	"secondSubheadingTitle",
	"secondSubheadingTitleEn",
	"secondSubheadingTitleRo",
	"secondSubheadingTitleRu",
);
const SECOND_SUBHEADING_TEXT: LocalizedField = LocalizedField::new(
	"secondSubheadingText",
	"secondSubheadingTextEn",
	"secondSubheadingTextRo",
	"secondSubheadingTextRu",
);
const THIRD_SUBHEADING_TITLE: LocalizedField = LocalizedField::new(
	"thirdSubheadingTitle",
	"thirdSubheadingTitleEn",
	"thirdSubheadingTitleRo",
	"thirdSubheadingTitleRu",
);
const THIRD_SUBHEADING_TEXT: LocalizedField = LocalizedField::new(
	"thirdSubheadingText",
	"thirdSubheadingTextEn",
	"thirdSubheadingTextRo",
	"thirdSubheadingTextRu",
);
const CONCLUSION: LocalizedField = LocalizedField::new(
	"conclusion",
	"conclusionEn",
	"conclusionRo",
	"conclusionRu",
);
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
const TITLE_IMAGE_ALT: LocalizedField = LocalizedField::new(
	"titleImageAltText",
	"titleImageAltTextEn",
	"titleImageAltTextRo",
	"titleImageAltTextRu",
);

/// Today's date in the long form the public site renders, with a two-digit
/// day (`August 07, 2026`).
pub fn default_publishing_date() -> String {
	chrono::Local::now().format("%B %d, %Y").to_string()
}

pub fn schema() -> EntitySchema {
	let mut text = Vec::new();
	text.extend(localized_with(&BLOG_TITLE, |f| f.required()));
	text.extend(localized_text(&BLOG_INTRO));
	text.extend(localized_text(&FIRST_SUBHEADING_TITLE));
	text.extend(localized_text(&FIRST_SUBHEADING_TEXT));
	text.extend(localized_text(&SECOND_SUBHEADING_TITLE));
	text.extend(localized_text(&SECOND_SUBHEADING_TEXT));
	text.extend(localized_text(&THIRD_SUBHEADING_TITLE));
	text.extend(localized_text(&THIRD_SUBHEADING_TEXT));
	text.extend(localized_text(&CONCLUSION));
	text.extend(localized_with(&META_DESCRIPTION, |f| f.with_max_length(160)));
	text.extend(localized_text(&META_KEYWORDS));
	text.extend([
		FieldDef::text("label"),
		FieldDef::text("publishingDate").with_default(json!(default_publishing_date())),
	]);

	let mut images = vec![FieldDef::file("titleImagePath")];
	images.extend(localized_text(&TITLE_IMAGE_ALT));

	EntitySchema::new(
		EntityKind::BlogPost,
		vec![
			StepDef::new("text", text),
			StepDef::new("images", images),
			StepDef::new("review", vec![]),
		],
		vec![
			BLOG_TITLE,
			BLOG_INTRO,
			FIRST_SUBHEADING_TITLE,
			FIRST_SUBHEADING_TEXT,
			SECOND_SUBHEADING_TITLE,
			SECOND_SUBHEADING_TEXT,
			THIRD_SUBHEADING_TITLE,
			THIRD_SUBHEADING_TEXT,
			CONCLUSION,
			META_DESCRIPTION,
			META_KEYWORDS,
			TITLE_IMAGE_ALT,
		],
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_publishing_date_defaults_to_long_form_today() {
		let draft = schema().default_draft();
		let date = draft
			.get("publishingDate")
			.and_then(|v| v.as_str())
			.unwrap();

		// "August 07, 2026": month name, two-digit day, comma, year.
		assert_eq!(date, default_publishing_date());
		let day = date
			.split_whitespace()
			.nth(1)
			.map(|d| d.trim_end_matches(','))
			.unwrap();
		assert_eq!(day.len(), 2);
		assert!(day.chars().all(|c| c.is_ascii_digit()));
	}

	#[test]
	fn test_only_blog_titles_are_required() {
		let schema = schema();
		let required: Vec<&str> = schema
			.fields()
			.filter(|f| f.required)
			.map(|f| f.name.as_str())
			.collect();
		assert_eq!(required, vec!["blogTitleEn", "blogTitleRo", "blogTitleRu"]);
	}
}
