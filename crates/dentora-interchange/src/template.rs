//! Offline-authoring templates
//!
//! A template is the fixed, example-filled field set handed to content
//! authors who prefer to write copy in an editor and import it back. Encoding
//! always dumps the template, never a live draft; import is the only
//! direction that touches real data.

/// One template field: the wire name and the example value shown to authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateField {
	pub name: &'static str,
	pub example: &'static str,
}

impl TemplateField {
	pub const fn new(name: &'static str, example: &'static str) -> Self {
		Self { name, example }
	}
}

/// A labelled group of template fields, rendered as a comment block in the
/// markdown form.
#[derive(Debug, Clone)]
pub struct TemplateSection {
	pub label: &'static str,
	pub fields: &'static [TemplateField],
}

/// A complete authoring template for one entity kind.
#[derive(Debug, Clone)]
pub struct Template {
	pub title: &'static str,
	pub sections: Vec<TemplateSection>,
}

impl Template {
	/// All fields across sections, in document order.
	pub fn fields(&self) -> impl Iterator<Item = &TemplateField> {
		self.sections.iter().flat_map(|s| s.fields.iter())
	}

	pub fn field_names(&self) -> Vec<&'static str> {
		self.fields().map(|f| f.name).collect()
	}
}

/// The service-page authoring template.
pub fn service_template() -> Template {
	const BASIC: [TemplateField; 2] = [
		TemplateField::new("titleKey", "example-service-slug"),
		TemplateField::new("price", "500 MDL"),
	];
	const TITLE: [TemplateField; 3] = [
		TemplateField::new("titleEn", "Service Title in English"),
		TemplateField::new("titleRo", "Titlul Serviciului in Romana"),
		TemplateField::new("titleRu", "Название услуги на русском"),
	];
	const DESC: [TemplateField; 3] = [
		TemplateField::new(
			"descEn",
			"Full description of the service in English. Explain what the service includes, benefits, and any important details.",
		),
		TemplateField::new(
			"descRo",
			"Descrierea completa a serviciului in romana. Explicati ce include serviciul, beneficiile si orice detalii importante.",
		),
		TemplateField::new(
			"descRu",
			"Полное описание услуги на русском языке. Объясните, что включает услуга, преимущества и важные детали.",
		),
	];
	const FEATURES: [TemplateField; 3] = [
		TemplateField::new("featuresEn", "Feature 1\nFeature 2\nFeature 3"),
		TemplateField::new(
			"featuresRo",
			"Caracteristica 1\nCaracteristica 2\nCaracteristica 3",
		),
		TemplateField::new("featuresRu", "Особенность 1\nОсобенность 2\nОсобенность 3"),
	];
	const META_DESCRIPTION: [TemplateField; 3] = [
		TemplateField::new(
			"metaDescriptionEn",
			"Brief SEO description for search engines (max 160 characters)",
		),
		TemplateField::new(
			"metaDescriptionRo",
			"Scurta descriere SEO pentru motoarele de cautare (max 160 caractere)",
		),
		TemplateField::new(
			"metaDescriptionRu",
			"Краткое SEO описание для поисковых систем (макс 160 символов)",
		),
	];
	const META_KEYWORDS: [TemplateField; 3] = [
		TemplateField::new("metaKeywordsEn", "keyword1, keyword2, keyword3"),
		TemplateField::new("metaKeywordsRo", "cuvant1, cuvant2, cuvant3"),
		TemplateField::new("metaKeywordsRu", "ключ1, ключ2, ключ3"),
	];

	Template {
		title: "Service Template",
		sections: vec![
			TemplateSection { label: "BASIC INFO", fields: &BASIC },
			TemplateSection {
				label: "SERVICE TITLE (Multilingual)",
				fields: &TITLE,
			},
			TemplateSection {
				label: "SERVICE DESCRIPTION (Multilingual)",
				fields: &DESC,
			},
			TemplateSection {
				label: "FEATURES (Multilingual) - One per line",
				fields: &FEATURES,
			},
			TemplateSection {
				label: "SEO META DESCRIPTION (Multilingual) - Max 160 characters",
				fields: &META_DESCRIPTION,
			},
			TemplateSection {
				label: "SEO META KEYWORDS (Multilingual)",
				fields: &META_KEYWORDS,
			},
		],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_service_template_covers_the_import_field_set() {
		let names = service_template().field_names();
		assert_eq!(names.len(), 17);
		assert_eq!(names[0], "titleKey");
		assert!(names.contains(&"featuresRu"));
		assert!(names.contains(&"metaKeywordsRu"));
	}
}
