//! Entity kinds and schemas
//!
//! Each content entity the admin edits is described by exactly one
//! [`EntitySchema`]: its wizard steps, its field definitions and its
//! localized-field table. The schema is the single source of truth -- the
//! wizard, the interchange codecs and the REST client all derive their field
//! lists from it instead of carrying their own copies.

use crate::entities;
use crate::language::Language;
use crate::localized::LocalizedField;
use dentora_forms::{Draft, FieldDef, FieldKind, StepDef, Wizard, WizardError};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
	#[error("entity {entity} has no localized field named {logical:?}")]
	UnknownLogicalField { entity: &'static str, logical: String },
}

/// Every entity kind the admin manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
	Service,
	TeamMember,
	Testimonial,
	BlogPost,
	BeforeAfter,
	SocialMedia,
	SessionType,
	Contact,
	AboutSection,
}

impl EntityKind {
	pub const ALL: [EntityKind; 9] = [
		EntityKind::Service,
		EntityKind::TeamMember,
		EntityKind::Testimonial,
		EntityKind::BlogPost,
		EntityKind::BeforeAfter,
		EntityKind::SocialMedia,
		EntityKind::SessionType,
		EntityKind::Contact,
		EntityKind::AboutSection,
	];

	/// The REST collection path for this kind, relative to the API base URL.
	pub fn collection_path(&self) -> &'static str {
		match self {
			EntityKind::Service => "/api/services",
			EntityKind::TeamMember => "/api/team-members",
			EntityKind::Testimonial => "/api/testimonials",
			EntityKind::BlogPost => "/api/blog-posts",
			EntityKind::BeforeAfter => "/api/before-after",
			EntityKind::SocialMedia => "/api/social-media",
			EntityKind::SessionType => "/api/session-types",
			EntityKind::Contact => "/api/contacts",
			EntityKind::AboutSection => "/api/about-sections",
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			EntityKind::Service => "service",
			EntityKind::TeamMember => "team_member",
			EntityKind::Testimonial => "testimonial",
			EntityKind::BlogPost => "blog_post",
			EntityKind::BeforeAfter => "before_after",
			EntityKind::SocialMedia => "social_media",
			EntityKind::SessionType => "session_type",
			EntityKind::Contact => "contact",
			EntityKind::AboutSection => "about_section",
		}
	}

	/// Build the schema for this kind.
	pub fn schema(&self) -> EntitySchema {
		match self {
			EntityKind::Service => entities::service::schema(),
			EntityKind::TeamMember => entities::team_member::schema(),
			EntityKind::Testimonial => entities::testimonial::schema(),
			EntityKind::BlogPost => entities::blog_post::schema(),
			EntityKind::BeforeAfter => entities::before_after::schema(),
			EntityKind::SocialMedia => entities::social_media::schema(),
			EntityKind::SessionType => entities::session_type::schema(),
			EntityKind::Contact => entities::contact::schema(),
			EntityKind::AboutSection => entities::about_section::schema(),
		}
	}
}

/// The complete authoring schema of one entity kind.
///
/// # Examples
///
/// ```
/// use dentora_schema::{EntityKind, Language};
///
/// let schema = EntityKind::Service.schema();
///
/// assert_eq!(schema.resolve("title", Language::Ru).unwrap(), "titleRu");
/// assert!(schema.default_draft().contains_key("titleKey"));
/// ```
pub struct EntitySchema {
	kind: EntityKind,
	steps: Vec<StepDef>,
	localized: Vec<LocalizedField>,
}

impl EntitySchema {
	pub fn new(kind: EntityKind, steps: Vec<StepDef>, localized: Vec<LocalizedField>) -> Self {
		Self { kind, steps, localized }
	}

	pub fn kind(&self) -> EntityKind {
		self.kind
	}

	pub fn steps(&self) -> &[StepDef] {
		&self.steps
	}

	pub fn localized(&self) -> &[LocalizedField] {
		&self.localized
	}

	/// Every field declared by any step, in step order. Conditional steps
	/// contribute their fields too: a draft always carries the full shape
	/// regardless of which steps end up in a given session.
	pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
		self.steps.iter().flat_map(|step| step.fields.iter())
	}

	/// Resolve a logical localized field to its concrete key.
	pub fn resolve(&self, logical: &str, language: Language) -> Result<&'static str, SchemaError> {
		self.localized
			.iter()
			.find(|lf| lf.logical == logical)
			.map(|lf| lf.resolve(language))
			.ok_or_else(|| SchemaError::UnknownLogicalField {
				entity: self.kind.name(),
				logical: logical.to_string(),
			})
	}

	/// A fresh draft value map: every declared field present with its
	/// documented default.
	pub fn default_draft(&self) -> HashMap<String, Value> {
		self.fields()
			.map(|f| (f.name.clone(), f.default_value()))
			.collect()
	}

	/// The field names the interchange codecs treat as expected, in step
	/// order.
	pub fn expected_fields(&self) -> Vec<String> {
		self.fields().map(|f| f.name.clone()).collect()
	}

	/// Convert flat imported text values into typed draft values.
	///
	/// Import codecs produce plain text per field; this is where the schema's
	/// kinds are applied: list fields split on newlines, integers and booleans
	/// are parsed, everything else stays text. Keys outside the schema are
	/// kept as strings.
	pub fn draft_from_flat(&self, flat: HashMap<String, String>) -> HashMap<String, Value> {
		let kinds: HashMap<&str, &FieldKind> = self
			.fields()
			.map(|f| (f.name.as_str(), &f.kind))
			.collect();
		flat.into_iter()
			.map(|(key, text)| {
				let value = match kinds.get(key.as_str()) {
					Some(FieldKind::List) => Value::Array(
						text.lines()
							.map(str::trim)
							.filter(|line| !line.is_empty())
							.map(|line| Value::String(line.to_string()))
							.collect(),
					),
					Some(FieldKind::Integer) => {
						text.trim().parse::<i64>().map(Value::from).unwrap_or(Value::from(0))
					}
					Some(FieldKind::Boolean) => Value::Bool(text.trim().eq_ignore_ascii_case("true")),
					_ => Value::String(text),
				};
				(key, value)
			})
			.collect()
	}

	/// Start a wizard session for this entity.
	///
	/// The draft is initialized with every field's default, overlaid by the
	/// seed when editing an existing record; conditional steps are resolved
	/// against that seeded draft.
	pub fn wizard(&self, seed: Option<HashMap<String, Value>>) -> Result<Wizard, WizardError> {
		let fields: Vec<FieldDef> = self.fields().cloned().collect();
		let mut draft = Draft::new();
		draft.initialize_with_defaults(&fields, seed);
		Wizard::begin(self.steps.clone(), draft)
	}
}
