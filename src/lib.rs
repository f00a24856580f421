//! # Dentora
//!
//! Multilingual content-authoring engine for a dental-clinic CMS admin panel.
//!
//! The clinic's public site is driven by a REST backend; this workspace is the
//! engine behind the admin screens that author its content (services, team
//! members, testimonials, blog posts, before/after galleries, social-media
//! embeds, contact info, about-page sections). Every entity is edited through
//! the same multi-step wizard: a schema describes the fields, the sequencer
//! walks the steps, the validator gates each advance, and the draft store
//! accumulates the entity until it is submitted.
//!
//! ## Crates
//!
//! - [`forms`] — the generic wizard engine: field definitions, per-step
//!   validation, the draft store, and the step sequencer.
//! - [`schema`] — the three supported languages, the per-language field map,
//!   and the per-entity schemas (field sets, steps, REST collection paths).
//! - [`interchange`] — plain-text import/export for offline authoring
//!   (structured JSON and heading-delimited Markdown).
//! - [`client`] — runtime configuration and the async REST client.
//!
//! ## Example
//!
//! ```
//! use dentora::schema::entities::testimonial;
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let schema = testimonial::schema();
//! let mut wizard = schema.wizard(None).unwrap();
//!
//! let mut input = HashMap::new();
//! input.insert("name".to_string(), json!("Ana Popescu"));
//! input.insert("role".to_string(), json!("Entrepreneur"));
//! input.insert("text".to_string(), json!("Painless and professional."));
//! input.insert("rating".to_string(), json!(5));
//!
//! wizard.advance(input).unwrap();
//! ```

pub use dentora_client as client;
pub use dentora_forms as forms;
pub use dentora_interchange as interchange;
pub use dentora_schema as schema;

pub use dentora_client::{ApiClient, Attachment, ClientError, RuntimeConfig};
pub use dentora_forms::{
	Draft, DraftError, FieldDef, FieldKind, StepCondition, StepDef, Violation, Wizard,
	WizardError, WizardState, validate_step,
};
pub use dentora_interchange::{InterchangeError, Template, TemplateField, TemplateSection};
pub use dentora_schema::{EntityKind, EntitySchema, Language, LocalizedField, SchemaError};
