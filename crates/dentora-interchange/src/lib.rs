//! Import/export for offline content authoring
//!
//! Authors can download a field template, fill it in locally and import it
//! back. Two formats are supported: structured JSON and heading-delimited
//! markdown. Both decoders normalize to flat `field -> text` maps with every
//! expected field present; both encoders emit the fixed template, never a
//! live draft.

pub mod json;
pub mod markdown;
pub mod template;

pub use template::{Template, TemplateField, TemplateSection, service_template};

#[derive(Debug, thiserror::Error)]
pub enum InterchangeError {
	#[error("malformed import document: {0}")]
	Malformed(String),
}
