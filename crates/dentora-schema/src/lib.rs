//! Entity schemas for the Dentora admin
//!
//! This crate is the single source of truth for what the admin can author:
//! - The three content languages and the flat `<field><Lang>` key convention
//! - The per-language field resolver
//! - One schema per entity kind: fields, wizard steps, localized tables
//!
//! Everything else (the wizard engine, the interchange codecs, the REST
//! client) derives its field knowledge from here.

pub mod entities;
pub mod entity;
pub mod language;
pub mod localized;

pub use entity::{EntityKind, EntitySchema, SchemaError};
pub use language::{Language, UnsupportedLanguage};
pub use localized::LocalizedField;
