//! Multi-step content authoring for Dentora
//!
//! This crate provides the form engine behind the admin wizards:
//! - Declarative field definitions with per-kind validation rules
//! - Whole-step validation returning the complete violation set
//! - An in-memory draft store that accumulates values across steps
//! - A step sequencer with conditional steps and a single-shot
//!   submission interlock

pub mod draft;
pub mod field;
pub mod validator;
pub mod wizard;

pub use draft::{Draft, DraftError, DraftResult};
pub use field::{FieldDef, FieldKind};
pub use validator::{Violation, validate_step};
pub use wizard::{StepCondition, StepDef, Wizard, WizardError, WizardResult, WizardState};
