//! Multi-step authoring wizard
//!
//! The sequencer walks a fixed list of steps over a [`Draft`]. Conditional
//! steps are resolved once when the session begins, against the seeded draft:
//! the filtered list is traversed linearly and never re-filtered mid-session,
//! so changing a discriminant on an earlier step cannot silently reorder the
//! steps that follow. Re-evaluating conditions requires a deliberate
//! [`Wizard::reset`].
//!
//! Submission is single-shot: while a submit is in flight the wizard refuses
//! to navigate, and a failed submit leaves the draft untouched so the user can
//! retry without re-entering anything.

use crate::draft::{Draft, DraftError};
use crate::field::FieldDef;
use crate::validator::{Violation, validate_step};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
	#[error("draft store has not been initialized")]
	NotInitialized,
	#[error("no steps apply to the seeded draft")]
	NoSteps,
	#[error("validation failed for {} field(s)", .0.len())]
	Validation(Vec<Violation>),
	#[error("a submission is in flight")]
	SubmissionInFlight,
	#[error("wizard session is already complete")]
	AlreadyComplete,
	#[error("submission is only possible from the final step")]
	NotOnFinalStep,
}

impl From<DraftError> for WizardError {
	fn from(_: DraftError) -> Self {
		WizardError::NotInitialized
	}
}

pub type WizardResult<T> = Result<T, WizardError>;

/// Conditional-inclusion predicate for a step: the step is part of the
/// session only when the discriminant field holds one of the listed values.
///
/// # Examples
///
/// ```
/// use dentora_forms::StepCondition;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let condition = StepCondition::new("sectionType", ["values", "expertise"]);
///
/// let mut values = HashMap::new();
/// values.insert("sectionType".to_string(), json!("values"));
/// assert!(condition.is_met(&values));
///
/// values.insert("sectionType".to_string(), json!("hero"));
/// assert!(!condition.is_met(&values));
/// ```
#[derive(Debug, Clone)]
pub struct StepCondition {
	pub field: String,
	pub one_of: Vec<String>,
}

impl StepCondition {
	pub fn new<I, S>(field: impl Into<String>, one_of: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			field: field.into(),
			one_of: one_of.into_iter().map(Into::into).collect(),
		}
	}

	pub fn is_met(&self, values: &HashMap<String, Value>) -> bool {
		values
			.get(&self.field)
			.and_then(|v| v.as_str())
			.is_some_and(|v| self.one_of.iter().any(|allowed| allowed == v))
	}
}

/// A single authoring step: a name, the fields it edits, and an optional
/// inclusion condition.
#[derive(Debug, Clone)]
pub struct StepDef {
	pub name: String,
	pub fields: Vec<FieldDef>,
	pub condition: Option<StepCondition>,
}

impl StepDef {
	pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
		Self {
			name: name.into(),
			fields,
			condition: None,
		}
	}

	/// Include this step only when the condition holds at session start
	pub fn with_condition(mut self, condition: StepCondition) -> Self {
		self.condition = Some(condition);
		self
	}
}

/// Sequencer state: a step index or the terminal state after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
	Step(usize),
	Complete,
}

/// One wizard session over one draft.
///
/// # Examples
///
/// ```
/// use dentora_forms::{Draft, FieldDef, StepDef, Wizard, WizardState};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let steps = vec![
///     StepDef::new("info", vec![FieldDef::text("name").required()]),
///     StepDef::new("review", vec![]),
/// ];
///
/// let mut draft = Draft::new();
/// draft.initialize(HashMap::new());
/// let mut wizard = Wizard::begin(steps, draft).unwrap();
///
/// let mut input = HashMap::new();
/// input.insert("name".to_string(), json!("Ana"));
/// assert_eq!(wizard.advance(input).unwrap(), WizardState::Step(1));
/// ```
pub struct Wizard {
	steps: Vec<StepDef>,
	state: WizardState,
	draft: Draft,
	in_flight: bool,
}

impl Wizard {
	/// Start a session over an initialized draft.
	///
	/// Conditional steps are filtered here, once, against the seeded draft
	/// values; the resulting step list is stable for the whole session. A
	/// session must have at least one applicable step.
	pub fn begin(steps: Vec<StepDef>, draft: Draft) -> WizardResult<Self> {
		let values = draft.values().ok_or(WizardError::NotInitialized)?;
		let steps: Vec<StepDef> = steps
			.into_iter()
			.filter(|step| {
				step.condition
					.as_ref()
					.is_none_or(|condition| condition.is_met(values))
			})
			.collect();
		if steps.is_empty() {
			return Err(WizardError::NoSteps);
		}
		tracing::debug!(steps = steps.len(), "wizard session started");
		Ok(Self {
			steps,
			state: WizardState::Step(0),
			draft,
			in_flight: false,
		})
	}

	pub fn state(&self) -> WizardState {
		self.state
	}

	pub fn steps(&self) -> &[StepDef] {
		&self.steps
	}

	pub fn total_steps(&self) -> usize {
		self.steps.len()
	}

	pub fn current_step(&self) -> Option<&StepDef> {
		match self.state {
			WizardState::Step(i) => self.steps.get(i),
			WizardState::Complete => None,
		}
	}

	pub fn current_step_name(&self) -> Option<&str> {
		self.current_step().map(|s| s.name.as_str())
	}

	pub fn is_first_step(&self) -> bool {
		self.state == WizardState::Step(0)
	}

	pub fn is_last_step(&self) -> bool {
		matches!(self.state, WizardState::Step(i) if i + 1 == self.steps.len())
	}

	pub fn is_complete(&self) -> bool {
		self.state == WizardState::Complete
	}

	pub fn draft(&self) -> &Draft {
		&self.draft
	}

	/// Validate the current step and, on success, merge the input into the
	/// draft and move forward (to the next step, or to `Complete` from the
	/// last step).
	///
	/// The step's fields are validated against the input overlaid on the
	/// current draft, so a field already satisfied by the seed is not
	/// demanded again. On failure the complete violation set comes back and
	/// neither the state nor the draft changes.
	pub fn advance(&mut self, input: HashMap<String, Value>) -> WizardResult<WizardState> {
		if self.in_flight {
			return Err(WizardError::SubmissionInFlight);
		}
		let index = match self.state {
			WizardState::Step(i) => i,
			WizardState::Complete => return Err(WizardError::AlreadyComplete),
		};
		let step = &self.steps[index];

		let mut effective = self.draft.snapshot()?;
		effective.extend(input.clone());
		let violations = validate_step(&step.fields, &effective);
		if !violations.is_empty() {
			tracing::debug!(
				step = %step.name,
				violations = violations.len(),
				"advance blocked by validation"
			);
			return Err(WizardError::Validation(violations));
		}

		self.draft.merge(input)?;
		self.state = if index + 1 == self.steps.len() {
			WizardState::Complete
		} else {
			WizardState::Step(index + 1)
		};
		tracing::debug!(step = %step.name, state = ?self.state, "advanced");
		Ok(self.state)
	}

	/// Move back one step, unconditionally: the step being left is not
	/// re-validated and nothing already merged is cleared. A no-op on the
	/// first step and in the terminal state.
	pub fn retreat(&mut self) -> WizardResult<WizardState> {
		if self.in_flight {
			return Err(WizardError::SubmissionInFlight);
		}
		if let WizardState::Step(i) = self.state
			&& i > 0
		{
			self.state = WizardState::Step(i - 1);
		}
		Ok(self.state)
	}

	/// Mark a submission as started and hand out the draft snapshot to send.
	///
	/// Only allowed on the final step. Until [`Wizard::finish_submission`] is
	/// called, every navigation attempt fails with `SubmissionInFlight` --
	/// there is never more than one outstanding submit per session.
	pub fn begin_submission(&mut self) -> WizardResult<HashMap<String, Value>> {
		if self.in_flight {
			return Err(WizardError::SubmissionInFlight);
		}
		if !self.is_last_step() {
			return Err(WizardError::NotOnFinalStep);
		}
		let snapshot = self.draft.snapshot()?;
		self.in_flight = true;
		tracing::debug!("submission started");
		Ok(snapshot)
	}

	/// Resolve the outstanding submission.
	///
	/// On success the session moves to `Complete`; on failure it stays on the
	/// final step with the draft intact, so the submit can be retried without
	/// re-entering data.
	pub fn finish_submission(&mut self, success: bool) {
		self.in_flight = false;
		if success {
			self.state = WizardState::Complete;
		}
		tracing::debug!(success, "submission resolved");
	}

	pub fn submission_in_flight(&self) -> bool {
		self.in_flight
	}

	/// Return to step 0 with a fresh initialized draft.
	///
	/// This is the deliberate re-entry point: step conditions are evaluated
	/// again, against the new draft.
	pub fn reset(&mut self, steps: Vec<StepDef>, draft: Draft) -> WizardResult<()> {
		if self.in_flight {
			return Err(WizardError::SubmissionInFlight);
		}
		*self = Wizard::begin(steps, draft)?;
		Ok(())
	}

	/// Immutable copy of the draft for review screens.
	pub fn snapshot(&self) -> WizardResult<HashMap<String, Value>> {
		Ok(self.draft.snapshot()?)
	}
}
