//! Contact form state machine.
//!
//! Three observable phases: Editing, Submitting, Submitted. Field values are
//! cleared only on confirmed delivery success; a failed delivery returns to
//! Editing with the entered values intact so the user can retry.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Presence-only validation. No format checks (not even email shape).
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields present; delivery should start with this payload.
    Started(Submission),
    /// One or more fields empty; no delivery, phase unchanged.
    MissingFields,
    /// A delivery is already in flight.
    InFlight,
}

pub struct ContactForm {
    pub phase: FormPhase,
    pub fields: Submission,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Editing,
            fields: Submission::default(),
        }
    }

    /// Attempt a submit with the current field values. Transitions to
    /// Submitting only when every field is non-empty.
    pub fn submit(&mut self, fields: Submission) -> SubmitOutcome {
        if self.phase == FormPhase::Submitting {
            return SubmitOutcome::InFlight;
        }
        self.fields = fields;
        if !self.fields.is_complete() {
            return SubmitOutcome::MissingFields;
        }
        self.phase = FormPhase::Submitting;
        SubmitOutcome::Started(self.fields.clone())
    }

    /// The relay accepted the message: clear fields, show confirmation.
    pub fn delivery_succeeded(&mut self) {
        self.fields = Submission::default();
        self.phase = FormPhase::Submitted;
    }

    /// The relay rejected the message: keep fields so the user can retry.
    pub fn delivery_failed(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// "Send Another Message": back to an empty Editing form.
    pub fn compose_another(&mut self) {
        self.fields = Submission::default();
        self.phase = FormPhase::Editing;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Submission {
        Submission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_initial_phase_is_editing() {
        let form = ContactForm::new();
        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(form.fields, Submission::default());
    }

    #[test]
    fn test_submit_with_empty_field_stays_editing() {
        let mut form = ContactForm::new();
        let mut fields = filled();
        fields.name.clear();

        let outcome = form.submit(fields.clone());

        assert_eq!(outcome, SubmitOutcome::MissingFields);
        assert_eq!(form.phase, FormPhase::Editing);
        // Entered values are kept for the retry
        assert_eq!(form.fields, fields);
    }

    #[test]
    fn test_submit_with_all_empty_fields() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(Submission::default()), SubmitOutcome::MissingFields);
        assert_eq!(form.phase, FormPhase::Editing);
    }

    #[test]
    fn test_submit_complete_enters_submitting() {
        let mut form = ContactForm::new();
        let outcome = form.submit(filled());

        assert_eq!(outcome, SubmitOutcome::Started(filled()));
        assert_eq!(form.phase, FormPhase::Submitting);
    }

    #[test]
    fn test_delivery_success_clears_fields() {
        let mut form = ContactForm::new();
        form.submit(filled());
        form.delivery_succeeded();

        assert_eq!(form.phase, FormPhase::Submitted);
        assert_eq!(form.fields.name, "");
        assert_eq!(form.fields.email, "");
        assert_eq!(form.fields.message, "");
    }

    #[test]
    fn test_delivery_failure_keeps_fields() {
        let mut form = ContactForm::new();
        form.submit(filled());
        form.delivery_failed();

        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(form.fields, filled());
    }

    #[test]
    fn test_double_submit_while_in_flight() {
        let mut form = ContactForm::new();
        form.submit(filled());

        let outcome = form.submit(filled());
        assert_eq!(outcome, SubmitOutcome::InFlight);
        assert_eq!(form.phase, FormPhase::Submitting);
    }

    #[test]
    fn test_compose_another_resets_form() {
        let mut form = ContactForm::new();
        form.submit(filled());
        form.delivery_succeeded();
        form.compose_another();

        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(form.fields, Submission::default());
    }
}
