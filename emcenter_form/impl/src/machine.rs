use emcenter_form_contracts::{FormMessages, FormState, SubmissionError, ValidationError};
use emcenter_models::{
    contact::{
        ContactEmail, ContactMessage, ContactName, ContactPhone, ContactSubmission,
        SubmissionOutcome,
    },
    form::FormFields,
};
use tracing::{debug, info};

use crate::FormConfig;

/// What the form looked like when the user hit submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit(FormSnapshot),
    Resolved(SubmissionOutcome),
}

/// Changes to the page (and the one request) a transition asks for. They are
/// meant to be applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Hide and clear both message regions.
    ResetMessages,
    HideForm,
    ShowSuccess(String),
    ShowError(String),
    LockSubmit { label: String },
    UnlockSubmit { label: String },
    Dispatch(ContactSubmission),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub effects: Vec<FormEffect>,
}

impl Transition {
    fn stay(state: FormState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// The submission cycle as a pure function of state and event.
#[derive(Debug, Clone)]
pub struct FormStateMachine {
    config: FormConfig,
}

impl FormStateMachine {
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    fn messages(&self) -> &FormMessages {
        &self.config.messages
    }

    pub fn transition(&self, state: FormState, event: FormEvent) -> Transition {
        match (state, event) {
            (FormState::Idle, FormEvent::Submit(snapshot)) => self.submit(snapshot),
            (
                FormState::Submitting { .. },
                FormEvent::Resolved(SubmissionOutcome::Success(message)),
            ) => Transition {
                state: FormState::Succeeded,
                effects: vec![FormEffect::HideForm, FormEffect::ShowSuccess(message)],
            },
            (
                FormState::Submitting { original_label },
                FormEvent::Resolved(SubmissionOutcome::Failure(message)),
            ) => Transition {
                state: FormState::Idle,
                effects: vec![
                    FormEffect::ShowError(message),
                    FormEffect::UnlockSubmit {
                        label: original_label,
                    },
                ],
            },
            (state, event) => {
                debug!(?state, ?event, "Ignoring form event");
                Transition::stay(state)
            }
        }
    }

    fn submit(&self, snapshot: FormSnapshot) -> Transition {
        let mut effects = vec![FormEffect::ResetMessages];

        if snapshot.fields.is_honeypot_filled() {
            info!("Honeypot field is filled, pretending the submission succeeded");
            effects.extend([
                FormEffect::HideForm,
                FormEffect::ShowSuccess(self.messages().success.clone()),
            ]);
            return Transition {
                state: FormState::Succeeded,
                effects,
            };
        }

        match self.validate(&snapshot.fields) {
            Ok(submission) => {
                effects.extend([
                    FormEffect::LockSubmit {
                        label: self.messages().sending.clone(),
                    },
                    FormEffect::Dispatch(submission),
                ]);
                Transition {
                    state: FormState::Submitting {
                        original_label: snapshot.submit_label,
                    },
                    effects,
                }
            }
            Err(err) => {
                debug!("Rejecting submission: {err}");
                effects.push(FormEffect::ShowError(err.user_message(self.messages())));
                Transition {
                    state: FormState::Idle,
                    effects,
                }
            }
        }
    }

    /// Trims the fields and checks them in order, stopping at the first
    /// defect. Empty optional fields become `None`.
    pub fn validate(&self, fields: &FormFields) -> Result<ContactSubmission, ValidationError> {
        let name = ContactName::try_new(fields.name.as_str())
            .map_err(|_| ValidationError::NameRequired)?;
        let email = ContactEmail::try_new(fields.email.as_str())
            .map_err(|_| ValidationError::EmailInvalid)?;
        let phone = ContactPhone::try_new(fields.phone.as_str()).ok();
        let message = ContactMessage::try_new(fields.message.as_str()).ok();

        if let Some(max) = self.config.max_message_length {
            if message.as_ref().is_some_and(|m| m.char_count() > max) {
                return Err(ValidationError::MessageTooLong { max });
            }
        }

        Ok(ContactSubmission {
            name,
            email,
            phone,
            message,
        })
    }

    /// Turns the result of a dispatched request into what the user gets to see.
    pub fn outcome(&self, result: Result<Option<String>, SubmissionError>) -> SubmissionOutcome {
        match result {
            Ok(message) => SubmissionOutcome::Success(
                message.unwrap_or_else(|| self.messages().success.clone()),
            ),
            Err(err) => SubmissionOutcome::Failure(err.user_message(self.messages())),
        }
    }
}
