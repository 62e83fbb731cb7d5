use std::{sync::Arc, time::Duration};

use emcenter_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use emcenter_form_contracts::{
    ui::{FieldSource, SubmitControl, UiElement},
    FormMessages, FormService, FormState, SubmissionError,
};
use emcenter_models::contact::{ContactSubmission, SubmissionOutcome};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::machine::{FormEffect, FormEvent, FormSnapshot, FormStateMachine, Transition};

pub mod machine;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct FormConfig {
    pub messages: FormMessages,
    /// Upper bound for the message field in characters. `None` disables the
    /// check.
    pub max_message_length: Option<usize>,
    /// How long to wait for the contact endpoint before unlocking the form.
    pub timeout: Duration,
}

/// The page elements a form controller drives.
#[derive(Debug, Clone)]
pub struct FormUi<Fields, Element, Submit> {
    pub fields: Fields,
    pub form: Element,
    pub success: Element,
    pub error: Element,
    pub submit: Submit,
}

#[derive(Debug, Clone)]
pub struct FormSubmissionController<Fields, Element, Submit, ContactApi> {
    ui: FormUi<Fields, Element, Submit>,
    contact_api: ContactApi,
    machine: FormStateMachine,
    state: Arc<Mutex<FormState>>,
}

impl<Fields, Element, Submit, ContactApi>
    FormSubmissionController<Fields, Element, Submit, ContactApi>
where
    Fields: FieldSource,
    Element: UiElement,
    Submit: SubmitControl,
    ContactApi: ContactApiService,
{
    pub fn new(
        ui: FormUi<Fields, Element, Submit>,
        contact_api: ContactApi,
        config: FormConfig,
    ) -> Self {
        Self {
            ui,
            contact_api,
            machine: FormStateMachine::new(config),
            state: Default::default(),
        }
    }

    pub async fn state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    /// Feeds an event into the state machine, applies the resulting effects
    /// and returns the submission to dispatch, if any.
    async fn handle(&self, event: FormEvent) -> (FormState, Option<ContactSubmission>) {
        let mut state = self.state.lock().await;
        let submission = self.step(&mut state, event);
        (state.clone(), submission)
    }

    fn step(&self, state: &mut FormState, event: FormEvent) -> Option<ContactSubmission> {
        let Transition {
            state: next,
            effects,
        } = self.machine.transition(std::mem::take(state), event);
        *state = next;
        self.apply(effects)
    }

    fn apply(&self, effects: Vec<FormEffect>) -> Option<ContactSubmission> {
        let mut dispatch = None;
        for effect in effects {
            match effect {
                FormEffect::ResetMessages => {
                    for element in [&self.ui.success, &self.ui.error] {
                        element.set_visible(false);
                        element.set_text("");
                    }
                }
                FormEffect::HideForm => self.ui.form.set_visible(false),
                FormEffect::ShowSuccess(text) => {
                    self.ui.success.set_text(&text);
                    self.ui.success.set_visible(true);
                }
                FormEffect::ShowError(text) => {
                    self.ui.error.set_text(&text);
                    self.ui.error.set_visible(true);
                }
                FormEffect::LockSubmit { label } => {
                    self.ui.submit.set_enabled(false);
                    self.ui.submit.set_label(&label);
                }
                FormEffect::UnlockSubmit { label } => {
                    self.ui.submit.set_enabled(true);
                    self.ui.submit.set_label(&label);
                }
                FormEffect::Dispatch(submission) => dispatch = Some(submission),
            }
        }
        dispatch
    }

    async fn dispatch(
        &self,
        submission: &ContactSubmission,
    ) -> Result<Option<String>, SubmissionError> {
        let timeout = self.machine.config().timeout;
        match tokio::time::timeout(timeout, self.contact_api.submit(submission)).await {
            Ok(Ok(ContactApiResponse::Accepted { message })) => Ok(message),
            Ok(Ok(ContactApiResponse::Rejected {
                status,
                detail,
                message,
            })) => Err(SubmissionError::Application {
                status,
                detail,
                message,
            }),
            Ok(Err(err)) => Err(SubmissionError::Transport(err)),
            Err(_) => Err(SubmissionError::Timeout(timeout)),
        }
    }
}

impl<Fields, Element, Submit, ContactApi> FormService
    for FormSubmissionController<Fields, Element, Submit, ContactApi>
where
    Fields: FieldSource,
    Element: UiElement,
    Submit: SubmitControl,
    ContactApi: ContactApiService,
{
    async fn on_submit(&self) -> FormState {
        let snapshot = FormSnapshot {
            fields: self.ui.fields.read(),
            submit_label: self.ui.submit.label(),
        };

        let (state, submission) = self.handle(FormEvent::Submit(snapshot)).await;
        let Some(submission) = submission else {
            return state;
        };

        let in_flight = InFlight {
            controller: self,
            armed: true,
        };
        let result = self
            .dispatch(&submission)
            .await
            .inspect(|_| {
                info!(email = %submission.email, "Contact submission accepted");
            })
            .inspect_err(|err| match err {
                SubmissionError::Application { .. } => {
                    warn!("Contact submission failed: {err}");
                }
                err => error!("Contact submission failed: {err}"),
            });

        let outcome = self.machine.outcome(result);
        let (state, _) = self.handle(FormEvent::Resolved(outcome)).await;
        in_flight.disarm();
        state
    }
}

/// Fails the in-flight submission if `on_submit` is dropped before the
/// response has been handled, so the form never stays locked.
struct InFlight<'a, Fields, Element, Submit, ContactApi>
where
    Fields: FieldSource,
    Element: UiElement,
    Submit: SubmitControl,
    ContactApi: ContactApiService,
{
    controller: &'a FormSubmissionController<Fields, Element, Submit, ContactApi>,
    armed: bool,
}

impl<Fields, Element, Submit, ContactApi> InFlight<'_, Fields, Element, Submit, ContactApi>
where
    Fields: FieldSource,
    Element: UiElement,
    Submit: SubmitControl,
    ContactApi: ContactApiService,
{
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<Fields, Element, Submit, ContactApi> Drop
    for InFlight<'_, Fields, Element, Submit, ContactApi>
where
    Fields: FieldSource,
    Element: UiElement,
    Submit: SubmitControl,
    ContactApi: ContactApiService,
{
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("Contact submission was cancelled before a response arrived");

        let controller = self.controller;
        let Ok(mut state) = controller.state.try_lock() else {
            error!("Failed to unlock the form after a cancelled submission");
            return;
        };
        let outcome =
            SubmissionOutcome::Failure(controller.machine.config().messages.error.clone());
        controller.step(&mut state, FormEvent::Resolved(outcome));
    }
}
