use std::future::Future;

pub use error::{SubmissionError, ValidationError};

pub mod error;
pub mod ui;

/// Handles the submit events of a single contact form.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormService: Send + Sync + 'static {
    /// Runs one submission cycle and returns the state the form ends up in.
    ///
    /// Submits arriving while a previous submission is still in flight, or
    /// after the form has been submitted successfully, are ignored.
    fn on_submit(&self) -> impl Future<Output = FormState> + Send;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    /// Ready to accept a submission.
    #[default]
    Idle,
    /// A request is in flight and the submit control is locked.
    Submitting {
        /// Label of the submit control before it was locked.
        original_label: String,
    },
    /// The form has been hidden after a successful submission.
    Succeeded,
}

/// Fixed strings shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessages {
    pub success: String,
    pub error: String,
    pub name_required: String,
    pub email_invalid: String,
    pub message_too_long: String,
    pub sending: String,
}

#[cfg(feature = "mock")]
impl MockFormService {
    pub fn with_on_submit(mut self, state: FormState) -> Self {
        self.expect_on_submit()
            .once()
            .return_once(move || Box::pin(std::future::ready(state)));
        self
    }
}
