use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use serde::Deserialize;

/// Pattern a contact email must match: `local@domain.tld` where the local part
/// allows letters, digits and `_.%+-`, the domain allows letters, digits and
/// `_.-` and the top level domain consists of at least two letters.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.%+-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// A single contact request, built from the form fields at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub phone: Option<ContactPhone>,
    pub message: Option<ContactMessage>,
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Display)
)]
pub struct ContactName(String);

#[nutype(
    sanitize(trim),
    validate(regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Display)
)]
pub struct ContactEmail(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Display)
)]
pub struct ContactPhone(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Display)
)]
pub struct ContactMessage(String);

impl ContactMessage {
    /// Length of the message in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.chars().count()
    }
}

/// What the user gets to see after a submission has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }
}

/// Shape of the responses sent by the contact endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseContract {
    /// `{"success": true, "message": "..."}` on success, failures may carry
    /// `detail` and/or `message`.
    #[default]
    SuccessFlag,
    /// `{"status": "ok"}` with HTTP 200 on success, failures may carry
    /// `message`.
    Status,
}
