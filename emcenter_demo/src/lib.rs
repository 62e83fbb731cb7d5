use std::sync::LazyLock;

use emcenter_models::{
    contact::{ContactEmail, ContactMessage, ContactName, ContactPhone, ContactSubmission},
    form::FormFields,
};

pub const SUBMIT_LABEL: &str = "Odoslať";

/// A complete submission with all optional fields set.
pub static JANA: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: ContactName::try_new("Jana Nováková").unwrap(),
    email: ContactEmail::try_new("jana.novakova@example.sk").unwrap(),
    phone: Some(ContactPhone::try_new("+421 900 123 456").unwrap()),
    message: Some(ContactMessage::try_new("Mám záujem o vaše služby.").unwrap()),
});

/// The form fields `JANA` was built from, with stray whitespace around them.
pub static JANA_FIELDS: LazyLock<FormFields> = LazyLock::new(|| FormFields {
    name: "  Jana Nováková ".into(),
    email: " jana.novakova@example.sk\t".into(),
    phone: "+421 900 123 456 ".into(),
    message: "\nMám záujem o vaše služby.\n".into(),
    website: String::new(),
});

/// A submission that only carries the required fields.
pub static PETER: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: ContactName::try_new("Peter Horváth").unwrap(),
    email: ContactEmail::try_new("peter@horvath.eu").unwrap(),
    phone: None,
    message: None,
});

pub static PETER_FIELDS: LazyLock<FormFields> = LazyLock::new(|| FormFields {
    name: "Peter Horváth".into(),
    email: "peter@horvath.eu".into(),
    phone: "   ".into(),
    message: String::new(),
    website: String::new(),
});

/// Fields as a bot would fill them: everything, including the honeypot.
pub static BOT_FIELDS: LazyLock<FormFields> = LazyLock::new(|| FormFields {
    name: "Cheap Pills".into(),
    email: "bot@spam.example".into(),
    phone: "000".into(),
    message: "Buy now".into(),
    website: "http://spam.example".into(),
});
