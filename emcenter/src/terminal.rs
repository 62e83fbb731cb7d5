//! Runs the contact form in a terminal: field values come from the command
//! line and the message regions are printed once they become visible.

use std::sync::{Arc, Mutex, PoisonError};

use emcenter_form_contracts::ui::{FieldSource, SubmitControl, UiElement};
use emcenter_form_impl::FormUi;
use emcenter_models::form::FormFields;
use tracing::debug;

pub const SUBMIT_LABEL: &str = "Odoslať";

pub type TerminalUi = FormUi<TerminalFields, TerminalElement, TerminalSubmit>;

pub fn ui(fields: FormFields) -> TerminalUi {
    FormUi {
        fields: TerminalFields(fields),
        form: TerminalElement::new(ElementKind::Form),
        success: TerminalElement::new(ElementKind::Success),
        error: TerminalElement::new(ElementKind::Error),
        submit: TerminalSubmit::new(SUBMIT_LABEL),
    }
}

#[derive(Debug, Clone)]
pub struct TerminalFields(FormFields);

impl FieldSource for TerminalFields {
    fn read(&self) -> FormFields {
        self.0.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Form,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct TerminalElement {
    kind: ElementKind,
    text: Arc<Mutex<String>>,
}

impl TerminalElement {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            text: Default::default(),
        }
    }

    pub fn text(&self) -> String {
        self.text
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl UiElement for TerminalElement {
    fn set_visible(&self, visible: bool) {
        debug!(kind = ?self.kind, visible, "Element visibility changed");
        if !visible {
            return;
        }
        match self.kind {
            ElementKind::Form => {}
            ElementKind::Success => println!("{}", self.text()),
            ElementKind::Error => eprintln!("{}", self.text()),
        }
    }

    fn set_text(&self, text: &str) {
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = text.into();
    }
}

#[derive(Debug, Clone)]
pub struct TerminalSubmit {
    label: Arc<Mutex<String>>,
}

impl TerminalSubmit {
    fn new(label: &str) -> Self {
        Self {
            label: Arc::new(Mutex::new(label.into())),
        }
    }
}

impl SubmitControl for TerminalSubmit {
    fn label(&self) -> String {
        self.label
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_label(&self, label: &str) {
        debug!(label, "Submit label changed");
        *self.label.lock().unwrap_or_else(PoisonError::into_inner) = label.into();
    }

    fn set_enabled(&self, enabled: bool) {
        debug!(enabled, "Submit control toggled");
    }
}
