use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use emcenter_demo::SUBMIT_LABEL;
use emcenter_extern_contracts::contact::ContactApiService;
use emcenter_form_contracts::{
    ui::{FieldSource, SubmitControl, UiElement},
    FormMessages,
};
use emcenter_models::form::FormFields;

use crate::{FormConfig, FormSubmissionController, FormUi};


pub fn config() -> FormConfig {
    FormConfig {
        messages: FormMessages {
            success: "Ďakujeme! Budeme vás kontaktovať.".into(),
            error: "Nastala chyba. Skúste to prosím znova.".into(),
            name_required: "Meno je povinné.".into(),
            email_invalid: "Zadajte platnú e-mailovú adresu.".into(),
            message_too_long: "Správa môže mať maximálne 500 znakov.".into(),
            sending: "Odosielam…".into(),
        },
        max_message_length: Some(500),
        timeout: Duration::from_secs(30),
    }
}

type Sut<ContactApi> = FormSubmissionController<FakeFields, FakeElement, FakeSubmit, ContactApi>;

/// In-memory stand-in for the page, shared with the controller under test.
#[derive(Debug, Clone)]
struct Page {
    fields: FakeFields,
    form: FakeElement,
    success: FakeElement,
    error: FakeElement,
    submit: FakeSubmit,
}

impl Page {
    fn new(fields: &FormFields) -> Self {
        Self {
            fields: FakeFields(Arc::new(Mutex::new(fields.clone()))),
            form: FakeElement::new(true),
            success: FakeElement::new(false),
            error: FakeElement::new(false),
            submit: FakeSubmit(Arc::new(Mutex::new(SubmitState {
                enabled: true,
                label: SUBMIT_LABEL.into(),
            }))),
        }
    }

    fn ui(&self) -> FormUi<FakeFields, FakeElement, FakeSubmit> {
        FormUi {
            fields: self.fields.clone(),
            form: self.form.clone(),
            success: self.success.clone(),
            error: self.error.clone(),
            submit: self.submit.clone(),
        }
    }

    fn sut<ContactApi: ContactApiService>(&self, contact_api: ContactApi) -> Sut<ContactApi> {
        FormSubmissionController::new(self.ui(), contact_api, config())
    }

    fn set_fields(&self, fields: &FormFields) {
        *self.fields.0.lock().unwrap() = fields.clone();
    }

    #[track_caller]
    fn assert_unlocked(&self) {
        assert_eq!(
            self.submit.get(),
            SubmitState {
                enabled: true,
                label: SUBMIT_LABEL.into()
            }
        );
    }

    #[track_caller]
    fn assert_error_shown(&self, text: &str) {
        assert!(self.form.get().visible);
        assert_eq!(self.success.get(), ElementState::default());
        assert_eq!(
            self.error.get(),
            ElementState {
                visible: true,
                text: text.into()
            }
        );
    }

    #[track_caller]
    fn assert_success_shown(&self, text: &str) {
        assert!(!self.form.get().visible);
        assert!(!self.error.get().visible);
        assert_eq!(
            self.success.get(),
            ElementState {
                visible: true,
                text: text.into()
            }
        );
    }
}

#[derive(Debug, Clone)]
struct FakeFields(Arc<Mutex<FormFields>>);

impl FieldSource for FakeFields {
    fn read(&self) -> FormFields {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ElementState {
    visible: bool,
    text: String,
}

#[derive(Debug, Clone)]
struct FakeElement(Arc<Mutex<ElementState>>);

impl FakeElement {
    fn new(visible: bool) -> Self {
        Self(Arc::new(Mutex::new(ElementState {
            visible,
            text: String::new(),
        })))
    }

    fn get(&self) -> ElementState {
        self.0.lock().unwrap().clone()
    }
}

impl UiElement for FakeElement {
    fn set_visible(&self, visible: bool) {
        self.0.lock().unwrap().visible = visible;
    }

    fn set_text(&self, text: &str) {
        self.0.lock().unwrap().text = text.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SubmitState {
    enabled: bool,
    label: String,
}

#[derive(Debug, Clone)]
struct FakeSubmit(Arc<Mutex<SubmitState>>);

impl FakeSubmit {
    fn get(&self) -> SubmitState {
        self.0.lock().unwrap().clone()
    }
}

impl SubmitControl for FakeSubmit {
    fn label(&self) -> String {
        self.0.lock().unwrap().label.clone()
    }

    fn set_label(&self, label: &str) {
        self.0.lock().unwrap().label = label.into();
    }

    fn set_enabled(&self, enabled: bool) {
        self.0.lock().unwrap().enabled = enabled;
    }
}
