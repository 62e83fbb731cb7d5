//! Page elements the form controller drives. Hosts (a browser binding, a
//! terminal, test fakes) implement these and hand them to the controller.

use emcenter_models::form::FormFields;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FieldSource: Send + Sync + 'static {
    /// Returns the current, untrimmed values of all form fields.
    fn read(&self) -> FormFields;
}

/// An element that can be shown, hidden and given a text.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait UiElement: Send + Sync + 'static {
    fn set_visible(&self, visible: bool);
    fn set_text(&self, text: &str);
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmitControl: Send + Sync + 'static {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_enabled(&self, enabled: bool);
}

#[cfg(feature = "mock")]
impl MockFieldSource {
    pub fn with_read(mut self, fields: FormFields) -> Self {
        self.expect_read().once().return_const(fields);
        self
    }
}

#[cfg(feature = "mock")]
impl MockSubmitControl {
    pub fn with_label(mut self, label: String) -> Self {
        self.expect_label().once().return_const(label);
        self
    }
}
