//! Turns the loaded config into the pieces the form controller is built from.

use emcenter_config::{Config, MessagesConfig};
use emcenter_extern_impl::contact::{ContactApiServiceConfig, ContactApiServiceImpl};
use emcenter_form_contracts::FormMessages;
use emcenter_form_impl::FormConfig;

pub fn form_config(config: &Config) -> FormConfig {
    FormConfig {
        messages: form_messages(config.messages.clone()),
        max_message_length: config
            .form
            .strict
            .then_some(config.form.max_message_length),
        timeout: config.api.timeout.into(),
    }
}

pub fn contact_api(config: &Config) -> anyhow::Result<ContactApiServiceImpl> {
    ContactApiServiceConfig::new(&config.api.base_url, config.api.contract)
        .map(ContactApiServiceImpl::new)
}

fn form_messages(messages: MessagesConfig) -> FormMessages {
    let MessagesConfig {
        success,
        error,
        name_required,
        email_invalid,
        message_too_long,
        sending,
    } = messages;

    FormMessages {
        success,
        error,
        name_required,
        email_invalid,
        message_too_long,
        sending,
    }
}

#[cfg(test)]
mod tests {
    use std::{path::Path, time::Duration};

    use emcenter_config::DEFAULT_CONFIG_PATH;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strict_form() {
        let config = emcenter_config::load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        let form = form_config(&config);
        assert_eq!(form.max_message_length, Some(500));
        assert_eq!(form.timeout, Duration::from_secs(30));
        assert_eq!(form.messages.sending, "Odosielam…");
    }

    #[test]
    fn lenient_form() {
        let config = emcenter_config::load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &["form.strict = false"],
        )
        .unwrap();
        assert_eq!(form_config(&config).max_message_length, None);
    }

    #[test]
    fn contact_endpoint() {
        let config = emcenter_config::load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &["api.base_url = \"https://emcenter.sk\""],
        )
        .unwrap();
        contact_api(&config).unwrap();
    }
}
