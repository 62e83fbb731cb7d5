use anyhow::bail;
use clap::Args;
use emcenter_config::Config;
use emcenter_form_contracts::{FormService, FormState};
use emcenter_form_impl::FormSubmissionController;
use emcenter_models::form::FormFields;
use tracing::info;

use crate::{environment, terminal};

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Full name of the sender
    #[arg(long)]
    name: String,
    /// Email address of the sender
    #[arg(long)]
    email: String,
    /// Phone number of the sender
    #[arg(long, default_value = "")]
    phone: String,
    /// Message to send
    #[arg(long, default_value = "")]
    message: String,
    /// Honeypot field, only bots fill this in
    #[arg(long, default_value = "", hide = true)]
    website: String,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let contact_api = environment::contact_api(&config)?;
        let form_config = environment::form_config(&config);

        info!("Submitting contact form to {}", config.api.base_url);
        let controller =
            FormSubmissionController::new(terminal::ui(self.into()), contact_api, form_config);

        submit(&controller).await
    }
}

impl From<SubmitCommand> for FormFields {
    fn from(value: SubmitCommand) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            message: value.message,
            website: value.website,
        }
    }
}

async fn submit(form: &impl FormService) -> anyhow::Result<()> {
    match form.on_submit().await {
        FormState::Succeeded => Ok(()),
        state => bail!("Contact form was not submitted (state: {state:?})"),
    }
}
