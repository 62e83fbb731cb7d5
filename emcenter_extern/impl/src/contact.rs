use std::sync::Arc;

use emcenter_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use emcenter_models::contact::{ContactSubmission, ResponseContract};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::http::HttpClient;

pub const CONTACT_ROUTE: &str = "/api/contact";

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    endpoint: Arc<Url>,
    contract: ResponseContract,
}

impl ContactApiServiceConfig {
    pub fn new(base_url: &Url, contract: ResponseContract) -> anyhow::Result<Self> {
        Ok(Self {
            endpoint: base_url.join(CONTACT_ROUTE)?.into(),
            contract,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

impl ContactApiService for ContactApiServiceImpl {
    #[instrument(skip_all, fields(endpoint = %self.config.endpoint))]
    async fn submit(&self, submission: &ContactSubmission) -> anyhow::Result<ContactApiResponse> {
        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .json(&ContactRequest::from(submission))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let body = serde_json::from_slice::<ResponseBody>(&body)
            .inspect_err(|err| {
                debug!(%status, "Contact endpoint sent unexpected body: {err}");
            })
            .unwrap_or_default();

        Ok(interpret(self.config.contract, status, body))
    }
}

#[derive(Debug, Serialize)]
struct ContactRequest<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    message: Option<&'a str>,
}

impl<'a> From<&'a ContactSubmission> for ContactRequest<'a> {
    fn from(value: &'a ContactSubmission) -> Self {
        Self {
            name: &value.name,
            email: &value.email,
            phone: value.phone.as_deref().map(String::as_str),
            message: value.message.as_deref().map(String::as_str),
        }
    }
}

/// Union of the fields used by both response contracts. Every field is kept
/// as raw JSON so that one mistyped field does not discard the others.
#[derive(Debug, Default, Deserialize)]
struct ResponseBody {
    success: Option<serde_json::Value>,
    status: Option<serde_json::Value>,
    message: Option<serde_json::Value>,
    detail: Option<serde_json::Value>,
}

fn text(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

fn interpret(
    contract: ResponseContract,
    status: StatusCode,
    body: ResponseBody,
) -> ContactApiResponse {
    match contract {
        ResponseContract::SuccessFlag
            if status.is_success() && body.success == Some(serde_json::Value::Bool(true)) =>
        {
            ContactApiResponse::Accepted {
                message: text(body.message),
            }
        }
        ResponseContract::SuccessFlag => ContactApiResponse::Rejected {
            status: status.as_u16(),
            detail: text(body.detail),
            message: text(body.message),
        },
        ResponseContract::Status
            if status == StatusCode::OK
                && body.status.as_ref().and_then(serde_json::Value::as_str) == Some("ok") =>
        {
            ContactApiResponse::Accepted { message: None }
        }
        ResponseContract::Status => ContactApiResponse::Rejected {
            status: status.as_u16(),
            detail: None,
            message: text(body.message),
        },
    }
}
