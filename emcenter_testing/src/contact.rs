use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
    time::Duration,
};

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use emcenter_models::contact::{ResponseContract, CONTACT_EMAIL_REGEX};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;

pub const CONTACT_ROUTE: &str = "/api/contact";

pub const SUCCESS_MESSAGE: &str = "Ďakujeme! Budeme vás kontaktovať.";
pub const FORBIDDEN_MESSAGE: &str = "Nepovolený prístup.";
pub const RATE_LIMIT_MESSAGE: &str = "Príliš veľa požiadaviek. Skúste to o chvíľu.";
pub const STORAGE_ERROR_MESSAGE: &str = "Chyba pri ukladaní. Skúste to prosím znova.";
pub const REJECT_MESSAGE: &str = "Správu sa nepodarilo spracovať.";

/// How long requests from `@slow.test` addresses are delayed.
pub const SLOW_DELAY: Duration = Duration::from_secs(2);

const MAX_MESSAGE_LENGTH: usize = 500;

pub async fn start_server(
    host: IpAddr,
    port: u16,
    contract: ResponseContract,
) -> anyhow::Result<()> {
    info!("Starting contact testing server on {host}:{port}");
    info!("Contact endpoint: http://{host}:{port}{CONTACT_ROUTE}");
    info!("Response contract: {contract:?}");
    info!(
        "Email domains forbidden.test, ratelimit.test, error.test, reject.test, garbage.test and \
         slow.test trigger the corresponding failure modes"
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(contract, Default::default()))
        .await
        .context("Failed to start HTTP server")
}

/// A testing server running in the background on an ephemeral port.
#[derive(Debug, Clone)]
pub struct MockContactServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
}

impl MockContactServer {
    pub async fn spawn(contract: ResponseContract) -> anyhow::Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .context("Failed to bind to ephemeral port")?;
        let addr = listener.local_addr()?;
        let state = Arc::new(ServerState::default());

        let router = router(contract, Arc::clone(&state));
        tokio::spawn(async move { axum::serve(listener, router).await });

        Ok(Self { addr, state })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Returns all requests received so far.
    pub async fn received(&self) -> Vec<ReceivedRequest> {
        self.state.received.lock().await.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Debug, Default)]
struct ServerState {
    received: Mutex<Vec<ReceivedRequest>>,
}

struct Handler {
    contract: ResponseContract,
    state: Arc<ServerState>,
}

fn router(contract: ResponseContract, state: Arc<ServerState>) -> Router<()> {
    Router::new()
        .route(CONTACT_ROUTE, routing::post(submit))
        .with_state(Arc::new(Handler { contract, state }))
}

#[derive(Deserialize)]
struct ContactRequest {
    name: String,
    email: String,
    #[serde(default)]
    message: Option<String>,
}

enum Scenario {
    Accept,
    Invalid(&'static str, &'static str),
    Forbidden,
    RateLimit,
    StorageError,
    Reject,
    Garbage,
}

fn scenario(request: &ContactRequest) -> Scenario {
    if request.name.trim().is_empty() {
        return Scenario::Invalid("name", "Meno je povinné");
    }
    if !CONTACT_EMAIL_REGEX.is_match(request.email.trim()) {
        return Scenario::Invalid("email", "Neplatný formát e-mailu");
    }
    if request
        .message
        .as_deref()
        .is_some_and(|m| m.trim().chars().count() > MAX_MESSAGE_LENGTH)
    {
        return Scenario::Invalid("message", "Správa môže mať maximálne 500 znakov");
    }

    match request.email.trim().rsplit_once('@').map(|(_, domain)| domain) {
        Some("forbidden.test") => Scenario::Forbidden,
        Some("ratelimit.test") => Scenario::RateLimit,
        Some("error.test") => Scenario::StorageError,
        Some("reject.test") => Scenario::Reject,
        Some("garbage.test") => Scenario::Garbage,
        _ => Scenario::Accept,
    }
}

async fn submit(handler: State<Arc<Handler>>, headers: HeaderMap, body: Bytes) -> Response {
    let body = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    handler.state.received.lock().await.push(ReceivedRequest {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|x| x.to_str().ok())
            .map(Into::into),
        body: body.clone(),
    });

    let Ok(request) = serde_json::from_value::<ContactRequest>(body) else {
        return validation_error("body", "Invalid request body");
    };

    if request.email.trim().ends_with("@slow.test") {
        tokio::time::sleep(SLOW_DELAY).await;
    }

    let contract = handler.contract;
    match scenario(&request) {
        Scenario::Accept => {
            info!("Accepted contact from {}", request.email.trim());
            match contract {
                ResponseContract::SuccessFlag => {
                    Json(json!({"success": true, "message": SUCCESS_MESSAGE})).into_response()
                }
                ResponseContract::Status => Json(json!({"status": "ok"})).into_response(),
            }
        }
        Scenario::Invalid(field, msg) => validation_error(field, msg),
        Scenario::Forbidden => failure(contract, StatusCode::FORBIDDEN, FORBIDDEN_MESSAGE),
        Scenario::RateLimit => failure(contract, StatusCode::TOO_MANY_REQUESTS, RATE_LIMIT_MESSAGE),
        Scenario::StorageError => failure(
            contract,
            StatusCode::INTERNAL_SERVER_ERROR,
            STORAGE_ERROR_MESSAGE,
        ),
        Scenario::Reject => match contract {
            ResponseContract::SuccessFlag => {
                Json(json!({"success": false, "message": REJECT_MESSAGE})).into_response()
            }
            ResponseContract::Status => {
                Json(json!({"status": "error", "message": REJECT_MESSAGE})).into_response()
            }
        },
        Scenario::Garbage => (
            StatusCode::BAD_GATEWAY,
            [(header::CONTENT_TYPE, "text/html")],
            "<html><body><h1>502 Bad Gateway</h1></body></html>",
        )
            .into_response(),
    }
}

fn failure(contract: ResponseContract, status: StatusCode, message: &str) -> Response {
    let body = match contract {
        ResponseContract::SuccessFlag => json!({"success": false, "detail": message}),
        ResponseContract::Status => json!({"message": message}),
    };
    (status, Json(body)).into_response()
}

fn validation_error(field: &str, msg: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "detail": [{"type": "value_error", "loc": ["body", field], "msg": msg}]
        })),
    )
        .into_response()
}
