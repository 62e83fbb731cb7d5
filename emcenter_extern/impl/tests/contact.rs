use emcenter_demo::{JANA, PETER};
use emcenter_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use emcenter_extern_impl::contact::{ContactApiServiceConfig, ContactApiServiceImpl};
use emcenter_models::contact::{
    ContactEmail, ContactMessage, ContactSubmission, ResponseContract,
};
use emcenter_testing::contact::{
    MockContactServer, FORBIDDEN_MESSAGE, RATE_LIMIT_MESSAGE, REJECT_MESSAGE,
    STORAGE_ERROR_MESSAGE, SUCCESS_MESSAGE,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn success_flag_ok() {
    let (sut, _server) = make_sut(ResponseContract::SuccessFlag).await;
    let result = sut.submit(&JANA).await.unwrap();
    assert_eq!(
        result,
        ContactApiResponse::Accepted {
            message: Some(SUCCESS_MESSAGE.into())
        }
    );
}

#[tokio::test]
async fn success_flag_sends_json_body() {
    let (sut, server) = make_sut(ResponseContract::SuccessFlag).await;
    sut.submit(&PETER).await.unwrap();

    let received = server.received().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        received[0].body,
        json!({
            "name": "Peter Horváth",
            "email": "peter@horvath.eu",
            "phone": null,
            "message": null,
        })
    );
}

#[tokio::test]
async fn success_flag_rate_limit() {
    let (sut, _server) = make_sut(ResponseContract::SuccessFlag).await;
    let result = sut.submit(&with_domain("ratelimit.test")).await.unwrap();
    assert_eq!(
        result,
        ContactApiResponse::Rejected {
            status: 429,
            detail: Some(RATE_LIMIT_MESSAGE.into()),
            message: None
        }
    );
}

#[tokio::test]
async fn success_flag_forbidden() {
    let (sut, _server) = make_sut(ResponseContract::SuccessFlag).await;
    let result = sut.submit(&with_domain("forbidden.test")).await.unwrap();
    assert_eq!(
        result,
        ContactApiResponse::Rejected {
            status: 403,
            detail: Some(FORBIDDEN_MESSAGE.into()),
            message: None
        }
    );
}

#[tokio::test]
async fn success_flag_reject() {
    let (sut, _server) = make_sut(ResponseContract::SuccessFlag).await;
    let result = sut.submit(&with_domain("reject.test")).await.unwrap();
    assert_eq!(
        result,
        ContactApiResponse::Rejected {
            status: 200,
            detail: None,
            message: Some(REJECT_MESSAGE.into())
        }
    );
}

#[tokio::test]
async fn garbage_body() {
    let (sut, _server) = make_sut(ResponseContract::SuccessFlag).await;
    let result = sut.submit(&with_domain("garbage.test")).await.unwrap();
    assert_eq!(
        result,
        ContactApiResponse::Rejected {
            status: 502,
            detail: None,
            message: None
        }
    );
}

#[tokio::test]
async fn validation_list_is_dropped() {
    let (sut, server) = make_sut(ResponseContract::SuccessFlag).await;
    let submission = ContactSubmission {
        message: Some(ContactMessage::try_new("á".repeat(501)).unwrap()),
        ..JANA.clone()
    };

    let result = sut.submit(&submission).await.unwrap();

    assert_eq!(
        result,
        ContactApiResponse::Rejected {
            status: 422,
            detail: None,
            message: None
        }
    );
    assert_eq!(server.received().await.len(), 1);
}

#[tokio::test]
async fn status_ok() {
    let (sut, _server) = make_sut(ResponseContract::Status).await;
    let result = sut.submit(&JANA).await.unwrap();
    assert_eq!(result, ContactApiResponse::Accepted { message: None });
}

#[tokio::test]
async fn status_storage_error() {
    let (sut, _server) = make_sut(ResponseContract::Status).await;
    let result = sut.submit(&with_domain("error.test")).await.unwrap();
    assert_eq!(
        result,
        ContactApiResponse::Rejected {
            status: 500,
            detail: None,
            message: Some(STORAGE_ERROR_MESSAGE.into())
        }
    );
}

#[tokio::test]
async fn status_reject() {
    let (sut, _server) = make_sut(ResponseContract::Status).await;
    let result = sut.submit(&with_domain("reject.test")).await.unwrap();
    assert_eq!(
        result,
        ContactApiResponse::Rejected {
            status: 200,
            detail: None,
            message: Some(REJECT_MESSAGE.into())
        }
    );
}

#[tokio::test]
async fn connection_refused() {
    let base = "http://127.0.0.1:1".parse().unwrap();
    let config = ContactApiServiceConfig::new(&base, ResponseContract::SuccessFlag).unwrap();
    let sut = ContactApiServiceImpl::new(config);
    sut.submit(&JANA).await.unwrap_err();
}

async fn make_sut(contract: ResponseContract) -> (ContactApiServiceImpl, MockContactServer) {
    let server = MockContactServer::spawn(contract).await.unwrap();
    let base = server.base_url().parse().unwrap();
    let config = ContactApiServiceConfig::new(&base, contract).unwrap();
    (ContactApiServiceImpl::new(config), server)
}

fn with_domain(domain: &str) -> ContactSubmission {
    ContactSubmission {
        email: ContactEmail::try_new(format!("jana@{domain}")).unwrap(),
        ..JANA.clone()
    }
}
