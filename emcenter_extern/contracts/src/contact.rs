use std::future::Future;

use emcenter_models::contact::ContactSubmission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Sends the submission to the contact endpoint.
    ///
    /// Returns an error only if no response could be obtained at all (e.g.
    /// connection failures). Any response the server sends, including error
    /// statuses and malformed bodies, is reported as a [`ContactApiResponse`].
    fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<ContactApiResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactApiResponse {
    /// The server accepted the submission.
    Accepted {
        /// Confirmation text supplied by the server, if any.
        message: Option<String>,
    },
    /// The server rejected the submission or failed to process it.
    Rejected {
        status: u16,
        detail: Option<String>,
        message: Option<String>,
    },
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: anyhow::Result<ContactApiResponse>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
