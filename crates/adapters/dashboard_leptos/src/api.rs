//! Light controller client wrapping `gloo-net` for `HEAD` calls.

use std::future::Future;

use gloo_net::http::{Method, RequestBuilder};
use lightpanel_app::ports::{ControlError, ControlRequest, ControlService, Reply};

/// [`ControlService`] using the browser's `fetch`.
///
/// An empty base URL targets the origin the page was served from, which is
/// where the controller serves this page.
#[derive(Debug, Clone, Default)]
pub struct GlooControlService {
    base_url: String,
}

impl GlooControlService {
    /// Talk to the origin that served the page.
    #[must_use]
    pub fn same_origin() -> Self {
        Self::default()
    }

    /// Talk to a controller at another origin.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl ControlService for GlooControlService {
    fn send(&self, request: ControlRequest) -> impl Future<Output = Result<Reply, ControlError>> {
        let url = format!("{}{}", self.base_url, request.path());
        async move {
            let resp = RequestBuilder::new(&url)
                .method(Method::HEAD)
                .send()
                .await
                .map_err(ControlError::transport)?;
            Ok(Reply::new(resp.status(), resp.status_text()))
        }
    }
}
