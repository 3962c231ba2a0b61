//! Blocking `ureq` client for the light controller.

use std::future::Future;

use lightpanel_app::ports::{ControlError, ControlRequest, ControlService, Reply};
use tracing::debug;

use crate::config::HttpConfig;

/// [`ControlService`] backed by a shared `ureq` agent.
///
/// Each request runs on tokio's blocking pool, so a tokio runtime must be
/// current when [`send`](ControlService::send) is awaited.
#[derive(Debug, Clone)]
pub struct UreqControlService {
    agent: ureq::Agent,
    base_url: String,
}

impl UreqControlService {
    #[must_use]
    pub fn new(config: &HttpConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, request: &ControlRequest) -> String {
        format!("{}{}", self.base_url, request.path())
    }
}

/// Issue one `HEAD` and fold HTTP error statuses back into a [`Reply`].
fn head(agent: &ureq::Agent, url: &str) -> Result<Reply, ControlError> {
    match agent.head(url).call() {
        Ok(resp) => Ok(Reply::new(resp.status(), resp.status_text())),
        Err(ureq::Error::Status(status, resp)) => Ok(Reply::new(status, resp.status_text())),
        Err(ureq::Error::Transport(err)) => Err(ControlError::transport(err)),
    }
}

impl ControlService for UreqControlService {
    fn send(&self, request: ControlRequest) -> impl Future<Output = Result<Reply, ControlError>> {
        let agent = self.agent.clone();
        let url = self.url(&request);
        async move {
            debug!(%url, "HEAD");
            let reply = tokio::task::spawn_blocking(move || head(&agent, &url))
                .await
                .map_err(ControlError::transport)??;
            debug!(status = reply.status, reason = %reply.reason, "reply");
            Ok(reply)
        }
    }
}
