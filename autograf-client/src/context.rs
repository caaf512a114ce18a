//! Cancellation and deadlines for in-flight requests.

use crate::error::TransportError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Per-call context carrying a cancellation token and an optional deadline.
///
/// Every request-issuing method takes a `&RequestContext`. When the token is
/// canceled or the deadline passes, the in-flight HTTP call is dropped and the
/// method returns [`TransportError::Canceled`] or
/// [`TransportError::DeadlineExceeded`].
///
/// No deadline is imposed by default: a background context waits as long as the
/// transport does.
///
/// # Example
///
/// ```no_run
/// use autograf_client::RequestContext;
/// use std::time::Duration;
///
/// let ctx = RequestContext::background().with_timeout(Duration::from_secs(10));
/// let token = ctx.cancellation_token().clone();
/// // Hand `token` to a shutdown handler; `token.cancel()` aborts calls using `ctx`.
/// # drop(token);
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}

impl RequestContext {
    /// A context that is never canceled and has no deadline.
    pub fn background() -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    /// A context driven by an existing cancellation token.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancel: token,
            deadline: None,
        }
    }

    /// Set an absolute deadline. An earlier existing deadline is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    /// Set a deadline relative to now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a context whose token is canceled along with this one but can
    /// also be canceled on its own.
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
    }

    /// Token observed by calls made with this context.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Cancel every call using this context (and its children).
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the token has been canceled.
    pub fn is_canceled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drive `fut` until it completes, the token fires, or the deadline passes.
    pub(crate) async fn guard<F: Future>(&self, fut: F) -> Result<F::Output, TransportError> {
        if self.cancel.is_cancelled() {
            return Err(TransportError::Canceled);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(TransportError::Canceled),
            _ = deadline => Err(TransportError::DeadlineExceeded),
            output = fut => Ok(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_guard_passes_output_through() {
        let ctx = RequestContext::background();
        let value = ctx.guard(async { 42 }).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_guard_already_canceled() {
        let ctx = RequestContext::background();
        ctx.cancel();

        let result = ctx.guard(async { 1 }).await;
        assert!(matches!(result, Err(TransportError::Canceled)));
    }

    #[tokio::test]
    async fn test_guard_canceled_while_pending() {
        let ctx = RequestContext::background();
        let token = ctx.cancellation_token().clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        let result = ctx.guard(std::future::pending::<()>()).await;
        assert!(matches!(result, Err(TransportError::Canceled)));
    }

    #[tokio::test]
    async fn test_guard_deadline_exceeded() {
        let ctx = RequestContext::background().with_timeout(Duration::from_millis(20));
        let result = ctx.guard(std::future::pending::<()>()).await;
        assert!(matches!(result, Err(TransportError::DeadlineExceeded)));
    }

    #[test]
    fn test_with_deadline_keeps_earliest() {
        let now = Instant::now();
        let early = now + Duration::from_secs(1);
        let late = now + Duration::from_secs(10);

        let ctx = RequestContext::background()
            .with_deadline(early)
            .with_deadline(late);
        assert_eq!(ctx.deadline(), Some(early));
    }

    #[test]
    fn test_child_follows_parent() {
        let parent = RequestContext::background();
        let child = parent.child();

        child.cancel();
        assert!(child.is_canceled());
        assert!(!parent.is_canceled());

        let other = parent.child();
        parent.cancel();
        assert!(other.is_canceled());
    }
}
