use std::time::Duration;

use tracing::{info, warn};

use crate::Extractor;
use crate::document::SourceDocument;
use crate::error::ExtractError;
use crate::fields::{ExtractedFields, parse_response};

/// Bounds on a single extraction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub attempt_timeout: Duration,
    /// Delay after the first overloaded attempt; doubles each time.
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    /// Delay before retrying after the given (1-based) failed attempt.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            attempt_timeout: Duration::from_secs(30),
            initial_backoff: Duration::from_millis(500),
        }
    }
}

/// Run `extractor` against `document` and parse its reply.
///
/// Only overloaded failures are retried. Timeouts, credential errors and
/// unparseable replies are returned from the attempt that produced them.
pub async fn extract_with_retry<E>(
    extractor: &E,
    document: &SourceDocument,
    policy: &RetryPolicy,
) -> Result<ExtractedFields, ExtractError>
where
    E: Extractor + ?Sized,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        info!(
            extractor = extractor.name(),
            filename = %document.filename,
            attempt,
            "requesting extraction"
        );

        let reply =
            match tokio::time::timeout(policy.attempt_timeout, extractor.extract(document)).await
            {
                Ok(reply) => reply,
                Err(_) => return Err(ExtractError::Timeout(policy.attempt_timeout)),
            };

        match reply {
            Ok(text) => {
                let fields = parse_response(&text)?;
                info!(
                    filename = %document.filename,
                    fields = fields.len(),
                    "extraction complete"
                );
                return Ok(fields);
            }
            Err(e) if e.is_overloaded() && attempt < max_attempts => {
                let delay = policy.backoff(attempt);
                warn!(attempt, max_attempts, ?delay, "extraction service overloaded, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) if e.is_overloaded() => {
                return Err(ExtractError::Overloaded { attempts: attempt });
            }
            Err(e) => return Err(e),
        }
    }
}
