//! acidbase-extract
//!
//! Contract for pulling ABG values out of a scanned report: the document
//! model, the extractor seam, reply parsing, merging into the lab form,
//! and the bounded retry wrapper.

pub mod command;
pub mod document;
pub mod error;
pub mod fields;
pub mod prompt;
pub mod retry;

use std::future::Future;

use crate::document::SourceDocument;
use crate::error::ExtractError;

/// A backend that reads a document and replies with the model's raw text.
///
/// Implementations report service overload as an `Invocation` error whose
/// message mentions `503` or `overloaded`; [`retry::extract_with_retry`]
/// retries only those.
pub trait Extractor: Send + Sync {
    fn name(&self) -> &str;

    fn extract(
        &self,
        document: &SourceDocument,
    ) -> impl Future<Output = Result<String, ExtractError>> + Send;
}
