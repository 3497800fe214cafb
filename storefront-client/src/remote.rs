//! Result wrapper for remote calls
//!
//! Every repository method funnels its transport future through [`call`], so
//! no failure escapes unclassified.

use shared::{ApiResult, DomainError, Failure, Operation, classify};
use std::future::Future;

/// Await a transport call and classify its failure for `operation`
///
/// `Ok` passes through untouched. Logging has no effect on the result.
pub async fn call<T, F>(operation: Operation, request: F) -> ApiResult<T>
where
    F: Future<Output = Result<T, Failure>>,
{
    match request.await {
        Ok(value) => {
            tracing::debug!(operation = %operation, "Remote call succeeded");
            Ok(value)
        }
        Err(failure) => {
            let error = classify(operation, &failure);
            log_failure(operation, &failure, &error);
            Err(error)
        }
    }
}

fn log_failure(operation: Operation, failure: &Failure, error: &DomainError) {
    let status = failure.status();
    let server_message = failure.message().unwrap_or_default();
    let kind = error.kind();
    let server_side = match error {
        DomainError::ServerInternal | DomainError::NoInternet | DomainError::Unknown { .. } => true,
        DomainError::HttpError { code, .. } => *code >= 500,
        _ => false,
    };

    if server_side {
        tracing::warn!(operation = %operation, ?status, %kind, server_message, "Remote call failed");
    } else {
        tracing::debug!(operation = %operation, ?status, %kind, server_message, "Remote call rejected");
    }
}
