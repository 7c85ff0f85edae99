//! Provider contract and the fallback-on-failure adapter

use std::future::Future;

use crate::core::error::Result;
use crate::statements::fallback::fallback_statements;
use crate::statements::set::StatementSet;

/// Async source of statement sets
///
/// Implementations may fail freely; callers go through
/// [`fetch_statements`], which never surfaces the error.
pub trait StatementProvider {
    fn fetch(&self) -> impl Future<Output = Result<StatementSet>> + Send;
}

/// Fetch a validated statement set, substituting the fallback on any failure
pub async fn fetch_statements<P: StatementProvider>(provider: &P) -> StatementSet {
    match provider.fetch().await {
        Ok(set) => match set.validate() {
            Ok(()) => set,
            Err(e) => {
                tracing::warn!("Provider returned unusable statements ({}), using fallback", e);
                fallback_statements()
            }
        },
        Err(e) => {
            tracing::warn!("Statement provider failed ({}), using fallback", e);
            fallback_statements()
        }
    }
}
