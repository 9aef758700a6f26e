// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Error taxonomy for the search service.

use thiserror::Error;

/// Failure modes surfaced by the search path.
///
/// `InvalidRequest` is caller error and is raised before any index query.
/// `IndexUnavailable` is retryable and must never be masked as an empty
/// result. `QueryRejected` means the adapter could not express a filter the
/// query builder produced: a contract mismatch between the two, not bad
/// caller input. The core performs no retries; retry policy belongs to the
/// adapter or its caller.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search request: {0}")]
    InvalidRequest(String),

    #[error("Search index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("Index rejected query: {0}")]
    QueryRejected(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
