// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Contract between the search core and the document index.

use async_trait::async_trait;

use crate::error::SearchError;
use crate::models::filter::Filter;
use crate::models::product::Product;
use crate::models::search::PageSpec;

/// One page of index results.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexPage {
    /// Size of the full matching set, regardless of `page.limit`
    pub total: u64,
    pub products: Vec<Product>,
}

/// Executes a filter against a document index and returns ranked,
/// paginated hits plus the total match count.
///
/// Adapters must support text match, equality, set membership, inclusive
/// numeric ranges, and arbitrary AND/OR nesting. An unreachable index
/// surfaces `SearchError::IndexUnavailable`; a filter the adapter cannot
/// express surfaces `SearchError::QueryRejected`. Both propagate to the
/// caller, never swallowed into an empty result.
#[async_trait]
pub trait IndexClient: Send + Sync {
    async fn execute(&self, filter: &Filter, page: PageSpec) -> Result<IndexPage, SearchError>;
}
