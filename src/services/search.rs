// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Search orchestration: query composition, dual-query execution, and
//! response assembly.

use std::sync::Arc;

use crate::error::SearchError;
use crate::models::filter::Filter;
use crate::models::search::{Facets, PageSpec, SearchParams, SearchResponse};
use crate::services::facets::compute_facets;
use crate::services::index::IndexClient;
use crate::services::query::{build_filter, keyword_filter};

/// Default number of candidate documents sampled for facet computation.
pub const DEFAULT_FACET_CANDIDATES: usize = 1000;

/// Hard ceiling on the facet sample, whatever the caller requests.
pub const FACET_SAMPLE_CEILING: usize = 1000;

/// Default page size for the simple, synonym, and faceted endpoints.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Default page size for the enhanced endpoint.
pub const ENHANCED_DEFAULT_LIMIT: usize = 10;

/// Search entry points over an index client.
///
/// Stateless apart from the shared index handle: every request builds its
/// own filter and facet result, so the service is safe under unbounded
/// concurrent use.
pub struct SearchService {
    index: Arc<dyn IndexClient>,
}

impl SearchService {
    pub fn new(index: Arc<dyn IndexClient>) -> Self {
        Self { index }
    }

    /// Keyword search over name and synonyms, first 50 hits, no facet
    /// aggregation. Single index query.
    pub async fn simple_search(&self, keyword: &str) -> Result<SearchResponse, SearchError> {
        let filter = keyword_filter(keyword);
        let page = self
            .index
            .execute(&filter, PageSpec::first(DEFAULT_PAGE_LIMIT))
            .await?;

        Ok(SearchResponse {
            total: page.total,
            products: page.products,
            facets: Facets::default(),
        })
    }

    /// Keyword search over name and synonyms with facets computed from up
    /// to 1000 candidate matches; first 50 hits returned.
    pub async fn synonym_search(&self, keyword: &str) -> Result<SearchResponse, SearchError> {
        let filter = keyword_filter(keyword);
        self.search_with_facets(
            &filter,
            PageSpec::first(DEFAULT_PAGE_LIMIT),
            DEFAULT_FACET_CANDIDATES,
        )
        .await
    }

    /// Structured search over all filter parameters (keyword matching also
    /// covers the description field); first 50 hits plus facets.
    pub async fn faceted_search(
        &self,
        params: &SearchParams,
    ) -> Result<SearchResponse, SearchError> {
        let filter = build_filter(params);
        self.search_with_facets(
            &filter,
            PageSpec::first(DEFAULT_PAGE_LIMIT),
            DEFAULT_FACET_CANDIDATES,
        )
        .await
    }

    /// Structured search with caller-controlled pagination.
    pub async fn enhanced_search(
        &self,
        params: &SearchParams,
        page: PageSpec,
    ) -> Result<SearchResponse, SearchError> {
        let filter = build_filter(params);
        self.search_with_facets(&filter, page, DEFAULT_FACET_CANDIDATES)
            .await
    }

    /// Run the dual-query strategy: one bounded candidate fetch to source
    /// facet computation, one fetch for the caller's page.
    ///
    /// The two queries are independent reads over the same filter and run
    /// concurrently; the first failure fails the whole request (no partial
    /// response). Facets are approximate by design, computed over at most
    /// `min(candidate_cap, 1000)` documents, so for result sets larger
    /// than the sample, facet counts will not sum to `total`. `total`
    /// always reflects the full matching set as reported by the page
    /// query. The sample and the page may observe slightly different index
    /// snapshots; callers tolerate that.
    pub async fn search_with_facets(
        &self,
        filter: &Filter,
        page: PageSpec,
        candidate_cap: usize,
    ) -> Result<SearchResponse, SearchError> {
        let candidate_page = PageSpec::first(candidate_cap.min(FACET_SAMPLE_CEILING));

        let (candidates, hits) = tokio::try_join!(
            self.index.execute(filter, candidate_page),
            self.index.execute(filter, page),
        )?;

        Ok(SearchResponse {
            total: hits.total,
            products: hits.products,
            facets: compute_facets(&candidates.products),
        })
    }
}
