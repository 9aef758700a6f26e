// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Request, response, and facet models for the product search API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::SearchError;
use crate::models::product::Product;

/// Page window over a result set.
///
/// `limit` bounds the returned page only, never the candidate set used
/// for facet computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageSpec {
    pub limit: usize,
    pub offset: usize,
}

impl PageSpec {
    /// Validate caller-supplied pagination before any index query is issued.
    pub fn new(limit: i64, offset: i64) -> Result<Self, SearchError> {
        if limit < 0 {
            return Err(SearchError::InvalidRequest(format!(
                "limit must be nonnegative, got {}",
                limit
            )));
        }
        if offset < 0 {
            return Err(SearchError::InvalidRequest(format!(
                "offset must be nonnegative, got {}",
                offset
            )));
        }
        Ok(PageSpec {
            limit: limit as usize,
            offset: offset as usize,
        })
    }

    /// First page with the given limit.
    pub fn first(limit: usize) -> Self {
        PageSpec { limit, offset: 0 }
    }
}

/// Structured search parameters shared by the faceted and enhanced
/// endpoints. Every field is optional; absent fields contribute no
/// filter clause.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub brands: Vec<String>,
    pub colors: Vec<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub rating_min: Option<f64>,
    pub rating_max: Option<f64>,
}

/// Request body for the enhanced search endpoint: structured parameters
/// plus pagination. Defaults: limit 10, offset 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EnhancedSearchRequest {
    #[serde(flatten)]
    pub params: SearchParams,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query string for the keyword-only endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordQuery {
    pub keyword: String,
}

/// Fixed price buckets in currency units. Lower-inclusive, upper-exclusive,
/// except the open-ended last bucket. All buckets are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriceRanges {
    #[serde(rename = "<200")]
    pub under_200: u64,
    #[serde(rename = "200-499")]
    pub from_200_to_499: u64,
    #[serde(rename = "500-999")]
    pub from_500_to_999: u64,
    #[serde(rename = "1000-1999")]
    pub from_1000_to_1999: u64,
    #[serde(rename = ">=2000")]
    pub from_2000: u64,
}

impl PriceRanges {
    /// Sum over all buckets.
    pub fn total(&self) -> u64 {
        self.under_200
            + self.from_200_to_499
            + self.from_500_to_999
            + self.from_1000_to_1999
            + self.from_2000
    }
}

/// Fixed rating bands with inclusive upper bounds. All bands are always
/// present. Note the boundary convention differs from `PriceRanges`:
/// rating bands are upper-inclusive, price buckets upper-exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RatingRanges {
    #[serde(rename = "1.0-2.0")]
    pub up_to_2: u64,
    #[serde(rename = "2.1-3.0")]
    pub up_to_3: u64,
    #[serde(rename = "3.1-4.0")]
    pub up_to_4: u64,
    #[serde(rename = "4.1-5.0")]
    pub up_to_5: u64,
}

impl RatingRanges {
    /// Sum over all bands.
    pub fn total(&self) -> u64 {
        self.up_to_2 + self.up_to_3 + self.up_to_4 + self.up_to_5
    }
}

/// Aggregated facet counts over a candidate sample of matching documents.
///
/// Category facets map distinct non-absent labels to counts; map ordering
/// is unspecified. Computed fresh per request, never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Facets {
    pub brand: HashMap<String, u64>,
    pub color: HashMap<String, u64>,
    pub category: HashMap<String, u64>,
    pub price_ranges: PriceRanges,
    pub rating_ranges: RatingRanges,
}

/// Search result page plus facets.
///
/// `total` is the full matching-set size reported by the index for the
/// page query; because facets are computed over a bounded candidate
/// sample, facet counts need not sum to `total` for large result sets.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub total: u64,
    pub products: Vec<Product>,
    pub facets: Facets,
}
