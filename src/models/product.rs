// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product document as stored in the external search index.
///
/// The SKU is the only required field. Every other field is optional: an
/// absent value means "unknown" and is never coerced to zero or an empty
/// string, so that filtering and facet bucketing can skip it.
///
/// Wire names follow the index mapping: list fields are camelCase
/// (`colorVariants`) except `total_reviews`, which the index has always
/// stored snake_case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique product identifier within the index
    pub sku: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    /// Nonnegative price in currency units
    pub price: Option<f64>,
    /// Average review rating in [0, 5]
    pub rating: Option<f64>,
    pub stock: Option<i64>,
    pub color: Option<String>,
    #[serde(default, rename = "colorVariants")]
    pub color_variants: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    /// Alternative terms matched alongside the product name
    #[serde(default)]
    pub synonyms: Vec<String>,
    pub total_reviews: Option<i64>,
}
