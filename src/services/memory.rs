// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Process-local index backend.
//!
//! Evaluates the filter tree directly over a catalog held in memory. Used
//! as the `memory` backend for local development and as the index double
//! in integration tests; text matching is a case-insensitive containment
//! check rather than the full tokenization a real index performs.

use async_trait::async_trait;

use crate::error::SearchError;
use crate::models::filter::{Field, Filter};
use crate::models::product::Product;
use crate::models::search::PageSpec;
use crate::services::index::{IndexClient, IndexPage};

pub struct MemoryIndex {
    products: Vec<Product>,
}

impl MemoryIndex {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl IndexClient for MemoryIndex {
    async fn execute(&self, filter: &Filter, page: PageSpec) -> Result<IndexPage, SearchError> {
        let matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| matches(filter, product))
            .collect();

        let total = matching.len() as u64;
        let products = matching
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect();

        Ok(IndexPage { total, products })
    }
}

/// Evaluate a filter node against one product.
///
/// An absent field value never satisfies a positive predicate; an empty
/// `InSet` and an empty `And` match everything.
fn matches(filter: &Filter, product: &Product) -> bool {
    match filter {
        Filter::And(children) => children.iter().all(|child| matches(child, product)),
        Filter::Or(children) => children.iter().any(|child| matches(child, product)),
        Filter::MatchText { field, term } => text_values(product, *field)
            .iter()
            .any(|value| contains_ignore_case(value, term)),
        Filter::Equals { field, value } => label(product, *field) == Some(value.as_str()),
        Filter::InSet { field, values } => {
            values.is_empty()
                || label(product, *field)
                    .map(|value| values.iter().any(|candidate| candidate == value))
                    .unwrap_or(false)
        }
        Filter::Range { field, min, max } => match number(product, *field) {
            Some(value) => {
                min.map(|bound| value >= bound).unwrap_or(true)
                    && max.map(|bound| value <= bound).unwrap_or(true)
            }
            None => false,
        },
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn text_values(product: &Product, field: Field) -> Vec<&str> {
    match field {
        Field::Name => product.name.as_deref().into_iter().collect(),
        Field::Description => product.description.as_deref().into_iter().collect(),
        Field::Synonyms => product.synonyms.iter().map(String::as_str).collect(),
        // Label fields are matchable as single-value text
        other => label(product, other).into_iter().collect(),
    }
}

fn label(product: &Product, field: Field) -> Option<&str> {
    match field {
        Field::Brand => product.brand.as_deref(),
        Field::Category => product.category.as_deref(),
        Field::Color => product.color.as_deref(),
        Field::Name => product.name.as_deref(),
        Field::Description => product.description.as_deref(),
        Field::Synonyms | Field::Price | Field::Rating => None,
    }
}

fn number(product: &Product, field: Field) -> Option<f64> {
    match field {
        Field::Price => product.price,
        Field::Rating => product.rating,
        _ => None,
    }
}
