// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Meilisearch adapter for the index client contract.
//!
//! The filter tree splits into two halves of a Meilisearch request: text
//! match clauses become the search query string, everything else becomes a
//! filter expression. Shapes Meilisearch cannot express (a text match in
//! filter position, an OR mixing text and structured clauses) are rejected
//! with `SearchError::QueryRejected`.

use anyhow::Result;
use async_trait::async_trait;
use meilisearch_sdk::client::Client;
use meilisearch_sdk::errors::Error as MeiliError;

use crate::error::SearchError;
use crate::models::filter::Filter;
use crate::models::product::Product;
use crate::models::search::PageSpec;
use crate::services::index::{IndexClient, IndexPage};

/// Meilisearch client wrapper executing composed filters against the
/// products index.
pub struct MeiliIndex {
    client: Client,
    index_name: String,
}

impl MeiliIndex {
    /// Create a new Meilisearch-backed index client.
    pub fn new(host: &str, index_name: String) -> Result<Self> {
        // Construct the full URL if only host:port is provided
        let url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };
        url::Url::parse(&url)?;

        let client = Client::new(&url, None::<String>)?;

        println!("Connected to Meilisearch at {}", url);

        Ok(Self { client, index_name })
    }

    /// Initialize the products index with searchable and filterable
    /// attributes matching the filter model.
    pub async fn init_index(&self) -> Result<()> {
        let index = self.client.index(&self.index_name);

        let searchable_attrs = vec!["name", "description", "synonyms"];
        let _ = index.set_searchable_attributes(searchable_attrs).await;

        let filterable_attrs = vec!["brand", "category", "color", "price", "rating"];
        let _ = index.set_filterable_attributes(filterable_attrs).await;

        println!("Initialized Meilisearch index: {}", self.index_name);

        Ok(())
    }
}

#[async_trait]
impl IndexClient for MeiliIndex {
    async fn execute(&self, filter: &Filter, page: PageSpec) -> Result<IndexPage, SearchError> {
        let (query, filter_expr) = translate(filter)?;

        let index = self.client.index(&self.index_name);
        let mut search = index.search();
        search
            .with_query(&query)
            .with_limit(page.limit)
            .with_offset(page.offset);
        if let Some(expr) = filter_expr.as_deref() {
            search.with_filter(expr);
        }

        let results = search
            .execute::<Product>()
            .await
            .map_err(map_sdk_error)?;

        let total = results.estimated_total_hits.unwrap_or(0) as u64;
        let products = results.hits.into_iter().map(|hit| hit.result).collect();

        Ok(IndexPage { total, products })
    }
}

/// API-level errors mean the index rejected what we sent (a contract
/// mismatch with the query builder); everything else is a reachability
/// problem and therefore retryable.
fn map_sdk_error(error: MeiliError) -> SearchError {
    match error {
        MeiliError::Meilisearch(api_error) => SearchError::QueryRejected(api_error.to_string()),
        other => SearchError::IndexUnavailable(other.to_string()),
    }
}

/// Split a filter tree into a search query string and an optional
/// Meilisearch filter expression.
fn translate(filter: &Filter) -> Result<(String, Option<String>), SearchError> {
    let mut terms: Vec<String> = Vec::new();
    let mut clauses: Vec<String> = Vec::new();

    let children: &[Filter] = match filter {
        Filter::And(children) => children,
        single => std::slice::from_ref(single),
    };

    for child in children {
        if let Some(term_group) = text_terms(child) {
            for term in term_group {
                if !terms.contains(&term) {
                    terms.push(term);
                }
            }
        } else if let Some(clause) = filter_expr(child)? {
            clauses.push(clause);
        }
    }

    let query = terms.join(" ");
    let expr = if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" AND "))
    };
    Ok((query, expr))
}

/// Extract the search terms if this node is a pure text clause: a single
/// `MatchText`, or an `Or` whose children are all `MatchText`.
fn text_terms(filter: &Filter) -> Option<Vec<String>> {
    match filter {
        Filter::MatchText { term, .. } => Some(vec![term.clone()]),
        Filter::Or(children) if !children.is_empty() => {
            let mut terms = Vec::new();
            for child in children {
                match child {
                    Filter::MatchText { term, .. } => terms.push(term.clone()),
                    _ => return None,
                }
            }
            Some(terms)
        }
        _ => None,
    }
}

/// Render a structured clause as a Meilisearch filter expression.
/// `Ok(None)` means the clause imposes no constraint.
fn filter_expr(filter: &Filter) -> Result<Option<String>, SearchError> {
    match filter {
        Filter::MatchText { field, .. } => Err(SearchError::QueryRejected(format!(
            "text match on '{}' cannot appear in filter position",
            field.as_str()
        ))),
        Filter::Equals { field, value } => Ok(Some(format!(
            "{} = \"{}\"",
            field.as_str(),
            escape(value)
        ))),
        Filter::InSet { field, values } => {
            if values.is_empty() {
                return Ok(None);
            }
            let rendered: Vec<String> = values
                .iter()
                .map(|value| format!("\"{}\"", escape(value)))
                .collect();
            Ok(Some(format!(
                "{} IN [{}]",
                field.as_str(),
                rendered.join(", ")
            )))
        }
        Filter::Range { field, min, max } => {
            let mut bounds = Vec::new();
            if let Some(min) = min {
                bounds.push(format!("{} >= {}", field.as_str(), min));
            }
            if let Some(max) = max {
                bounds.push(format!("{} <= {}", field.as_str(), max));
            }
            match bounds.len() {
                0 => Ok(None),
                1 => Ok(Some(bounds.remove(0))),
                _ => Ok(Some(format!("({})", bounds.join(" AND ")))),
            }
        }
        Filter::And(children) => {
            let mut clauses = Vec::new();
            for child in children {
                if let Some(clause) = filter_expr(child)? {
                    clauses.push(clause);
                }
            }
            match clauses.len() {
                0 => Ok(None),
                1 => Ok(Some(clauses.remove(0))),
                _ => Ok(Some(format!("({})", clauses.join(" AND ")))),
            }
        }
        Filter::Or(children) => {
            if children.is_empty() {
                return Err(SearchError::QueryRejected(
                    "empty OR matches nothing and cannot be expressed".to_string(),
                ));
            }
            let mut clauses = Vec::new();
            for child in children {
                match filter_expr(child)? {
                    // An unconstrained branch makes the whole OR unconstrained
                    None => return Ok(None),
                    Some(clause) => clauses.push(clause),
                }
            }
            if clauses.len() == 1 {
                Ok(Some(clauses.remove(0)))
            } else {
                Ok(Some(format!("({})", clauses.join(" OR "))))
            }
        }
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
