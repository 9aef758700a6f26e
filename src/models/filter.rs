// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Predicate tree describing search constraints, independent of any
//! concrete index backend.

use serde::{Deserialize, Serialize};

/// Filterable product field.
///
/// `as_str()` yields the attribute name used by the index mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Name,
    Description,
    Synonyms,
    Brand,
    Category,
    Color,
    Price,
    Rating,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Synonyms => "synonyms",
            Field::Brand => "brand",
            Field::Category => "category",
            Field::Color => "color",
            Field::Price => "price",
            Field::Rating => "rating",
        }
    }
}

/// Search predicate over product fields.
///
/// A filter is immutable once built; `and`/`or` consume their inputs and
/// return a new tree. `And(vec![])` is the identity element and matches
/// every document. An `InSet` with an empty value list is "no constraint",
/// never "match nothing". Adapters must honor this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Fuzzy/tokenized containment test against a text field
    MatchText { field: Field, term: String },
    /// Exact label equality
    Equals { field: Field, value: String },
    /// Label membership in a value set
    InSet { field: Field, values: Vec<String> },
    /// Inclusive numeric range; either bound may be absent
    Range {
        field: Field,
        min: Option<f64>,
        max: Option<f64>,
    },
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    /// The identity filter: matches all documents.
    pub fn match_all() -> Self {
        Filter::And(Vec::new())
    }

    pub fn match_text(field: Field, term: impl Into<String>) -> Self {
        Filter::MatchText {
            field,
            term: term.into(),
        }
    }

    pub fn equals(field: Field, value: impl Into<String>) -> Self {
        Filter::Equals {
            field,
            value: value.into(),
        }
    }

    pub fn in_set(field: Field, values: Vec<String>) -> Self {
        Filter::InSet { field, values }
    }

    pub fn range(field: Field, min: Option<f64>, max: Option<f64>) -> Self {
        Filter::Range { field, min, max }
    }

    /// Conjoin with another filter, flattening into an existing `And` spine.
    pub fn and(self, other: Filter) -> Self {
        match self {
            Filter::And(mut children) => {
                children.push(other);
                Filter::And(children)
            }
            first => Filter::And(vec![first, other]),
        }
    }

    /// Disjoin with another filter, flattening into an existing `Or` spine.
    pub fn or(self, other: Filter) -> Self {
        match self {
            Filter::Or(mut children) => {
                children.push(other);
                Filter::Or(children)
            }
            first => Filter::Or(vec![first, other]),
        }
    }

    /// True for the identity filter (an empty conjunction).
    pub fn is_match_all(&self) -> bool {
        matches!(self, Filter::And(children) if children.is_empty())
    }
}
