// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Translation of caller search parameters into a filter tree.

use crate::models::filter::{Field, Filter};
use crate::models::search::SearchParams;

/// Build the full filter for faceted/enhanced search.
///
/// Each present parameter contributes one clause; clauses are ANDed in a
/// fixed order (keyword, category, brands, colors, price, rating) so the
/// resulting tree is deterministic. With no parameters present this
/// returns the identity filter.
pub fn build_filter(params: &SearchParams) -> Filter {
    let mut filter = Filter::match_all();

    if let Some(keyword) = params.keyword.as_deref() {
        if !keyword.is_empty() {
            filter = filter.and(
                Filter::match_text(Field::Name, keyword)
                    .or(Filter::match_text(Field::Description, keyword))
                    .or(Filter::match_text(Field::Synonyms, keyword)),
            );
        }
    }
    if let Some(category) = params.category.as_deref() {
        if !category.is_empty() {
            filter = filter.and(Filter::equals(Field::Category, category));
        }
    }
    if !params.brands.is_empty() {
        filter = filter.and(Filter::in_set(Field::Brand, params.brands.clone()));
    }
    if !params.colors.is_empty() {
        filter = filter.and(Filter::in_set(Field::Color, params.colors.clone()));
    }
    if params.price_min.is_some() || params.price_max.is_some() {
        filter = filter.and(Filter::range(
            Field::Price,
            params.price_min,
            params.price_max,
        ));
    }
    if params.rating_min.is_some() || params.rating_max.is_some() {
        filter = filter.and(Filter::range(
            Field::Rating,
            params.rating_min,
            params.rating_max,
        ));
    }

    filter
}

/// Build the keyword filter for the simple and synonym endpoints.
///
/// Matches name and synonyms only: unlike `build_filter`, the description
/// field is not searched. The asymmetry is part of the endpoint contract.
pub fn keyword_filter(keyword: &str) -> Filter {
    Filter::match_text(Field::Name, keyword).or(Filter::match_text(Field::Synonyms, keyword))
}
