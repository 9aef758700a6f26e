// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Facet aggregation over a candidate sample of matching documents.

use crate::models::product::Product;
use crate::models::search::Facets;

/// Compute category counts and numeric range buckets for a document set.
///
/// Pure function of its input: no I/O, nothing cached. Documents with an
/// absent value for a field are excluded from that field's facet; there
/// is no synthetic "unknown" bucket. A value outside the declared bucket
/// boundaries (negative price, rating above 5.0) lands in no bucket; the
/// document itself still counts toward the page and total.
pub fn compute_facets(products: &[Product]) -> Facets {
    let mut facets = Facets::default();

    for product in products {
        if let Some(brand) = &product.brand {
            *facets.brand.entry(brand.clone()).or_insert(0) += 1;
        }
        if let Some(color) = &product.color {
            *facets.color.entry(color.clone()).or_insert(0) += 1;
        }
        if let Some(category) = &product.category {
            *facets.category.entry(category.clone()).or_insert(0) += 1;
        }

        // Price buckets: lower-inclusive, upper-exclusive, last open-ended.
        // Negative prices are outside the declared [0, ∞) domain: no bucket.
        if let Some(price) = product.price.filter(|&price| price >= 0.0) {
            let ranges = &mut facets.price_ranges;
            if price < 200.0 {
                ranges.under_200 += 1;
            } else if price < 500.0 {
                ranges.from_200_to_499 += 1;
            } else if price < 1000.0 {
                ranges.from_500_to_999 += 1;
            } else if price < 2000.0 {
                ranges.from_1000_to_1999 += 1;
            } else {
                ranges.from_2000 += 1;
            }
        }

        // Rating bands: upper-inclusive, unlike the price buckets.
        // Ratings above 5.0 are outside the declared domain: no band.
        if let Some(rating) = product.rating.filter(|&rating| rating <= 5.0) {
            let ranges = &mut facets.rating_ranges;
            if rating <= 2.0 {
                ranges.up_to_2 += 1;
            } else if rating <= 3.0 {
                ranges.up_to_3 += 1;
            } else if rating <= 4.0 {
                ranges.up_to_4 += 1;
            } else {
                ranges.up_to_5 += 1;
            }
        }
    }

    facets
}
