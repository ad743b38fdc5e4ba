// src/domain/aggregate.rs

use crate::domain::listing::Listing;
use std::collections::{BTreeMap, HashMap};

/// Mean listing price for one `neighbourhood_group`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoroughAggregate {
    pub group_name: String,
    pub mean_price: f64,
}

/// Groups listings by exact `neighbourhood_group` and averages the prices that are present.
///
/// Listings without a group or without a price are skipped, so a group whose
/// listings all lack a price never shows up. Output is sorted by group name.
pub fn average_price_by_group(listings: &[Listing]) -> Vec<BoroughAggregate> {
    // Running mean per group; a plain sum overflows to `inf` on huge prices.
    let mut means: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for listing in listings {
        let (Some(group), Some(price)) = (listing.neighbourhood_group.as_deref(), listing.price)
        else {
            continue;
        };

        let (mean, count) = means.entry(group).or_insert((0.0, 0));
        *count += 1;
        *mean += (price - *mean) / *count as f64;
    }

    means
        .into_iter()
        .map(|(group, (mean, _))| BoroughAggregate {
            group_name: group.to_string(),
            mean_price: mean,
        })
        .collect()
}

/// Lookup table from group name to mean price, used by the boundary merge.
pub fn average_price_index(aggregates: &[BoroughAggregate]) -> HashMap<&str, f64> {
    aggregates
        .iter()
        .map(|a| (a.group_name.as_str(), a.mean_price))
        .collect()
}
