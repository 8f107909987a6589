// discovery/src/sort.rs
//! Optional ordering of a result, applied after filtering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

use crate::date::parse_created_at;
use crate::models::ContentItem;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortMode {
    /// Collection order, untouched
    #[default]
    Fixture,
    Newest,
    Oldest,
}

impl SortMode {
    /// Stable sort by publication time. Items without a usable date go last
    /// in either direction.
    pub fn apply(self, items: &mut [&ContentItem]) {
        let newest_first = match self {
            SortMode::Fixture => return,
            SortMode::Newest => true,
            SortMode::Oldest => false,
        };

        let mut keyed: Vec<_> = items
            .iter()
            .map(|item| (item.created_at.as_deref().and_then(parse_created_at), *item))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) if newest_first => b.cmp(a),
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        for (slot, (_, item)) in items.iter_mut().zip(keyed) {
            *slot = item;
        }
    }
}
