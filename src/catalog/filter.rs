//! Client-side search, rarity filter and sort over the fetched item list.
//!
//! Recomputed on every render; the list is tens of items, so there is no index.

use super::item::{CatalogItem, Rarity};

/// Rarity selector: everything, or a single tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RarityFilter {
    #[default]
    All,
    Only(Rarity),
}

impl RarityFilter {
    pub fn matches(self, rarity: Rarity) -> bool {
        match self {
            RarityFilter::All => true,
            RarityFilter::Only(wanted) => wanted == rarity,
        }
    }

    /// All → legendary → rare → uncommon → common → All.
    pub fn next(self) -> Self {
        let order = Rarity::ALL;
        match self {
            RarityFilter::All => RarityFilter::Only(order[0]),
            RarityFilter::Only(current) => {
                let pos = order.iter().position(|r| *r == current).unwrap_or(0);
                order
                    .get(pos + 1)
                    .map(|r| RarityFilter::Only(*r))
                    .unwrap_or(RarityFilter::All)
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RarityFilter::All => "All rarities",
            RarityFilter::Only(rarity) => rarity.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Server order. There is no popularity metric to sort by.
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            SortOrder::Popular => SortOrder::PriceAsc,
            SortOrder::PriceAsc => SortOrder::PriceDesc,
            SortOrder::PriceDesc => SortOrder::Popular,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Popular => "Popular",
            SortOrder::PriceAsc => "Price: low to high",
            SortOrder::PriceDesc => "Price: high to low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListFilter {
    pub query: String,
    pub rarity: RarityFilter,
    pub sort: SortOrder,
}

impl ListFilter {
    /// Case-insensitive substring match on name or weapon.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        if !self.rarity.matches(item.rarity) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        item.name.to_lowercase().contains(&needle) || item.weapon.to_lowercase().contains(&needle)
    }

    pub fn apply(&self, items: &[CatalogItem]) -> Vec<CatalogItem> {
        let mut visible: Vec<CatalogItem> =
            items.iter().filter(|item| self.matches(item)).cloned().collect();
        match self.sort {
            SortOrder::Popular => {}
            SortOrder::PriceAsc => visible.sort_by_key(|item| item.price),
            SortOrder::PriceDesc => visible.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        visible
    }
}
