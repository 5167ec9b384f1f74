//! Catalog records as exchanged with the item store endpoint.

use serde::{Deserialize, Serialize};

/// Image reference used when an item has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Server-assigned identifier of a catalog item.
pub type ItemId = i64;

/// Rarity tier of a skin.
///
/// Closed set: the wire format accepts exactly these four lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// Display order used by selectors and filters.
    pub const ALL: [Rarity; 4] = [
        Rarity::Legendary,
        Rarity::Rare,
        Rarity::Uncommon,
        Rarity::Common,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Next value in form-selector order (common → uncommon → rare → legendary → common).
    pub fn next(self) -> Self {
        match self {
            Rarity::Common => Rarity::Uncommon,
            Rarity::Uncommon => Rarity::Rare,
            Rarity::Rare => Rarity::Legendary,
            Rarity::Legendary => Rarity::Common,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Rarity::Common => Rarity::Legendary,
            Rarity::Uncommon => Rarity::Common,
            Rarity::Rare => Rarity::Uncommon,
            Rarity::Legendary => Rarity::Rare,
        }
    }
}

/// A sellable skin as known to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    /// Weapon or category label.
    pub weapon: String,
    pub rarity: Rarity,
    pub price: i64,
    #[serde(default = "default_image_url")]
    pub image_url: String,
}

/// Create payload. The server assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub weapon: String,
    pub rarity: Rarity,
    pub price: i64,
    pub image_url: String,
}

impl ItemDraft {
    /// Full record for an update of an existing item.
    pub fn with_id(self, id: ItemId) -> CatalogItem {
        CatalogItem {
            id,
            name: self.name,
            weapon: self.weapon,
            rarity: self.rarity,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

fn default_image_url() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// Render a price as `₽12,500`.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if price < 0 {
        format!("-₽{grouped}")
    } else {
        format!("₽{grouped}")
    }
}
