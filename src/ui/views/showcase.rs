//! Static content for the display-only pages.

use crate::catalog::Rarity;

pub struct ShowcaseSkin {
    pub name: &'static str,
    pub weapon: &'static str,
    pub rarity: Rarity,
    pub price: i64,
}

pub struct Purchase {
    pub title: &'static str,
    pub date: &'static str,
    pub price: i64,
    pub status: &'static str,
}

pub struct FeatureCard {
    pub title: &'static str,
    pub text: &'static str,
}

pub const USERNAME: &str = "IronGamer2024";
pub const ACCOUNT_LINK: &str = "Linked with Steam";

pub const HERO_TITLE: &str = "RUST skin marketplace";
pub const HERO_TEXT: &str = "Buy and sell skins with automatic delivery through the Steam API";

pub const FEATURED: [ShowcaseSkin; 4] = [
    ShowcaseSkin {
        name: "Огненный дракон",
        weapon: "AK-47",
        rarity: Rarity::Legendary,
        price: 12_500,
    },
    ShowcaseSkin {
        name: "Пустынный камуфляж",
        weapon: "Болтовка",
        rarity: Rarity::Rare,
        price: 3_200,
    },
    ShowcaseSkin {
        name: "Металлическая броня",
        weapon: "Кофейная броня",
        rarity: Rarity::Uncommon,
        price: 850,
    },
    ShowcaseSkin {
        name: "Ржавый меч",
        weapon: "Меч",
        rarity: Rarity::Common,
        price: 450,
    },
];

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Safe trades",
        text: "Buyer and seller protection at every step",
    },
    FeatureCard {
        title: "Instant delivery",
        text: "Skins are sent automatically through the Steam API",
    },
    FeatureCard {
        title: "Best prices",
        text: "Competitive prices and regular promotions",
    },
];

/// Inventory entries have no price; it is shown only for listed skins.
pub const INVENTORY: [(&str, &str, Rarity); 8] = [
    ("Огненный дракон", "AK-47", Rarity::Legendary),
    ("Пустынный камуфляж", "Болтовка", Rarity::Rare),
    ("Металлическая броня", "Кофейная броня", Rarity::Uncommon),
    ("Ржавый меч", "Меч", Rarity::Common),
    ("Неоновый взрыв", "MP5", Rarity::Legendary),
    ("Волчья стая", "Дверь", Rarity::Rare),
    ("Боевой шрам", "Топор", Rarity::Uncommon),
    ("Простой камень", "Камень", Rarity::Common),
];

pub const PURCHASES: [Purchase; 2] = [
    Purchase {
        title: "Огненный дракон AK-47",
        date: "25 Oct 2025",
        price: 12_500,
        status: "Completed",
    },
    Purchase {
        title: "Пустынный камуфляж",
        date: "23 Oct 2025",
        price: 3_200,
        status: "Completed",
    },
];
