use ratatui::style::Color;

use crate::catalog::Rarity;

pub const BRAND_ORANGE: Color = Color::Rgb(0xce, 0x42, 0x2b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub const RARITY_LEGENDARY: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const RARITY_RARE: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const RARITY_UNCOMMON: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const RARITY_COMMON: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Legendary => RARITY_LEGENDARY,
        Rarity::Rare => RARITY_RARE,
        Rarity::Uncommon => RARITY_UNCOMMON,
        Rarity::Common => RARITY_COMMON,
    }
}
