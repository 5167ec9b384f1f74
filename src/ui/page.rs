use serde::{Deserialize, Serialize};

/// Top-level storefront pages, in tab order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Catalog,
    Cart,
    Profile,
    Admin,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Catalog,
        Page::Cart,
        Page::Profile,
        Page::Admin,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Catalog => "Catalog",
            Page::Cart => "Cart",
            Page::Profile => "Profile",
            Page::Admin => "Admin",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Page for a 1-based digit key.
    pub fn from_digit(digit: u32) -> Option<Self> {
        let idx = (digit as usize).checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Pages that show the live item list and fetch it when entered.
    pub fn shows_items(self) -> bool {
        matches!(self, Page::Catalog | Page::Admin)
    }
}
