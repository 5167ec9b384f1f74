//! Raw form input for the admin create/edit dialog.

use thiserror::Error;

use super::item::{CatalogItem, ItemDraft, Rarity, PLACEHOLDER_IMAGE};

/// Malformed user input caught before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Price must be a whole number, got '{0}'")]
    InvalidPrice(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Weapon,
    Rarity,
    Price,
    ImageUrl,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Weapon,
        FormField::Rarity,
        FormField::Price,
        FormField::ImageUrl,
    ];

    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Weapon => "Weapon",
            FormField::Rarity => "Rarity",
            FormField::Price => "Price (₽)",
            FormField::ImageUrl => "Image URL",
        }
    }
}

/// Form contents as typed. Price stays text until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub weapon: String,
    pub rarity: Rarity,
    pub price: String,
    pub image_url: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            weapon: String::new(),
            rarity: Rarity::Common,
            price: String::new(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl ItemForm {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            weapon: item.weapon.clone(),
            rarity: item.rarity,
            price: item.price.to_string(),
            image_url: item.image_url.clone(),
        }
    }

    /// Text buffer behind a field. `None` for the rarity selector.
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Weapon => Some(&mut self.weapon),
            FormField::Price => Some(&mut self.price),
            FormField::ImageUrl => Some(&mut self.image_url),
            FormField::Rarity => None,
        }
    }

    pub fn display_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Weapon => &self.weapon,
            FormField::Rarity => self.rarity.label(),
            FormField::Price => &self.price,
            FormField::ImageUrl => &self.image_url,
        }
    }

    /// Required-field check and integer price parse. Negative prices pass.
    pub fn to_draft(&self) -> Result<ItemDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        let weapon = self.weapon.trim();
        if weapon.is_empty() {
            return Err(ValidationError::MissingField("weapon"));
        }
        let price_text = self.price.trim();
        if price_text.is_empty() {
            return Err(ValidationError::MissingField("price"));
        }
        let price = price_text
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidPrice(price_text.to_string()))?;
        let image_url = match self.image_url.trim() {
            "" => PLACEHOLDER_IMAGE.to_string(),
            url => url.to_string(),
        };

        Ok(ItemDraft {
            name: name.to_string(),
            weapon: weapon.to_string(),
            rarity: self.rarity,
            price,
            image_url,
        })
    }
}
