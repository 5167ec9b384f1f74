//! Catalog domain: item records, list filtering and the edit form.

mod filter;
mod form;
mod item;

pub use filter::{ListFilter, RarityFilter, SortOrder};
pub use form::{FormField, ItemForm, ValidationError};
pub use item::{format_price, CatalogItem, ItemDraft, ItemId, Rarity, PLACEHOLDER_IMAGE};
