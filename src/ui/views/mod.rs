//! Page bodies. The catalog and admin pages render live store data; the
//! rest show static content.

mod cart;
mod home;
mod item_table;
mod profile;
mod showcase;

pub use cart::render_cart;
pub use home::render_home;
pub use item_table::render_item_list;
pub use profile::{render_profile, ProfileTab};
