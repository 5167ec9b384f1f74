//! Item store client: list/create/update/delete against the remote endpoint.

mod client;
mod error;

pub use client::ItemStoreClient;
pub use error::StoreError;
