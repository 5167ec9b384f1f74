pub mod app;
pub mod browse;
pub mod confirm;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notify;
pub mod page;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;
pub mod worker;

pub use page::Page;
pub use runtime::run;
