//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use skinmarket::catalog::{CatalogItem, Rarity, PLACEHOLDER_IMAGE};
use skinmarket::config::Config;
use skinmarket::ui::app::App;
use skinmarket::ui::input::handle_key;
use skinmarket::ui::worker::UiCommand;
use skinmarket::ui::Page;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn item(id: i64, name: &str, weapon: &str, rarity: Rarity, price: i64) -> CatalogItem {
    CatalogItem {
        id,
        name: name.to_string(),
        weapon: weapon.to_string(),
        rarity,
        price,
        image_url: PLACEHOLDER_IMAGE.to_string(),
    }
}

/// The four skins the storefront ships with.
pub fn sample_items() -> Vec<CatalogItem> {
    vec![
        item(1, "Огненный дракон", "AK-47", Rarity::Legendary, 12_500),
        item(2, "Пустынный камуфляж", "Болтовка", Rarity::Rare, 3_200),
        item(3, "Металлическая броня", "Кофейная броня", Rarity::Uncommon, 850),
        item(4, "Ржавый меч", "Меч", Rarity::Common, 450),
    ]
}

// -- App helpers --------------------------------------------------------------

/// App starting on `page`, wired to a command channel the test can drain.
pub fn make_app(page: Page) -> (App, mpsc::Receiver<UiCommand>) {
    let mut config = Config::default();
    config.ui.start_page = page;
    let mut app = App::new(&config);
    let (tx, rx) = mpsc::channel(64);
    app.attach_store(tx);
    (app, rx)
}

/// Everything the app has sent so far.
pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn press_ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}
