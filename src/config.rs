//! App Configuration
//!
//! Startup settings: logging and the sample cards the board opens with.
//! Read from the page's `<script type="application/json" id="app-config">`
//! block; missing fields fall back to the defaults below.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::models::ColumnId;

/// Id of the JSON config block in `index.html`
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Cards seeded into one column on load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedColumn {
    pub column: ColumnId,
    pub titles: Vec<String>,
}

impl SeedColumn {
    pub fn new(column: ColumnId, titles: &[&str]) -> Self {
        Self {
            column,
            titles: titles.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
    /// Lines kept by the console logger's buffer
    pub log_capacity: usize,
    pub seed: Vec<SeedColumn>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_capacity: console_logger::DEFAULT_CAPACITY,
            seed: vec![
                SeedColumn::new(
                    ColumnId::Todo,
                    &["Create initial project plan", "Design landing page"],
                ),
                SeedColumn::new(ColumnId::InProgress, &["Implement authentication"]),
                SeedColumn::new(ColumnId::Done, &["Organize repository"]),
            ],
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Config embedded in the page. Defaults when the block is absent or blank.
    pub fn load() -> serde_json::Result<Self> {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(text) if !text.trim().is_empty() => Self::from_json(&text),
            _ => Ok(Self::default()),
        }
    }

    /// Parsed log level; unrecognised values fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
