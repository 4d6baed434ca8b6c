use crate::catalog::DEFAULT_PAGE_SIZE;
use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
pub const MAX_PAGE_SIZE: usize = 50;

/// Shell settings, stored as JSON. The catalog itself is never saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Books shown per page in the View menu
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Colorize messages
    #[serde(default = "default_true")]
    pub color: bool,

    /// Clear the terminal between menu screens
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Start every session with the three demo books
    #[serde(default)]
    pub seed_demo_books: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            color: true,
            clear_screen: true,
            seed_demo_books: false,
        }
    }
}

impl ShelfConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut config: ShelfConfig = serde_json::from_str(&content)?;
        config.page_size = clamp_page_size(config.page_size);
        Ok(config)
    }

    /// Save config to the given file, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Parses and sets the page size (1 to [`MAX_PAGE_SIZE`])
    pub fn set_page_size(&mut self, value: &str) -> Result<()> {
        match value.trim().parse::<usize>() {
            Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => {
                self.page_size = size;
                Ok(())
            }
            _ => Err(ShelfError::Config(format!(
                "page size must be a number from 1 to {}, got '{}'",
                MAX_PAGE_SIZE,
                value.trim()
            ))),
        }
    }
}

fn clamp_page_size(size: usize) -> usize {
    size.clamp(1, MAX_PAGE_SIZE)
}
