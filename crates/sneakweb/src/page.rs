//! Game page loading
//!
//! The page is read once at startup and served from memory afterwards.

use std::fs;
use std::path::Path;

use anyhow::Context;
use axum::body::Bytes;
use sneakcore::config::web;

/// Page compiled into the binary, used when no file is found on disk
pub const BUNDLED_PAGE: &str = include_str!("../templates/game.html");

#[derive(Debug, Clone)]
pub struct GamePage {
    html: Bytes,
}

impl GamePage {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: Bytes::from(html.into()),
        }
    }

    pub fn bundled() -> Self {
        Self {
            html: Bytes::from_static(BUNDLED_PAGE.as_bytes()),
        }
    }

    /// Loads the page.
    ///
    /// An explicitly configured path must be readable. Without one,
    /// `templates/game.html` under the working directory is used when present,
    /// otherwise the bundled page.
    pub fn load(configured: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = configured {
            let html = fs::read_to_string(path)
                .with_context(|| format!("failed to read game page {}", path.display()))?;
            log::info!("Serving game page from {}", path.display());
            return Ok(Self::from_html(html));
        }

        let default_path = Path::new(web::GAME_PAGE_PATH);
        if default_path.is_file() {
            let html = fs::read_to_string(default_path)
                .with_context(|| format!("failed to read game page {}", default_path.display()))?;
            log::info!("Serving game page from {}", default_path.display());
            return Ok(Self::from_html(html));
        }

        log::info!("Serving bundled game page");
        Ok(Self::bundled())
    }

    pub fn html(&self) -> Bytes {
        self.html.clone()
    }
}
