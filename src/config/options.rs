// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Which flavour of the plugin is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Render the listing only.
    Plain,
    /// Render, diff against the status cache and notify on changes.
    Notify,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// `OS_APPEARANCE` as set by the menu-bar host.
    pub fn from_appearance(value: &str) -> Self {
        if value == DARK_APPEARANCE {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Color used for the "no parcels" state and for error lines.
    pub fn neutral_color(self) -> &'static str {
        match self {
            Theme::Dark => NEUTRAL_DARK,
            Theme::Light => NEUTRAL_LIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginOptions {
    pub variant: Variant,
    pub base_url: String,
    pub session_file: PathBuf,
    pub cache_file: PathBuf,
    pub log_file: PathBuf,
    pub theme: Theme,
}

impl PluginOptions {
    /// Defaults with every local file placed in `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>, variant: Variant) -> Self {
        let dir = dir.into();
        Self {
            variant,
            base_url: s!(BASE_URL),
            session_file: dir.join(SESSION_FILE),
            cache_file: dir.join(CACHE_FILE),
            log_file: dir.join(LOG_FILE),
            theme: Theme::default(),
        }
    }

    /// Absolute page URL for one of the listing paths.
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url.trim_end_matches('/'), LOCALE_PREFIX, path)
    }

    /// Deep link for a parcel's relative `href`.
    pub fn link_url(&self, href: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), href)
    }
}
