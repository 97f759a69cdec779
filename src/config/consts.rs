// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://bayshop.com";
pub const LOCALE_PREFIX: &str = "/RU/";
pub const SESSION_COOKIE: &str = "Bay";
pub const USER_AGENT: &str = "bayshop_bar/0.2";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Listing pages, fetched in this order: overview first, then the status filters.
pub const PAGES: [&str; 7] = [
    "mf-packages/",
    "package/?status=processing",
    "package/?status=packed",
    "package/?status=ready-to-pickup",
    "package/?status=sent",
    "package/?status=customs-held",
    "package/?status=local-depo",
];

// Local files (relative to the plugin directory)
pub const SESSION_FILE: &str = ".bayshop_session_id";
pub const CACHE_FILE: &str = ".bayshop_cache.json";
pub const LOG_FILE: &str = ".bayshop_debug.log";

// Menu-bar protocol
pub const REFRESH_BUTTON: &str = "Обновить | href=swiftbar://refreshplugin?name=bayshop";
pub const NO_PARCELS_TEXT: &str = "Нет посылок";
pub const NO_SESSION_TEXT: &str = "Нет ID сессии в файле";
pub const BAD_SESSION_TEXT: &str = "Некорректный ID сессии в файле";
// "Платформа <os> не поддерживается"
pub const PLATFORM_TEXT: &str = "Платформа";
pub const UNSUPPORTED_TEXT: &str = "не поддерживается";

// Palette
pub const ERROR_COLOR: &str = "#ff0000";
pub const NEUTRAL_DARK: &str = "#eeeeee";
pub const NEUTRAL_LIGHT: &str = "#333333";
pub const DARK_APPEARANCE: &str = "Dark";

// Icon
pub const ICON_SIZE: u32 = 18;
