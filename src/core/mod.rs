// src/core/mod.rs
// Thin seams around the outside world: network, icon rendering, desktop notifications.

pub mod icon;
pub mod net;
pub mod notify;
pub mod sanitize;

pub use icon::{IconPainter, TemplatePainter};
pub use net::{HttpFetcher, PageFetcher};
pub use notify::{Notifier, Platform, PlatformNotifier};
