// tests/common/mod.rs
//
// In-memory stand-ins for the network, icon, notifier and cache file.
//
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::error::Error;

use bayshop_bar::config::options::{PluginOptions, Variant};
use bayshop_bar::core::{IconPainter, Notifier, PageFetcher};
use bayshop_bar::store::{CacheStore, StatusCache};

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

pub fn options() -> PluginOptions {
    PluginOptions::in_dir("/tmp/bayshop-test", Variant::Notify)
}

/// Serves canned HTML per page path; unknown paths look like an empty listing.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Result<String, String>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn page(mut self, path: &str, html: impl Into<String>) -> Self {
        self.pages.insert(path.to_string(), Ok(html.into()));
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.pages.insert(path.to_string(), Err(format!("connection refused: {path}")));
        self
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch_page(&self, path: &str) -> Result<String, Box<dyn Error>> {
        self.calls.borrow_mut().push(path.to_string());
        match self.pages.get(path) {
            Some(Ok(html)) => Ok(html.clone()),
            Some(Err(e)) => Err(e.clone().into()),
            None => Ok(String::new()),
        }
    }
}

/// Icon stand-in that just echoes the color.
pub struct FakePainter;

impl IconPainter for FakePainter {
    fn paint(&self, color: &str) -> Result<String, Box<dyn Error>> {
        Ok(format!("ICON({color})"))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: RefCell<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), Box<dyn Error>> {
        self.sent.borrow_mut().push((title.to_string(), message.to_string()));
        Ok(())
    }
}

pub struct BrokenNotifier;

impl Notifier for BrokenNotifier {
    fn notify(&self, _title: &str, _message: &str) -> Result<(), Box<dyn Error>> {
        Err("notifier missing".into())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub cache: RefCell<StatusCache>,
    pub saves: Cell<usize>,
}

impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (id, status) in entries {
            store.cache.borrow_mut().insert(id.to_string(), status.to_string());
        }
        store
    }

    pub fn json(&self) -> String {
        serde_json::to_string(&*self.cache.borrow()).unwrap()
    }
}

impl CacheStore for MemoryStore {
    fn load(&self) -> Result<StatusCache, Box<dyn Error>> {
        Ok(self.cache.borrow().clone())
    }

    fn save(&self, cache: &StatusCache) -> Result<(), Box<dyn Error>> {
        *self.cache.borrow_mut() = cache.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
