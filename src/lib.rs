// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod parcel;
pub mod render;
pub mod runner;
pub mod scrape;
pub mod status;
pub mod store;
pub mod tracker;
