// src/cli.rs
use std::{error::Error, io::Write, path::PathBuf};

use clap::Parser;

use crate::config::consts::BASE_URL;
use crate::config::options::{PluginOptions, Theme, Variant};

/// Arguments are optional: the menu-bar host runs the plugin bare and passes
/// settings through the environment.
#[derive(Debug, Parser)]
#[command(name = "bayshop", version, about = "Checks your parcels on bayshop.com")]
pub struct Args {
    /// File holding the `Bay` session cookie value
    #[arg(long, env = "BAYSHOP_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// JSON file with the last-seen status per parcel (notify variant)
    #[arg(long, env = "BAYSHOP_CACHE_FILE")]
    pub cache_file: Option<PathBuf>,

    /// Debug log file
    #[arg(long, env = "BAYSHOP_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[arg(long, env = "BAYSHOP_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Menu-bar appearance; `Dark` switches the neutral color
    #[arg(long, env = "OS_APPEARANCE", default_value = "Light")]
    pub appearance: String,
}

impl Args {
    /// Resolve into options. Unset paths default to the plugin's own directory.
    pub fn into_options(self, variant: Variant) -> Result<PluginOptions, Box<dyn Error>> {
        let mut options = PluginOptions::in_dir(plugin_dir()?, variant);
        options.base_url = self.base_url;
        options.theme = Theme::from_appearance(&self.appearance);
        if let Some(p) = self.session_file {
            options.session_file = p;
        }
        if let Some(p) = self.cache_file {
            options.cache_file = p;
        }
        if let Some(p) = self.log_file {
            options.log_file = p;
        }
        Ok(options)
    }
}

/// Directory containing the running executable.
fn plugin_dir() -> Result<PathBuf, Box<dyn Error>> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| format!("No parent directory for {}", exe.display()).into())
}

/// Entry point shared by both binaries: parse, run, print the protocol text.
pub fn run(variant: Variant) -> Result<(), Box<dyn Error>> {
    let options = Args::parse().into_options(variant)?;
    crate::log::init(&options.log_file);
    logf!("Run started ({variant:?})");

    let report = crate::runner::run(&options)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
