// src/core/notify.rs
// Desktop notifications through the host OS's own tooling.

use std::error::Error;
use std::process::Command;

use super::sanitize::applescript_quote;

pub trait Notifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), Box<dyn Error>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
}

impl Platform {
    /// Map `std::env::consts::OS` onto a supported platform.
    pub fn from_os(os: &str) -> Option<Platform> {
        match os {
            "macos" => Some(Platform::MacOs),
            "linux" => Some(Platform::Linux),
            _ => None,
        }
    }

    pub fn current() -> Option<Platform> {
        Self::from_os(std::env::consts::OS)
    }
}

pub struct PlatformNotifier {
    platform: Platform,
}

impl PlatformNotifier {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// The notifier invocation, not yet spawned.
    pub fn command(&self, title: &str, message: &str) -> Command {
        match self.platform {
            Platform::MacOs => {
                let script = format!(
                    "display notification \"{}\" with title \"{}\"",
                    applescript_quote(message),
                    applescript_quote(title),
                );
                let mut cmd = Command::new("osascript");
                cmd.arg("-e").arg(script);
                cmd
            }
            Platform::Linux => {
                let mut cmd = Command::new("notify-send");
                cmd.arg(title).arg(message);
                cmd
            }
        }
    }
}

impl Notifier for PlatformNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), Box<dyn Error>> {
        let status = self.command(title, message).status()?;
        if !status.success() {
            return Err(format!("{:?} notifier exited with {status}", self.platform).into());
        }
        Ok(())
    }
}
