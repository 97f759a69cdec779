// src/bin/bayshop_notify.rs
// Same listing as `bayshop`, plus a desktop notification whenever a parcel's status changes.
use bayshop_bar::{cli, config::options::Variant};
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(Variant::Notify).map_err(|e| eyre!("{e}"))
}
