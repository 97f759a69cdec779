// src/bin/bayshop.rs
use bayshop_bar::{cli, config::options::Variant};
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(Variant::Plain).map_err(|e| eyre!("{e}"))
}
