use anyhow::Context;
use board_core::config::Config;
use board_core::{io, paths};
use std::path::Path;

pub fn run(root: &Path, name: Option<&str>) -> anyhow::Result<()> {
    let config = match name {
        Some(n) => Config::new(n),
        None => Config::default(),
    };
    let data = serde_yaml::to_string(&config).context("failed to serialize config")?;
    let path = paths::config_path(root);
    let written = io::write_if_missing(&path, data.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;

    if written {
        tracing::info!(path = %path.display(), "wrote default config");
        println!("Initialized board: {}", path.display());
    } else {
        println!("Already initialized: {}", path.display());
    }
    Ok(())
}
