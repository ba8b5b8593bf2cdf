pub mod config;
pub mod dashboard;
pub mod init;
pub mod list;
pub mod show;
pub mod ui;

use anyhow::Context;
use board_core::config::Config;
use board_core::stats::PriorityFilter;
use board_core::types::Locale;
use std::path::Path;

/// The effective view selection: config defaults overridden by flags.
pub struct Selection {
    pub config: Config,
    pub filter: PriorityFilter,
    pub locale: Locale,
}

impl Selection {
    pub fn resolve(
        root: &Path,
        priority: Option<PriorityFilter>,
        locale: Option<Locale>,
    ) -> anyhow::Result<Self> {
        let config = Config::load_or_default(root).context("failed to load config")?;
        let filter = priority.unwrap_or(config.display.default_priority);
        let locale = locale.unwrap_or(config.display.locale);
        tracing::debug!(%filter, %locale, "resolved view selection");
        Ok(Self {
            config,
            filter,
            locale,
        })
    }

    /// Header line shared by both views.
    pub fn print_header(&self) {
        let text = board_core::labels::Text::for_locale(self.locale);
        println!("{}", text.title);
        println!(
            "{}: {} | {}: {}",
            text.project, self.config.project.name, text.updated, self.config.project.updated
        );
        let choices: Vec<String> = PriorityFilter::choices()
            .iter()
            .map(|&f| {
                let label = text.filter_label(f);
                if f == self.filter {
                    format!("[{label}]")
                } else {
                    label.to_string()
                }
            })
            .collect();
        println!("{}: {}", text.filter, choices.join("  "));
    }
}
