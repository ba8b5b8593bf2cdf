use std::path::PathBuf;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Load the board config off the async runtime; defaults when the root
    /// has not been initialized.
    pub async fn config(&self) -> Result<board_core::config::Config, crate::error::AppError> {
        let root = self.root.clone();
        let config = tokio::task::spawn_blocking(move || {
            board_core::config::Config::load_or_default(&root)
        })
        .await
        .map_err(|e| crate::error::AppError(anyhow::anyhow!("task join error: {e}")))??;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_stores_root() {
        let state = AppState::new(PathBuf::from("/tmp/test"));
        assert_eq!(state.root, PathBuf::from("/tmp/test"));
    }

    #[tokio::test]
    async fn config_defaults_without_init() {
        let dir = tempfile::TempDir::new().unwrap();
        let state = AppState::new(dir.path().to_path_buf());
        let config = state.config().await.unwrap();
        assert_eq!(config.project.name, "Project Gio");
    }
}
