use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::flatten::{
    ConsoleObserver, RenameSummary, SilentObserver, TreeWalker, WalkError, WalkObserver,
    configure_console_colors,
};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<RenameSummary, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let summary = if app_config.show_progress {
            configure_console_colors();
            Self::flatten(&app_config, ConsoleObserver::stdout())?
        } else {
            Self::flatten(&app_config, SilentObserver)?
        };
        info!("Flattened {}: {}", app_config.root.display(), summary);

        Ok(summary)
    }

    fn flatten(
        app_config: &RuntimeConfig,
        observer: impl WalkObserver,
    ) -> Result<RenameSummary, ApplicationError> {
        TreeWalker::new(
            &app_config.root,
            app_config.marker,
            app_config.collision_policy,
            observer,
        )
        .context(FlattenSnafu)?
        .walk()
        .context(FlattenSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while flattening the tree"))]
    FlattenError { source: WalkError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data::CollisionPolicy;
    use std::fs;
    use tempfile::TempDir;

    fn config(root: std::path::PathBuf) -> RuntimeConfig {
        RuntimeConfig {
            root,
            marker: '+',
            collision_policy: CollisionPolicy::Fail,
            show_progress: false,
        }
    }

    #[test]
    fn test_run_flattens_tree() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().join("presets");
        fs::create_dir_all(root.join("accommodation")).expect("Failed to create directories");
        fs::write(root.join("accommodation").join("basic_hut.svg"), "<svg/>")
            .expect("Failed to write file");

        let summary = Application::run(config(root.clone())).expect("Run failed");

        assert_eq!(summary.files_renamed, 1);
        assert!(root.join("presets+accommodation+basic_hut.svg").is_file());
        assert!(root.join("accommodation").is_dir());
    }

    #[test]
    fn test_run_reports_missing_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().join("presets");

        let result = Application::run(config(root));

        match result {
            Err(ApplicationError::FlattenError {
                source: WalkError::RootMissing { .. },
            }) => {}
            other => panic!("Expected RootMissing, got {:?}", other),
        }
    }
}
