use std::path::PathBuf;

use crate::{application::data::CollisionPolicy, cli::Cli};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub marker: char,
    pub collision_policy: CollisionPolicy,
    pub show_progress: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            marker: cli.marker,
            collision_policy: cli.on_collision,
            show_progress: !cli.quiet,
        }
    }
}
