use clap::ValueEnum;

/// What to do when a flattened name is already taken in the root directory.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Stop the run with a naming-collision error.
    #[default]
    Fail,
    /// Let the rename replace the existing file.
    Overwrite,
}

impl CollisionPolicy {
    pub fn allows_overwrite(&self) -> bool {
        matches!(self, CollisionPolicy::Overwrite)
    }
}
