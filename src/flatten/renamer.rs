use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use snafu::{ResultExt, Snafu, ensure};
use tracing::debug;

use crate::{
    application::data::CollisionPolicy,
    ext::PathDisplayExt,
    flatten::{DirectoryListing, WalkObserver, flat_name::compose_flat_name},
};

/// Moves files from anywhere below the root into the root itself, under
/// their flattened name.
#[derive(Debug, Clone)]
pub struct Renamer {
    root: PathBuf,
    prefix: OsString,
    marker: char,
    policy: CollisionPolicy,
}

impl Renamer {
    pub fn new(
        root: impl Into<PathBuf>,
        prefix: impl Into<OsString>,
        marker: char,
        policy: CollisionPolicy,
    ) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
            marker,
            policy,
        }
    }

    /// Joins a root-relative path onto the root without leaving a trailing
    /// separator for the root itself.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        if relative.as_os_str().is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }

    /// Where the file at `relative` ends up.
    pub fn flat_target(&self, relative: &Path) -> PathBuf {
        self.root
            .join(compose_flat_name(&self.prefix, relative, self.marker))
    }

    /// Renames a single file, returning its new path.
    pub fn rename_file(&self, relative: &Path) -> Result<PathBuf, RenameError> {
        let from = self.resolve(relative);
        let to = self.flat_target(relative);

        ensure!(
            self.policy.allows_overwrite() || fs::symlink_metadata(&to).is_err(),
            TargetExistsSnafu {
                from: from.clone(),
                to: to.clone(),
            }
        );

        debug!("Renaming {} -> {}", from.display(), to.display());
        fs::rename(&from, &to).context(RenameFailedSnafu {
            from: from.clone(),
            to: to.clone(),
        })?;

        Ok(to)
    }

    /// Renames every plain file of an already listed directory.
    ///
    /// `relative_dir` is the directory's path below the root, empty for the
    /// root itself. Stops at the first failure; files renamed before it stay
    /// renamed.
    pub fn rename_files(
        &self,
        relative_dir: &Path,
        listing: &DirectoryListing,
        observer: &mut impl WalkObserver,
    ) -> Result<(), RenameError> {
        for name in &listing.files {
            let relative = relative_dir.join(name);
            let to = self.rename_file(&relative)?;
            observer.renamed(&self.resolve(&relative), &to);
        }
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum RenameError {
    #[snafu(display(
        "Cannot rename {} to {}: a file with that name already exists",
        from.display_path(),
        to.display_path()
    ))]
    TargetExists { from: PathBuf, to: PathBuf },
    #[snafu(display("Failed to rename {} to {}", from.display_path(), to.display_path()))]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}
