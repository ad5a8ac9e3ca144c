use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use snafu::{OptionExt, ResultExt, Snafu, ensure};
use tracing::debug;

use crate::{
    application::data::CollisionPolicy,
    ext::PathDisplayExt,
    flatten::{DirectoryListing, ListingError, RenameError, RenameSummary, Renamer, WalkObserver},
};

/// Depth-first walk over a root directory that flattens every plain file
/// into the root.
///
/// Pending directories live on an explicit stack of root-relative paths, so
/// nesting depth is bounded by memory rather than the call stack. Each
/// directory is listed once, before any of its files move. Files moved into
/// the root after the root was listed are not visited again.
pub struct TreeWalker<O: WalkObserver> {
    renamer: Renamer,
    observer: O,
}

impl<O: WalkObserver> TreeWalker<O> {
    pub fn new(
        root: impl Into<PathBuf>,
        marker: char,
        policy: CollisionPolicy,
        observer: O,
    ) -> Result<Self, WalkError> {
        let root = root.into();

        let metadata = fs::metadata(&root).context(RootMissingSnafu { path: root.clone() })?;
        ensure!(
            metadata.is_dir(),
            RootNotDirectorySnafu { path: root.clone() }
        );

        let prefix = root_prefix(&root)?;
        debug!(
            "Flattening {} with prefix {:?} and marker '{}'",
            root.display(),
            prefix,
            marker
        );

        Ok(Self {
            renamer: Renamer::new(root, prefix, marker, policy),
            observer,
        })
    }

    /// Renames the plain files directly inside one directory, given relative
    /// to the root, and hands back what was listed so the caller can descend
    /// into the subdirectories.
    pub fn rename_files_in(&mut self, relative_dir: &Path) -> Result<DirectoryListing, WalkError> {
        let directory = self.renamer.resolve(relative_dir);
        let listing = DirectoryListing::read(&directory).context(ListingSnafu)?;
        self.renamer
            .rename_files(relative_dir, &listing, &mut self.observer)
            .context(RenameSnafu)?;
        Ok(listing)
    }

    /// Walks the whole tree, flattening every file into the root.
    ///
    /// The first error aborts the walk. Renames done up to that point are
    /// kept.
    pub fn walk(&mut self) -> Result<RenameSummary, WalkError> {
        let mut summary = RenameSummary::default();
        let mut pending = vec![PathBuf::new()];

        while let Some(relative_dir) = pending.pop() {
            self.observer
                .entering_directory(&self.renamer.resolve(&relative_dir));

            let listing = self.rename_files_in(&relative_dir)?;
            summary.directories_visited += 1;
            summary.files_renamed += listing.files.len();
            summary.entries_skipped += listing.skipped.len();

            // Reversed so subdirectories pop in listing order.
            pending.extend(
                listing
                    .directories
                    .iter()
                    .rev()
                    .map(|name| relative_dir.join(name)),
            );
        }

        Ok(summary)
    }
}

/// The name leading every flattened file: the root's last path component,
/// looked up on the canonical path when the root is spelled as `.` or ends
/// in `..`.
fn root_prefix(root: &Path) -> Result<OsString, WalkError> {
    if let Some(name) = root.file_name() {
        return Ok(name.to_os_string());
    }

    let canonical = root
        .canonicalize()
        .context(RootCanonicalizeSnafu { path: root.to_path_buf() })?;
    canonical
        .file_name()
        .map(|name| name.to_os_string())
        .context(RootWithoutNameSnafu { path: canonical.clone() })
}

#[derive(Debug, Snafu)]
pub enum WalkError {
    #[snafu(display("Root directory {} cannot be accessed", path.display_path()))]
    RootMissing {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Root path {} is not a directory", path.display_path()))]
    RootNotDirectory { path: PathBuf },
    #[snafu(display("Failed to resolve root directory {}", path.display_path()))]
    RootCanonicalize {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Root directory {} has no name to prefix files with", path.display()))]
    RootWithoutName { path: PathBuf },
    #[snafu(display("Failed to list the tree"))]
    Listing { source: ListingError },
    #[snafu(display("Failed to flatten a file"))]
    Rename { source: RenameError },
}
