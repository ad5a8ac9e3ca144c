use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use snafu::{ResultExt, Snafu};
use tracing::{debug, warn};

use crate::ext::PathDisplayExt;

/// The entries of one directory, read once and split by kind.
///
/// Names are collected up front so the directory can be modified (files
/// renamed out of it, flattened files renamed into it) without disturbing
/// the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub files: Vec<OsString>,
    pub directories: Vec<OsString>,
    pub skipped: Vec<OsString>,
}

impl DirectoryListing {
    pub fn read(directory: &Path) -> Result<Self, ListingError> {
        debug!("Listing directory {}", directory.display());
        let entries = fs::read_dir(directory).context(ReadDirSnafu {
            path: directory.to_path_buf(),
        })?;

        let mut listing = Self::default();
        for entry in entries {
            let entry = entry.context(ReadEntrySnafu {
                path: directory.to_path_buf(),
            })?;
            let name = entry.file_name();
            let path = entry.path();

            let kind = EntryKind::of(&path).context(EntryMetadataSnafu {
                path: path.clone(),
            })?;
            match kind {
                EntryKind::File => listing.files.push(name),
                EntryKind::Directory => listing.directories.push(name),
                EntryKind::DirectorySymlink => {
                    warn!("Not following directory symlink {}", path.display());
                    listing.skipped.push(name);
                }
                EntryKind::Unresolvable => {
                    warn!("Skipping unresolvable entry {}", path.display());
                    listing.skipped.push(name);
                }
            }
        }

        debug!(
            "Found {} files and {} directories in {}",
            listing.files.len(),
            listing.directories.len(),
            directory.display()
        );
        Ok(listing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
    DirectorySymlink,
    Unresolvable,
}

impl EntryKind {
    /// Classifies by the target of the entry, so a symlink to a file counts
    /// as a file. Links to directories are reported separately and never
    /// followed. Only a missing target (a dangling link) is unresolvable;
    /// every other I/O error is returned.
    fn of(path: &Path) -> io::Result<Self> {
        let target = match fs::metadata(path) {
            Ok(target) => target,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Ok(EntryKind::Unresolvable);
            }
            Err(error) => return Err(error),
        };

        if !target.is_dir() {
            return Ok(EntryKind::File);
        }

        if fs::symlink_metadata(path)?.file_type().is_symlink() {
            Ok(EntryKind::DirectorySymlink)
        } else {
            Ok(EntryKind::Directory)
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ListingError {
    #[snafu(display("Failed to list directory {}", path.display_path()))]
    ReadDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read an entry of directory {}", path.display_path()))]
    ReadEntryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to inspect {}", path.display_path()))]
    EntryMetadataError {
        path: PathBuf,
        source: std::io::Error,
    },
}
