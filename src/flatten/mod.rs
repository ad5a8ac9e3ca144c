//! Flattening of a directory tree into its root.
//!
//! Every plain file below the root is renamed into the root itself, its
//! root-relative path joined by a marker character:
//! `presets/accommodation/basic_hut.svg` becomes
//! `presets/presets+accommodation+basic_hut.svg`.

mod flat_name;
mod listing;
mod observer;
mod renamer;
mod summary;
mod walker;

pub use listing::{DirectoryListing, ListingError};
pub use observer::{ConsoleObserver, SilentObserver, WalkObserver, configure_console_colors};
pub use renamer::{RenameError, Renamer};
pub use summary::RenameSummary;
pub use walker::{TreeWalker, WalkError};
