use derive_more::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display(
    "{files_renamed} files renamed across {directories_visited} directories ({entries_skipped} entries skipped)"
)]
pub struct RenameSummary {
    pub directories_visited: usize,
    pub files_renamed: usize,
    pub entries_skipped: usize,
}
