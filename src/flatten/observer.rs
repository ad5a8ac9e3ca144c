use std::{
    io::{self, Stdout, Write},
    path::Path,
};

use colored::Colorize;

const SEPARATOR: &str = "-------------------------------------";

/// Receives progress events from the walk.
pub trait WalkObserver {
    fn entering_directory(&mut self, directory: &Path);

    fn renamed(&mut self, _from: &Path, _to: &Path) {}
}

impl<O: WalkObserver + ?Sized> WalkObserver for &mut O {
    fn entering_directory(&mut self, directory: &Path) {
        (**self).entering_directory(directory);
    }

    fn renamed(&mut self, from: &Path, to: &Path) {
        (**self).renamed(from, to);
    }
}

/// Prints a separator line and the directory path for every directory
/// entered. Write failures are ignored, the output is informational.
#[derive(Debug)]
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl ConsoleObserver<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> WalkObserver for ConsoleObserver<W> {
    fn entering_directory(&mut self, directory: &Path) {
        let _ = writeln!(self.out, "{}", SEPARATOR.dimmed());
        let _ = writeln!(self.out, "{}", directory.display().to_string().bold());
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl WalkObserver for SilentObserver {
    fn entering_directory(&mut self, _directory: &Path) {}
}

/// Turns coloring of console output on or off depending on whether stdout
/// can display it.
pub fn configure_console_colors() {
    let supported = supports_color::on(supports_color::Stream::Stdout).is_some();
    colored::control::set_override(supported);
}
