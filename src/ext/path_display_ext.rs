use std::path::{Component, Path, PathBuf};

/// Renders a path for log lines and error messages.
///
/// Existing paths are shown canonicalized. Paths that are gone (a file that
/// was just renamed away, a root that never existed) are made absolute
/// against the current directory and lexically cleaned instead.
pub fn display_path(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    lexically_clean(&absolute).display().to_string()
}

fn lexically_clean(path: &Path) -> PathBuf {
    let mut cleaned: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.last() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(component),
            },
            _ => cleaned.push(component),
        }
    }

    cleaned.iter().collect()
}

pub trait PathDisplayExt {
    fn display_path(&self) -> String;
}

impl<P: AsRef<Path> + ?Sized> PathDisplayExt for P {
    fn display_path(&self) -> String {
        display_path(self.as_ref())
    }
}
