use std::path::{Component, Path, PathBuf};

/// Renders a path as absolute as possible for diagnostics.
///
/// Paths that exist are canonicalized. Paths that do not exist yet (the
/// common case for a skeleton about to be created) are joined onto the
/// current directory and lexically normalized instead.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical_path) = path.canonicalize() {
        return canonical_path.display().to_string();
    }

    let absolute_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_path(&absolute_path).display().to_string()
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(normalized.components().next_back(), Some(Component::RootDir) | None) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl<P: AsRef<Path> + ?Sized> BestEffortPathExt for P {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self.as_ref())
    }
}
