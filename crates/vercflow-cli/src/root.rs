use std::path::{Path, PathBuf};

/// Resolve the vercflow workspace root.
///
/// An explicit path (`--root` flag or `VERCFLOW_ROOT` env var) wins.
/// Otherwise the ancestors of the current directory are searched for a
/// `.vercflow/` directory, then for `.git/`, falling back to the current
/// directory itself.
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    for marker in [".vercflow", ".git"] {
        if let Some(found) = find_ancestor_with(&cwd, marker) {
            return found;
        }
    }
    cwd
}

fn find_ancestor_with(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_root(Some(dir.path())), dir.path());
    }

    #[test]
    fn ancestor_search_finds_marker_above_nested_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".vercflow")).unwrap();
        let nested = dir.path().join("site/docs");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_ancestor_with(&nested, ".vercflow"),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn ancestor_search_misses_absent_marker() {
        let dir = TempDir::new().unwrap();
        assert_eq!(find_ancestor_with(dir.path(), ".vercflow"), None);
    }
}
