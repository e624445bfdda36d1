use std::path::{Path, PathBuf};

/// Searches all ancestor directories of the current working directory and of
/// the current executable (including themselves) for an entry whose name
/// starts with `name`, e.g. `utos_config` matches `utos_config.toml`.
/// If found, returns `<dir>/<name>`, i.e. without any extension.
pub fn search_current_ancestor_dirs_for(name: &str) -> Option<PathBuf> {
    [std::env::current_dir(), std::env::current_exe()]
        .iter()
        .filter_map(|p| p.as_ref().ok())
        .find_map(|p| search_ancestor_dirs_for(p, name))
}

/// Same as [`search_current_ancestor_dirs_for`] but starting from `start`.
pub fn search_ancestor_dirs_for(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|p| {
            p.read_dir().is_ok_and(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .any(|e| e.file_name().to_str().is_some_and(|n| n.starts_with(name)))
            })
        })
        .map(|p| p.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{format, fs};

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("utoscmn_{tag}_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn finds_file_in_an_ancestor() {
        let root = temp_dir("ancestor");
        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("utos_config.toml"), "").unwrap();

        let found = search_ancestor_dirs_for(&nested, "utos_config");
        assert_eq!(found, Some(root.join("utos_config")));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn missing_file_yields_none() {
        let root = temp_dir("missing");
        assert_eq!(
            search_ancestor_dirs_for(&root, "definitely_not_a_utos_file_4c1d"),
            None
        );
        let _ = fs::remove_dir_all(root);
    }
}
