use std::path::PathBuf;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::constants::maven::DESCRIPTOR_FILE_NAME;

/// Finds `pom.xml` descriptors below a set of root paths
#[derive(Debug, Clone, Default)]
pub struct DescriptorDiscovery {
    skip_dirs: Vec<String>,
}

impl DescriptorDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory names pruned from the walk, wherever they appear below a
    /// root
    pub fn with_skip_dirs(mut self, skip_dirs: Vec<String>) -> Self {
        self.skip_dirs = skip_dirs;
        self
    }

    /// Lazily yield every descriptor found under `roots`, in walk order.
    ///
    /// Roots that do not exist produce nothing. Entries the walk cannot read
    /// are skipped.
    pub fn discover<'a>(&'a self, roots: &'a [PathBuf]) -> impl Iterator<Item = PathBuf> + 'a {
        roots
            .iter()
            .filter(|root| {
                if root.exists() {
                    true
                } else {
                    warn!("Path '{}' does not exist", root.display());
                    false
                }
            })
            .flat_map(move |root| {
                WalkDir::new(root)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_entry(move |entry| !self.is_skipped(entry))
                    .filter_map(|entry| match entry {
                        Ok(entry) => Some(entry),
                        Err(e) => {
                            debug!("Skipping unreadable entry: {e}");
                            None
                        }
                    })
                    .filter(|entry| {
                        entry.file_name() == DESCRIPTOR_FILE_NAME && is_descriptor_file(entry)
                    })
                    .map(|entry| {
                        debug!("Found descriptor {}", entry.path().display());
                        entry.into_path()
                    })
            })
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .skip_dirs
                .iter()
                .any(|name| entry.file_name() == name.as_str())
    }
}

/// Regular files, or symlinks that resolve to one. Directory links are still
/// not followed.
fn is_descriptor_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        entry.path().is_file()
    } else {
        entry.file_type().is_file()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;

    fn touch_pom(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("pom.xml"), "<project/>").unwrap();
    }

    fn relative(paths: Vec<PathBuf>, root: &Path) -> Vec<String> {
        paths
            .into_iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_discovers_descriptors_at_any_depth() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch_pom(root);
        touch_pom(&root.join("a"));
        touch_pom(&root.join("a/nested/deeper"));
        touch_pom(&root.join("b"));
        fs::write(root.join("b/build.gradle"), "").unwrap();
        fs::create_dir_all(root.join("c")).unwrap();
        fs::write(root.join("c/pom.xml.bak"), "").unwrap();

        let discovery = DescriptorDiscovery::new();
        let roots = vec![root.to_path_buf()];
        let found: Vec<PathBuf> = discovery.discover(&roots).collect();

        assert_eq!(
            relative(found, root),
            vec!["a/nested/deeper/pom.xml", "a/pom.xml", "b/pom.xml", "pom.xml"]
        );
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        touch_pom(&temp.path().join("real"));

        let discovery = DescriptorDiscovery::new();
        let roots = vec![temp.path().join("missing"), temp.path().join("real")];
        let found: Vec<PathBuf> = discovery.discover(&roots).collect();

        assert_eq!(found, vec![temp.path().join("real/pom.xml")]);
    }

    #[test]
    fn test_root_may_be_a_descriptor_file() {
        let temp = TempDir::new().unwrap();
        touch_pom(temp.path());

        let discovery = DescriptorDiscovery::new();
        let roots = vec![temp.path().join("pom.xml")];
        let found: Vec<PathBuf> = discovery.discover(&roots).collect();

        assert_eq!(found, roots);
    }

    #[test]
    fn test_directory_named_pom_xml_is_not_a_descriptor() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("pom.xml")).unwrap();

        let discovery = DescriptorDiscovery::new();
        let roots = vec![temp.path().to_path_buf()];

        assert_eq!(discovery.discover(&roots).count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_descriptor_is_found() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("repo");
        touch_pom(&temp.path().join("real"));
        fs::create_dir_all(root.join("m")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real/pom.xml"), root.join("m/pom.xml"))
            .unwrap();

        let discovery = DescriptorDiscovery::new();
        let roots = vec![root.clone()];
        let found: Vec<PathBuf> = discovery.discover(&roots).collect();

        assert_eq!(found, vec![root.join("m/pom.xml")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_descriptor_link_is_skipped() {
        let temp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone.xml"), temp.path().join("pom.xml"))
            .unwrap();

        let discovery = DescriptorDiscovery::new();
        let roots = vec![temp.path().to_path_buf()];

        assert_eq!(discovery.discover(&roots).count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_links_are_not_followed() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("repo");
        touch_pom(&temp.path().join("outside"));
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(temp.path().join("outside"), root.join("linked")).unwrap();

        let discovery = DescriptorDiscovery::new();
        let roots = vec![root];

        assert_eq!(discovery.discover(&roots).count(), 0);
    }

    #[test]
    fn test_skip_dirs_prunes_subtrees() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch_pom(&root.join("module"));
        touch_pom(&root.join("module/target/classes"));
        touch_pom(&root.join(".git/hooks"));

        let discovery =
            DescriptorDiscovery::new().with_skip_dirs(vec!["target".into(), ".git".into()]);
        let roots = vec![root.to_path_buf()];
        let found: Vec<PathBuf> = discovery.discover(&roots).collect();

        assert_eq!(relative(found, root), vec!["module/pom.xml"]);
    }

    #[test]
    fn test_skip_dirs_never_prunes_the_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("target");
        touch_pom(&root);

        let discovery = DescriptorDiscovery::new().with_skip_dirs(vec!["target".into()]);
        let roots = vec![root.clone()];
        let found: Vec<PathBuf> = discovery.discover(&roots).collect();

        assert_eq!(found, vec![root.join("pom.xml")]);
    }
}
