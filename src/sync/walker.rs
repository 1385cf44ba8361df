//! Local workspace traversal
//!
//! Produces the sequence of files to upload, lazily, in depth-first
//! pre-order. Excluded directories are pruned before descent, so a large
//! ignored tree (a `node_modules`, say) costs nothing to skip.

use super::SyncError;
use super::filter::IgnoreList;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One file scheduled for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path on the local filesystem
    pub absolute: PathBuf,
    /// Path relative to the sync root; becomes the remote logical path
    pub relative: PathBuf,
}

impl FileEntry {
    /// The file's base name, used as the remote display name
    pub fn file_name(&self) -> String {
        self.absolute
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The relative path as a forward-slash string, regardless of host OS
    pub fn relative_display(&self) -> String {
        let parts: Vec<String> = self
            .relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.join("/")
    }
}

/// Walk `root`, yielding every file not under an excluded directory.
///
/// The root is validated eagerly: a missing path or a non-directory fails
/// with [`SyncError::InvalidRoot`] before anything is yielded, so callers
/// get a clear error instead of a silently empty batch. Entries arrive in
/// the order the filesystem reports them.
pub fn walk(root: &Path, ignore: &IgnoreList) -> Result<impl Iterator<Item = FileEntry>, SyncError> {
    if !root.is_dir() {
        return Err(SyncError::InvalidRoot(root.to_path_buf()));
    }

    let root = root.to_path_buf();
    let ignore = ignore.clone();

    let iter = WalkDir::new(root.clone())
        .into_iter()
        .filter_entry(move |entry| {
            // Never prune the root itself, whatever it is named
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            match entry.file_name().to_str() {
                Some(name) => !ignore.is_ignored(name),
                None => true,
            }
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(move |entry| {
            let relative = entry.path().strip_prefix(&root).ok()?.to_path_buf();
            Some(FileEntry {
                absolute: entry.path().to_path_buf(),
                relative,
            })
        });

    Ok(iter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn walked(root: &Path, ignore: &IgnoreList) -> Vec<String> {
        let mut relatives: Vec<String> = walk(root, ignore)
            .unwrap()
            .map(|e| e.relative_display())
            .collect();
        relatives.sort();
        relatives
    }

    #[test]
    fn yields_files_under_non_excluded_directories() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.py", "print('a')");
        write(dir.path(), "sub/b.py", "print('b')");
        write(dir.path(), "node_modules/x.js", "x");

        let entries = walked(dir.path(), &IgnoreList::default());
        assert_eq!(entries, vec!["a.py", "sub/b.py"]);
    }

    #[test]
    fn exclusion_applies_at_every_depth() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "keep/code.py", "1");
        write(dir.path(), "keep/.git/objects/blob", "2");
        write(dir.path(), "keep/deep/dist/bundle.js", "3");

        let entries = walked(dir.path(), &IgnoreList::default());
        assert_eq!(entries, vec!["keep/code.py"]);
    }

    #[test]
    fn exclusion_matches_names_not_paths() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "dist.bak/kept.txt", "1");
        write(dir.path(), "dist/lost.txt", "2");

        let entries = walked(dir.path(), &IgnoreList::default());
        assert_eq!(entries, vec!["dist.bak/kept.txt"]);
    }

    #[test]
    fn a_file_named_like_an_excluded_dir_is_still_uploaded() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "out", "a plain file, not a directory");

        let entries = walked(dir.path(), &IgnoreList::default());
        assert_eq!(entries, vec!["out"]);
    }

    #[test]
    fn missing_root_fails_before_yielding() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");
        let err = walk(&gone, &IgnoreList::default()).err().unwrap();
        assert!(err.to_string().contains("not a valid directory"));
    }

    #[test]
    fn file_root_fails_before_yielding() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "plain.txt", "x");
        assert!(walk(&dir.path().join("plain.txt"), &IgnoreList::default()).is_err());
    }

    #[test]
    fn empty_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert_eq!(walked(dir.path(), &IgnoreList::default()), Vec::<String>::new());
    }
}
