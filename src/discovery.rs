//! Skill document discovery.
//!
//! A skills root holds one directory per skill, each with a fixed file name
//! (`SKILL.md` by default). Only immediate subdirectories are considered.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns `<root>/*/<file_name>` for every immediate subdirectory of `root`
/// that contains the file, sorted by path.
///
/// Unreadable entries are skipped. Callers are expected to check that `root`
/// exists; a missing root simply yields no documents here.
///
/// ```rust,no_run
/// use std::path::Path;
/// use oxidized_frontmatter::discovery::discover_documents;
///
/// for doc in discover_documents(Path::new(".codex/skills"), "SKILL.md") {
///     println!("{}", doc.display());
/// }
/// ```
pub fn discover_documents(root: &Path, file_name: &str) -> Vec<PathBuf> {
    let mut documents: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.path().join(file_name))
        .filter(|p| p.is_file())
        .collect();

    // Path ordering, not just file-name ordering, decides report order.
    documents.sort();
    documents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_immediate_subdirectories_with_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for name in ["b-skill", "a-skill", "empty", "nested/deep"] {
            std::fs::create_dir_all(root.join(name)).unwrap();
        }
        std::fs::write(root.join("b-skill/SKILL.md"), "").unwrap();
        std::fs::write(root.join("a-skill/SKILL.md"), "").unwrap();
        std::fs::write(root.join("nested/deep/SKILL.md"), "").unwrap();
        std::fs::write(root.join("SKILL.md"), "").unwrap();

        let docs = discover_documents(root, "SKILL.md");
        assert_eq!(
            docs,
            vec![root.join("a-skill/SKILL.md"), root.join("b-skill/SKILL.md")]
        );
    }

    #[test]
    fn missing_root_yields_nothing() {
        assert!(discover_documents(Path::new("/definitely/not/here"), "SKILL.md").is_empty());
    }
}
