//! Loading a tree document from disk

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{LsError, Result};

use super::node::Node;

/// Read and parse the JSON document at `path` into its root node.
pub fn load_tree(path: &Path) -> Result<Node> {
    let content = fs::read_to_string(path).map_err(|source| LsError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let root = parse_tree(&content).map_err(|source| LsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "loaded '{}': root has {} children",
        path.display(),
        root.children().len()
    );
    Ok(root)
}

/// Parse a JSON document describing the root node.
pub fn parse_tree(content: &str) -> serde_json::Result<Node> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tree.json");
        fs::write(&path, r#"{"name": "root", "contents": [{"name": "a"}]}"#).unwrap();

        let root = load_tree(&path).unwrap();
        assert_eq!(root.name(), "root");
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_missing_document_is_load_error() {
        let dir = TempDir::new().unwrap();
        let err = load_tree(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LsError::Load { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_tree(&path).unwrap_err();
        assert!(matches!(err, LsError::Parse { .. }));
    }

    #[test]
    fn test_non_object_root_is_parse_error() {
        assert!(parse_tree("[1, 2, 3]").is_err());
    }
}
