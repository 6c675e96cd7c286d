//! Resolving a slash-delimited path against the tree

use std::path::MAIN_SEPARATOR;

use log::debug;

use crate::error::{LsError, Result};

use super::node::Node;

/// Marker for "the root itself".
pub const CURRENT_DIR: &str = ".";

/// Walk from `root` following `path`, one segment per level.
///
/// Each segment must equal a child's name exactly; the first match in
/// document order wins. Only the whole path `.` means the root; empty and
/// `.` segments inside a path are looked up like any other name.
/// A missing segment fails with the whole original path.
pub fn navigate<'a>(root: &'a Node, path: &str) -> Result<&'a Node> {
    if path == CURRENT_DIR {
        return Ok(root);
    }

    let mut current = root;
    for segment in path.split(MAIN_SEPARATOR) {
        current = current
            .children()
            .iter()
            .find(|child| child.name() == segment)
            .ok_or_else(|| LsError::NotFound {
                path: path.to_string(),
            })?;
    }

    debug!("resolved '{}' to '{}'", path, current.name());
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::dir(
            "root",
            vec![
                Node::file("README.md"),
                Node::dir(
                    "src",
                    vec![Node::dir("parser", vec![Node::file("lexer.rs")])],
                ),
                Node::dir("src", vec![Node::file("shadowed.rs")]),
            ],
        )
    }

    #[test]
    fn test_dot_returns_root() {
        let root = sample();
        assert!(std::ptr::eq(navigate(&root, ".").unwrap(), &root));
    }

    #[test]
    fn test_nested_path() {
        let root = sample();
        let node = navigate(&root, "src/parser").unwrap();
        assert_eq!(node.name(), "parser");
        assert_eq!(node.children()[0].name(), "lexer.rs");
    }

    #[test]
    fn test_first_match_wins_on_duplicate_names() {
        let root = sample();
        let node = navigate(&root, "src").unwrap();
        assert_eq!(node.children()[0].name(), "parser");
    }

    #[test]
    fn test_empty_and_dot_segments_must_match_names() {
        let root = sample();
        for path in ["src/", "./src", "src//parser", "src/./parser"] {
            match navigate(&root, path) {
                Err(LsError::NotFound { path: reported }) => assert_eq!(reported, path),
                other => panic!("expected NotFound for {:?}, got {:?}", path, other),
            }
        }
    }

    #[test]
    fn test_empty_path_matches_empty_name_only() {
        let root = sample();
        assert!(matches!(navigate(&root, ""), Err(LsError::NotFound { .. })));

        let with_blank = Node::dir("root", vec![Node::dir("b", vec![]), Node::file("")]);
        let node = navigate(&with_blank, "").unwrap();
        assert!(!std::ptr::eq(node, &with_blank));
        assert_eq!(node.name(), "");
        assert!(!node.is_dir());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let root = sample();
        assert!(navigate(&root, "SRC").is_err());
    }

    #[test]
    fn test_missing_deep_segment_reports_full_path() {
        let root = sample();
        match navigate(&root, "src/parser/missing") {
            Err(LsError::NotFound { path }) => assert_eq!(path, "src/parser/missing"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_cannot_descend_through_file() {
        let root = sample();
        assert!(matches!(
            navigate(&root, "README.md/inner"),
            Err(LsError::NotFound { .. })
        ));
    }

    #[test]
    fn test_path_to_file_resolves() {
        let root = sample();
        let node = navigate(&root, "README.md").unwrap();
        assert!(!node.is_dir());
    }
}
