//! Entry kind filter for `--filter`

use std::fmt;
use std::str::FromStr;

use crate::error::LsError;
use crate::tree::Node;

/// Which kinds of entries to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterKind {
    #[default]
    None,
    File,
    Dir,
}

impl FilterKind {
    pub fn accepts(self, node: &Node) -> bool {
        match self {
            FilterKind::None => true,
            FilterKind::File => !node.is_dir(),
            FilterKind::Dir => node.is_dir(),
        }
    }
}

impl FromStr for FilterKind {
    type Err = LsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(FilterKind::File),
            "dir" => Ok(FilterKind::Dir),
            _ => Err(LsError::InvalidFilter {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilterKind::None => "none",
            FilterKind::File => "file",
            FilterKind::Dir => "dir",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("file".parse::<FilterKind>().unwrap(), FilterKind::File);
        assert_eq!("dir".parse::<FilterKind>().unwrap(), FilterKind::Dir);
    }

    #[test]
    fn test_parse_rejects_unknown_with_literal_value() {
        match "Dir".parse::<FilterKind>() {
            Err(LsError::InvalidFilter { value }) => assert_eq!(value, "Dir"),
            other => panic!("expected InvalidFilter, got {:?}", other),
        }
        assert!("".parse::<FilterKind>().is_err());
        assert!("none".parse::<FilterKind>().is_err());
    }

    #[test]
    fn test_accepts() {
        let file = Node::file("a.txt");
        let dir = Node::dir("b", vec![]);
        assert!(FilterKind::None.accepts(&file) && FilterKind::None.accepts(&dir));
        assert!(FilterKind::File.accepts(&file) && !FilterKind::File.accepts(&dir));
        assert!(FilterKind::Dir.accepts(&dir) && !FilterKind::Dir.accepts(&file));
    }
}
