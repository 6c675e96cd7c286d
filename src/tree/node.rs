//! Node types for the synthetic directory tree

use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;

/// Modification time of an entry.
///
/// Documents store either seconds since the epoch or a free-form string.
/// Integer-looking strings are normalised to `Seconds` while loading.
/// Ordering puts every `Seconds` value before every `Text` value; wrapped in
/// an `Option`, a missing time sorts before both.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Timestamp {
    Seconds(i64),
    Text(String),
}

impl Timestamp {
    /// Interpret the timestamp in the local time zone.
    ///
    /// Text is accepted if it is RFC 3339; anything else yields `None`.
    pub fn to_local(&self) -> Option<DateTime<Local>> {
        match self {
            Timestamp::Seconds(secs) => Local.timestamp_opt(*secs, 0).single(),
            Timestamp::Text(text) => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.with_timezone(&Local)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Sizes are byte counts, but some documents write them as floats.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSize {
    Int(u64),
    Float(f64),
}

impl From<RawSize> for u64 {
    fn from(raw: RawSize) -> Self {
        match raw {
            RawSize::Int(bytes) => bytes,
            // saturates: negatives become 0
            RawSize::Float(bytes) => bytes.trunc() as u64,
        }
    }
}

impl From<RawTimestamp> for Timestamp {
    fn from(raw: RawTimestamp) -> Self {
        match raw {
            RawTimestamp::Int(secs) => Timestamp::Seconds(secs),
            RawTimestamp::Float(secs) => Timestamp::Seconds(secs.trunc() as i64),
            RawTimestamp::Text(text) => match text.trim().parse::<i64>() {
                Ok(secs) => Timestamp::Seconds(secs),
                Err(_) => Timestamp::Text(text),
            },
        }
    }
}

/// Whether a node is a plain file or a directory owning its children.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    File,
    Dir { children: Vec<Node> },
}

/// One entry of the tree, file or directory.
///
/// Deserialized from the document's node objects. The presence of a
/// `children` (or `contents`) array is what makes a node a directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub struct Node {
    pub name: String,
    pub permissions: String,
    pub size: u64,
    pub time_modified: Option<Timestamp>,
    pub kind: NodeKind,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(default)]
    name: String,
    #[serde(default)]
    permissions: String,
    #[serde(default)]
    size: Option<RawSize>,
    #[serde(default)]
    time_modified: Option<RawTimestamp>,
    #[serde(default, alias = "contents")]
    children: Option<Vec<Node>>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let kind = match raw.children {
            Some(children) => NodeKind::Dir { children },
            None => NodeKind::File,
        };
        Self {
            name: raw.name,
            permissions: raw.permissions,
            size: raw.size.map(u64::from).unwrap_or(0),
            time_modified: raw.time_modified.map(Timestamp::from),
            kind,
        }
    }
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: String::new(),
            size: 0,
            time_modified: None,
            kind: NodeKind::File,
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Dir { children },
            ..Self::file(name)
        }
    }

    pub fn with_permissions(mut self, permissions: impl Into<String>) -> Self {
        self.permissions = permissions.into();
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_time(mut self, secs: i64) -> Self {
        self.time_modified = Some(Timestamp::Seconds(secs));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Dir { .. })
    }

    /// Dot-prefixed names are hidden unless `-A` is given.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Children in document order. Files have none.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Dir { children } => children,
            NodeKind::File => &[],
        }
    }
}
