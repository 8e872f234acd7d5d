//! JSON path tracking for decode diagnostics

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(&'static str),
    Index(usize),
}

/// Location of a value inside the source document, rendered as `$.children[0].title`.
///
/// Keys are always one of the fixed wire field names, so they are stored as
/// static strings and never need escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<Segment>,
}

impl JsonPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a named field below this one.
    pub fn key(&self, key: &'static str) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Key(key));
        next
    }

    /// Path of an array element below this one.
    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Index(index));
        next
    }

    /// Number of `children` arrays crossed to reach this path.
    pub fn depth(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Key("children")))
            .count()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
