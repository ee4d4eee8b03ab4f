//! Multi-segment logical keys.
//!
//! A logical key is an ordered sequence of scalar segments joined with
//! a configurable delimiter into a single flat string before it
//! reaches a storage driver. Two logical keys are equal iff their
//! joined string representations are equal.

use std::fmt;

/// One scalar segment of a logical key.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Str(s) => f.write_str(s),
            Segment::Int(n) => write!(f, "{n}"),
            Segment::Float(n) => write!(f, "{n}"),
            Segment::Bool(b) => write!(f, "{b}"),
            Segment::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Segment::Str(s.to_owned())
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Segment::Str(s)
    }
}

impl From<i64> for Segment {
    fn from(n: i64) -> Self {
        Segment::Int(n)
    }
}

impl From<i32> for Segment {
    fn from(n: i32) -> Self {
        Segment::Int(n.into())
    }
}

impl From<u32> for Segment {
    fn from(n: u32) -> Self {
        Segment::Int(n.into())
    }
}

impl From<f64> for Segment {
    fn from(n: f64) -> Self {
        Segment::Float(n)
    }
}

impl From<bool> for Segment {
    fn from(b: bool) -> Self {
        Segment::Bool(b)
    }
}

/// A logical key: a non-empty ordered sequence of segments.
///
/// The delimiter must not collide with characters appearing inside a
/// single segment, or joined keys become ambiguous. That is a caller
/// responsibility; the key itself does not enforce it.
#[derive(Debug, Clone, PartialEq)]
pub struct Key(Vec<Segment>);

impl Key {
    /// Create a key from its segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// Create a single-segment key.
    pub fn single(segment: impl Into<Segment>) -> Self {
        Self(vec![segment.into()])
    }

    /// The segments of this key, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the key has no segments. Empty keys are a caller error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join the segments into the flat string form used by drivers.
    pub fn join(&self, delimiter: &str) -> String {
        let mut out = String::new();
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(delimiter);
            }
            out.push_str(&segment.to_string());
        }
        out
    }
}

impl From<Segment> for Key {
    fn from(segment: Segment) -> Self {
        Key(vec![segment])
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::single(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::single(s)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::single(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::single(n)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::single(b)
    }
}

impl<T: Into<Segment>, const N: usize> From<[T; N]> for Key {
    fn from(segments: [T; N]) -> Self {
        Key(segments.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Segment>> From<Vec<T>> for Key {
    fn from(segments: Vec<T>) -> Self {
        Key(segments.into_iter().map(Into::into).collect())
    }
}
