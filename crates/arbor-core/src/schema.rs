//! Column header schema.
//!
//! A [`HeaderSchema`] is an order-preserving mapping from column name to a
//! display-width hint. The position of a header is its column index, and each
//! name appears at most once.

use std::fmt;

/// A single column header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    /// Column label.
    pub name: String,
    /// Display-width hint. `0` means "stretch to fill".
    pub width: u32,
}

impl Header {
    /// Creates a header with the given name and width hint.
    pub fn new(name: impl Into<String>, width: u32) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }
}

/// Ordered column-name to width mapping.
///
/// # Example
///
/// ```
/// use arbor_core::HeaderSchema;
///
/// let schema = HeaderSchema::from_pairs([("Key", 160), ("Value", 0)]);
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.index_of("Value"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSchema {
    headers: Vec<Header>,
}

impl HeaderSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schema from `(name, width)` pairs, keeping their order.
    ///
    /// A repeated name keeps its first position and takes the last width.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut schema = Self::new();
        for (name, width) in pairs {
            schema.push(Header::new(name, width));
        }
        schema
    }

    /// Appends a header, or updates the width of an existing one with the
    /// same name.
    pub fn push(&mut self, header: Header) {
        match self.headers.iter_mut().find(|h| h.name == header.name) {
            Some(existing) => existing.width = header.width,
            None => self.headers.push(header),
        }
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns true if no columns are declared.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Index of the header with the given label.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.name == name)
    }

    /// Header at a column index.
    pub fn get(&self, column: usize) -> Option<&Header> {
        self.headers.get(column)
    }

    /// Header labels in column order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(|h| h.name.as_str())
    }

    /// Iterates over the headers in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for HeaderSchema {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl fmt::Display for HeaderSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for header in &self.headers {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", header.name, header.width)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_defines_index() {
        let schema = HeaderSchema::from_pairs([("Name", 200), ("Type", 80), ("Size", 0)]);
        assert_eq!(schema.index_of("Name"), Some(0));
        assert_eq!(schema.index_of("Size"), Some(2));
        assert_eq!(schema.index_of("Missing"), None);
        assert_eq!(schema.get(1).map(|h| h.width), Some(80));
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let mut schema = HeaderSchema::from_pairs([("Key", 1), ("Value", 0), ("Key", 2)]);
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.index_of("Key"), Some(0));
        assert_eq!(schema.get(0).map(|h| h.width), Some(2));

        schema.push(Header::new("Value", 40));
        assert_eq!(schema.to_string(), "Key:2, Value:40");
    }

    #[test]
    fn test_display() {
        let schema: HeaderSchema = [("Key", 160), ("Value", 0)].into_iter().collect();
        assert_eq!(schema.to_string(), "Key:160, Value:0");
    }
}
