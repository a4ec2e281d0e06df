//! Field tag attributes.
//!
//! A tag is `|`-separated; each segment is either `key=value` or a bare
//! `key`, which stands for `key=true`.

/// Attributes parsed from a field tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribs<'v> {
    entries: Vec<(&'v str, &'v str)>,
}

impl<'v> Attribs<'v> {
    pub fn parse(tag: &'v str) -> Self {
        let entries = tag
            .split('|')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (segment, "true"),
            })
            .collect();
        Self { entries }
    }

    /// Returns the value of the first attribute named `key`.
    pub fn get(&self, key: &str) -> Option<&'v str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'v str, &'v str)> + '_ {
        self.entries.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
