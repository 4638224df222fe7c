/// Insertion-ordered attribute map.
///
/// Inserting an existing key replaces its value but keeps the position of the
/// first insertion. Keys compare exactly, so `Vendor` and `vendor` are two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parsed answer for one cookie lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieRecord {
    /// Everything except the description, in reply order
    pub attributes: AttributeMap,
    /// Free-text description, empty when the reply had none
    pub description: String,
}

impl CookieRecord {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.description.is_empty()
    }
}
