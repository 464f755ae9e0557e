use std::collections::BTreeMap;

/// Immutable key-value context a template is rendered against.
///
/// Built once per module from the derived identifier forms, then shared
/// across every template of a generation stage.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key-value pair, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a placeholder value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the context defines `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}
