use serde_json::Value;

/// Slash separated location inside a JSON value, e.g. `/foo/bar/1/paint`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonPath(String);

impl JsonPath {
    /// Create a new path from a string
    pub fn new(path: &str) -> Self {
        JsonPath(Self::normalize(path))
    }

    /// Normalize the path (remove extra slashes)
    fn normalize(path: &str) -> String {
        format!("/{}", path.trim_start_matches('/').trim_end_matches('/'))
    }

    pub fn root() -> Self {
        Self::new("")
    }

    /// Get the internal string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn append(&self, segment: &str) -> JsonPath {
        let result = format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            segment.trim_start_matches('/').trim_end_matches('/')
        );
        JsonPath(result)
    }

    pub fn index(&self, index: usize) -> JsonPath {
        self.append(&format!("{index}"))
    }

    /// Value at this path; the root path selects the whole value
    pub fn lookup<'a>(&self, json: &'a Value) -> Option<&'a Value> {
        if self.0 == "/" {
            return Some(json);
        }
        json.pointer(&self.0)
    }

    pub fn lookup_mut<'a>(&self, json: &'a mut Value) -> Option<&'a mut Value> {
        if self.0 == "/" {
            return Some(json);
        }
        json.pointer_mut(&self.0)
    }
}

impl Default for JsonPath {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for JsonPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
