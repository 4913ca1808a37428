use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Attributes set on the document root.
///
/// Cloning yields another handle to the same attributes.
#[derive(Debug, Clone, Default)]
pub struct Root {
    attributes: Arc<Mutex<BTreeMap<String, String>>>,
}

impl Root {
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Renders the attributes the way they'd appear on the root tag,
    /// e.g. `data-theme="dark"`.
    pub fn render(&self) -> String {
        self.attributes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::Root;

    #[test]
    fn handles_share_attributes() {
        let root = Root::default();
        let other = root.clone();

        root.set_attribute("data-theme", "light");
        other.set_attribute("data-theme", "dark");
        other.set_attribute("lang", "en");

        assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));
        assert_eq!(root.render(), "data-theme=\"dark\" lang=\"en\"");
    }
}
