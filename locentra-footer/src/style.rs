use serde::{Deserialize, Serialize};

/// Utility classes for a full-width footer: thin top border, padding,
/// centered small muted-gray text.
pub const DEFAULT_CLASSES: &[&str] = &[
    "w-full",
    "border-t",
    "p-4",
    "text-center",
    "text-sm",
    "text-gray-500",
];

/// Landmark role for the page footer.
pub const DEFAULT_ROLE: &str = "contentinfo";

/// Class names and landmark role applied to the footer container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterStyle {
    pub classes: Vec<String>,
    pub role: Option<String>,
}

impl Default for FooterStyle {
    fn default() -> Self {
        Self {
            classes: DEFAULT_CLASSES.iter().map(ToString::to_string).collect(),
            role: Some(DEFAULT_ROLE.to_string()),
        }
    }
}

impl FooterStyle {
    /// Load a host theme's footer classes from JSON. Missing fields keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a footer style.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Space-separated `class` attribute value.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(|class| class.trim())
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
