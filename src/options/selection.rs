use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Selection", inline)]
#[serde(default)]
/// Per-stream highlight thresholds and panel text.
pub struct SelectionOptions {
    /// A click highlights only when it picks more than this many objects
    /// (terrain included).
    #[schemars(title = "Click Threshold", range(min = 0, max = 10))]
    pub click_threshold: usize,
    /// A hover highlights only when it picks more than this many objects.
    #[schemars(title = "Hover Threshold", range(min = 0, max = 10))]
    pub hover_threshold: usize,
    /// Panel caption used when the picked objects carry no labels.
    #[schemars(title = "Fallback Caption")]
    pub fallback_caption: String,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            click_threshold: 2,
            hover_threshold: 1,
            fallback_caption: "Selected placemarks".to_owned(),
        }
    }
}
