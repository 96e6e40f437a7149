use serde::{Deserialize, Serialize};

fn default_show_counts() -> bool {
    true
}

/// Which frequency table a front end displays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Base words
    #[default]
    Lemmas,
    /// Word forms as they appear in the text
    Forms,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub view: View,
    #[serde(default = "default_show_counts")]
    pub show_counts: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            view: View::default(),
            show_counts: default_show_counts(),
        }
    }
}
