use serde::{Deserialize, Serialize};

/// Front/back layout for exported cards.
/// Placeholders: `{term}`, `{count}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub front_template: String,
    pub back_template: String,
}

impl Default for CardTemplate {
    fn default() -> Self {
        Self::vocabulary()
    }
}

impl CardTemplate {
    /// Word on the front, back left for the learner to fill in
    pub fn vocabulary() -> Self {
        Self {
            front_template: "{term}".to_string(),
            back_template: String::new(),
        }
    }

    pub fn new(front: String, back: String) -> Self {
        Self {
            front_template: front,
            back_template: back,
        }
    }

    pub fn format_front(&self, term: &str, count: usize) -> String {
        fill(&self.front_template, term, count)
    }

    pub fn format_back(&self, term: &str, count: usize) -> String {
        fill(&self.back_template, term, count)
    }
}

fn fill(template: &str, term: &str, count: usize) -> String {
    template
        .replace("{term}", term)
        .replace("{count}", &count.to_string())
}
