//! Label model and required-indicator rendering

/// The marker appended to a label when its field is required
pub const INDICATOR: &str = "*";

/// A label associated with one field by `for` identity
#[derive(Debug, Clone)]
pub struct Label {
    pub for_id: String,
    pub text: String,
    /// Number of indicator markers currently attached. Kept as a count so
    /// duplicate-marker removal stays observable in tests.
    indicators: usize,
}

impl Label {
    pub fn new(for_id: &str, text: &str) -> Self {
        Self {
            for_id: for_id.to_string(),
            text: text.to_string(),
            indicators: 0,
        }
    }

    /// Append one indicator marker unless one is already present
    pub fn add_indicator(&mut self) {
        if self.indicators == 0 {
            self.indicators = 1;
        }
    }

    /// Remove every indicator marker, tolerating duplicates
    pub fn clear_indicators(&mut self) {
        self.indicators = 0;
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators
    }

    /// Get the display text for rendering, e.g. `"Department *"`
    pub fn display_text(&self) -> String {
        if self.indicators > 0 {
            format!("{} {}", self.text, INDICATOR)
        } else {
            self.text.clone()
        }
    }

    #[cfg(test)]
    pub(crate) fn force_indicators(&mut self, count: usize) {
        self.indicators = count;
    }
}
