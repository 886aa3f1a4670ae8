/// Suggestions containing `query`, case-insensitively, earliest match first
///
/// `query` is compared as plain text. Suggestions that match at the same position
/// keep the order the tool printed them in.
pub fn filter_suggestions<'a>(suggestions: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();

    let mut ranked: Vec<(usize, &str)> = suggestions
        .iter()
        .filter_map(|s| s.to_lowercase().find(&needle).map(|pos| (pos, s.as_str())))
        .collect();

    // Stable sort keeps tool order within equal positions
    ranked.sort_by_key(|(pos, _)| *pos);
    ranked.into_iter().map(|(_, s)| s).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerStep {
    /// The visible list changed
    Filtered(Vec<String>),
    Selected(String),
    Cancelled,
}

/// State of one interactive suggestion pick
///
/// Input lines are interpreted as: empty to dismiss, a 1-based number to choose from
/// the visible list, anything else as the new filter text.
#[derive(Debug, Clone)]
pub struct PickerSession {
    suggestions: Vec<String>,
    query: String,
}

impl PickerSession {
    pub fn new(suggestions: Vec<String>) -> Self {
        // Blank entries come from trailing separators and cannot be looked up
        let suggestions = suggestions
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();

        Self {
            suggestions,
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> Vec<String> {
        filter_suggestions(&self.suggestions, &self.query)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn handle_input(&mut self, line: &str) -> PickerStep {
        let line = line.trim();

        if line.is_empty() {
            return PickerStep::Cancelled;
        }

        if let Ok(index) = line.parse::<usize>() {
            let visible = self.visible();
            if let Some(choice) = index.checked_sub(1).and_then(|i| visible.get(i)) {
                return PickerStep::Selected(choice.trim().to_string());
            }
        }

        self.query = line.to_string();
        PickerStep::Filtered(self.visible())
    }
}
