//! UI selection state read by the fetch operations.

/// What the user has currently narrowed the variable overview to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected_keywords: Vec<String>,
    search: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the given keywords, keeping the first occurrence of each.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            self.select_keyword(keyword);
        }
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(Some(search.into()));
        self
    }

    /// Keywords in the order they were selected.
    pub fn selected_keywords(&self) -> &[String] {
        &self.selected_keywords
    }

    pub fn is_selected(&self, keyword: &str) -> bool {
        self.selected_keywords.iter().any(|k| k == keyword)
    }

    /// Appends a keyword unless it is already selected.
    pub fn select_keyword(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        if !self.is_selected(&keyword) {
            self.selected_keywords.push(keyword);
        }
    }

    /// Returns whether the keyword was selected.
    pub fn deselect_keyword(&mut self, keyword: &str) -> bool {
        let before = self.selected_keywords.len();
        self.selected_keywords.retain(|k| k != keyword);
        self.selected_keywords.len() != before
    }

    /// Flips a keyword and returns whether it is now selected.
    pub fn toggle_keyword(&mut self, keyword: &str) -> bool {
        if self.deselect_keyword(keyword) {
            false
        } else {
            self.select_keyword(keyword);
            true
        }
    }

    pub fn clear_keywords(&mut self) {
        self.selected_keywords.clear();
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Sets the free-text search; blank text clears it.
    pub fn set_search(&mut self, search: Option<String>) {
        self.search = search.filter(|s| !s.trim().is_empty());
    }
}
