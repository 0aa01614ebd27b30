/// Which configured entries the user wants deleted.
///
/// Every entry starts checked, so an untouched selection deletes the full
/// configured list. Order always follows the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<String>,
    checked: Vec<bool>,
}

impl Selection {
    pub fn new(entries: Vec<String>) -> Self {
        let checked = vec![true; entries.len()];
        Self { entries, checked }
    }

    /// Check only the named entries. Returns the names that are not in
    /// the configured list.
    pub fn only<S: AsRef<str>>(entries: Vec<String>, names: &[S]) -> Result<Self, Vec<String>> {
        let unknown: Vec<String> = names
            .iter()
            .map(|n| n.as_ref())
            .filter(|n| !entries.iter().any(|e| e.as_str() == *n))
            .map(str::to_string)
            .collect();
        if !unknown.is_empty() {
            return Err(unknown);
        }

        let checked = entries
            .iter()
            .map(|e| names.iter().any(|n| n.as_ref() == e.as_str()))
            .collect();
        Ok(Self { entries, checked })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(c) = self.checked.get_mut(index) {
            *c = !*c;
        }
    }

    /// Check everything, or uncheck everything if all are already checked
    pub fn toggle_all(&mut self) {
        let value = !self.all_checked();
        self.checked.iter_mut().for_each(|c| *c = value);
    }

    pub fn all_checked(&self) -> bool {
        self.checked.iter().all(|c| *c)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// (entry, checked) pairs in settings order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries
            .iter()
            .map(String::as_str)
            .zip(self.checked.iter().copied())
    }

    /// Checked entries in settings order
    pub fn selected(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, checked)| *checked)
            .map(|(e, _)| e.to_string())
            .collect()
    }
}
