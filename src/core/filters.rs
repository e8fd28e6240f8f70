use crate::core::grouper::filter_skill_names;
use std::collections::BTreeSet;

/// Active filter chips over a known set of skills.
///
/// `available()` is always computed from the known skills minus the active
/// chips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    known: BTreeSet<String>,
    active: Vec<String>,
}

impl FilterSet {
    pub fn new<I, S>(known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: known.into_iter().map(Into::into).collect(),
            active: Vec::new(),
        }
    }

    /// Applies the filter requested by the incoming route, if any. A requested
    /// skill nobody practices is still kept as a chip.
    pub fn seeded<I, S>(known: I, requested: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filters = Self::new(known);
        if let Some(skill) = requested.map(str::trim).filter(|s| !s.is_empty()) {
            filters.active.push(skill.to_string());
        }
        filters
    }

    /// Chip typed into the input. Only currently available skills are accepted.
    pub fn add(&mut self, value: &str) -> bool {
        let value = value.trim();
        if !self.is_available(value) {
            return false;
        }
        self.active.push(value.to_string());
        true
    }

    /// Suggestion picked from the autocomplete list.
    pub fn select(&mut self, value: &str) -> bool {
        self.add(value)
    }

    pub fn remove(&mut self, value: &str) -> bool {
        match self.active.iter().position(|s| s == value) {
            Some(index) => {
                self.active.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.active.iter().any(|s| s == value)
    }

    pub fn is_available(&self, value: &str) -> bool {
        self.known.contains(value) && !self.is_active(value)
    }

    pub fn available(&self) -> Vec<String> {
        self.known
            .iter()
            .filter(|skill| !self.is_active(skill))
            .cloned()
            .collect()
    }

    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let available = self.available();
        if query.trim().is_empty() {
            return available;
        }
        filter_skill_names(&available, query)
    }

    /// Skills to group by: the active chips, or every known skill when none are set.
    pub fn effective_skills(&self) -> Vec<String> {
        if self.active.is_empty() {
            self.known.iter().cloned().collect()
        } else {
            self.active.clone()
        }
    }
}
