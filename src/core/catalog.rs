use crate::core::filters::FilterSet;
use crate::core::grouper::{build_groups, distinct_skill_names};
use crate::domain::model::{GroupedProfessional, Professional, SkillGroup};
use crate::domain::ports::ProfessionalSource;
use crate::utils::error::{CatalogError, Result};

/// One browsing session over a directory snapshot.
///
/// Every filter change rebuilds the groups from the snapshot, so per-card
/// state (selected tab, open panel) does not survive a filter change.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    professionals: Vec<Professional>,
    filters: FilterSet,
    groups: Vec<SkillGroup>,
}

impl CatalogSession {
    pub fn new(professionals: Vec<Professional>, requested: Option<&str>) -> Self {
        let filters = FilterSet::seeded(distinct_skill_names(&professionals), requested);
        let mut session = Self {
            professionals,
            filters,
            groups: Vec::new(),
        };
        session.rebuild();
        session
    }

    /// Fetches the snapshot once and builds the initial view.
    pub async fn load<S>(source: &S, requested: Option<&str>) -> Result<Self>
    where
        S: ProfessionalSource + ?Sized,
    {
        let professionals = source.fetch_all().await?;
        tracing::info!("Loaded {} professionals", professionals.len());
        Ok(Self::new(professionals, requested))
    }

    fn rebuild(&mut self) {
        self.groups = build_groups(&self.professionals, &self.filters.effective_skills());
        tracing::debug!(
            active = ?self.filters.active(),
            "Rebuilt catalog with {} skill groups",
            self.groups.len()
        );
    }

    pub fn add_filter(&mut self, value: &str) -> bool {
        let added = self.filters.add(value);
        self.rebuild();
        added
    }

    /// Adds preset chips (command-line or config filters) with a single
    /// rebuild. Returns the skills that were not accepted.
    pub fn apply_filters(&mut self, skills: &[String]) -> Vec<String> {
        let mut rejected = Vec::new();
        for skill in skills {
            if self.filters.is_active(skill.trim()) {
                continue;
            }
            if !self.filters.add(skill) {
                tracing::warn!("Skill '{}' is not offered by any professional", skill);
                rejected.push(skill.clone());
            }
        }
        self.rebuild();
        rejected
    }

    pub fn select_suggestion(&mut self, value: &str) -> bool {
        let added = self.filters.select(value);
        self.rebuild();
        added
    }

    pub fn remove_filter(&mut self, value: &str) -> bool {
        let removed = self.filters.remove(value);
        self.rebuild();
        removed
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.rebuild();
    }

    pub fn suggestions(&self, query: &str) -> Vec<String> {
        self.filters.suggestions(query)
    }

    pub fn groups(&self) -> &[SkillGroup] {
        &self.groups
    }

    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn active_filters(&self) -> &[String] {
        self.filters.active()
    }

    pub fn available_filters(&self) -> Vec<String> {
        self.filters.available()
    }

    /// Switches the skill tab shown on one professional's card.
    pub fn select_skill(&mut self, group: usize, professional: usize, skill: usize) -> Result<()> {
        let member = self.member_mut(group, professional)?;
        let len = member.professional.skills.len();
        if skill >= len {
            return Err(CatalogError::IndexOutOfRange {
                what: "skill",
                index: skill,
                len,
            });
        }
        member.selected_skill = skill;
        Ok(())
    }

    /// Returns the new panel state.
    pub fn toggle_panel(&mut self, group: usize, professional: usize) -> Result<bool> {
        let member = self.member_mut(group, professional)?;
        member.panel_open = !member.panel_open;
        Ok(member.panel_open)
    }

    fn member_mut(&mut self, group: usize, professional: usize) -> Result<&mut GroupedProfessional> {
        let groups_len = self.groups.len();
        let card = self
            .groups
            .get_mut(group)
            .ok_or(CatalogError::IndexOutOfRange {
                what: "group",
                index: group,
                len: groups_len,
            })?;
        let members_len = card.professionals.len();
        card.professionals
            .get_mut(professional)
            .ok_or(CatalogError::IndexOutOfRange {
                what: "professional",
                index: professional,
                len: members_len,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<Professional> {
        vec![
            Professional::new("ana", "Ana").with_skills(["Plomero"]),
            Professional::new("bob", "Bob").with_skills(["Plomero", "Electricista"]),
            Professional::new("eva", "Eva").with_skills(["Carpintero"]),
        ]
    }

    fn skill_names(session: &CatalogSession) -> Vec<&str> {
        session
            .groups()
            .iter()
            .map(|g| g.skill_name.as_str())
            .collect()
    }

    #[test]
    fn test_no_filter_shows_all_skills() {
        let session = CatalogSession::new(snapshot(), None);
        assert_eq!(skill_names(&session), vec!["Carpintero", "Electricista", "Plomero"]);
    }

    #[test]
    fn test_requested_skill_seeds_filter() {
        let session = CatalogSession::new(snapshot(), Some("Plomero"));
        assert_eq!(session.active_filters(), &["Plomero".to_string()]);
        assert_eq!(skill_names(&session), vec!["Plomero"]);
        assert_eq!(session.groups()[0].professionals.len(), 2);
        assert!(!session.available_filters().contains(&"Plomero".to_string()));
    }

    #[test]
    fn test_filter_events_rebuild() {
        let mut session = CatalogSession::new(snapshot(), None);

        assert!(session.add_filter("Plomero"));
        assert_eq!(skill_names(&session), vec!["Plomero"]);

        assert!(session.select_suggestion("Electricista"));
        assert_eq!(skill_names(&session), vec!["Electricista", "Plomero"]);
        assert_eq!(session.groups()[1].professionals.len(), 1);

        assert!(session.remove_filter("Electricista"));
        assert!(session.remove_filter("Plomero"));
        assert_eq!(skill_names(&session).len(), 3);

        session.add_filter("Carpintero");
        session.clear_filters();
        assert!(session.active_filters().is_empty());
        assert_eq!(skill_names(&session).len(), 3);
    }

    #[test]
    fn test_preset_filters_are_excluded_from_suggestions() {
        let mut session = CatalogSession::new(snapshot(), Some("Plomero"));
        let rejected = session.apply_filters(&[
            "Plomero".to_string(),
            "Electricista".to_string(),
            "Astronauta".to_string(),
        ]);

        assert_eq!(rejected, vec!["Astronauta".to_string()]);
        assert_eq!(
            session.active_filters(),
            &["Plomero".to_string(), "Electricista".to_string()]
        );
        assert_eq!(session.suggestions(""), vec!["Carpintero".to_string()]);
        assert!(session.suggestions("elec").is_empty());
        assert_eq!(skill_names(&session), vec!["Electricista", "Plomero"]);
    }

    #[test]
    fn test_card_state() {
        let mut session = CatalogSession::new(snapshot(), Some("Plomero"));

        // Bob's skills are sorted: Electricista, Plomero.
        assert_eq!(session.groups()[0].professionals[1].selected_skill, 1);
        session.select_skill(0, 1, 0).unwrap();
        assert_eq!(session.groups()[0].professionals[1].selected_skill, 0);

        assert!(session.toggle_panel(0, 0).unwrap());
        assert!(!session.toggle_panel(0, 0).unwrap());

        assert!(matches!(
            session.select_skill(0, 1, 5),
            Err(CatalogError::IndexOutOfRange { what: "skill", .. })
        ));
        assert!(session.toggle_panel(3, 0).is_err());
        assert!(session.toggle_panel(0, 9).is_err());
    }

    #[test]
    fn test_rebuild_resets_card_state() {
        let mut session = CatalogSession::new(snapshot(), None);
        session.toggle_panel(0, 0).unwrap();
        session.add_filter("Carpintero");
        assert!(!session.groups()[0].professionals[0].panel_open);
    }
}
