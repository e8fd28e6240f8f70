//! Partitions a directory snapshot into per-skill cards.
//!
//! Every professional lands on exactly one card: the alphabetically first
//! requested skill they practice. Their own skill order plays no part.

use crate::domain::model::{GroupedProfessional, Professional, ProfessionalId, SkillGroup};
use std::collections::{BTreeSet, HashSet};

/// Builds the deduplicated, sorted skill groups for `skill_names`.
///
/// Names with no matching professional produce no group, and a group left
/// empty after deduplication is dropped.
pub fn build_groups(professionals: &[Professional], skill_names: &[String]) -> Vec<SkillGroup> {
    if professionals.is_empty() || skill_names.is_empty() {
        return Vec::new();
    }

    // BTreeSet gives the byte-wise ascending card order and collapses repeats.
    let requested: BTreeSet<&str> = skill_names
        .iter()
        .map(String::as_str)
        .filter(|name| !name.trim().is_empty())
        .collect();

    let mut groups: Vec<SkillGroup> = requested
        .into_iter()
        .filter_map(|skill| build_group(professionals, skill))
        .collect();

    remove_duplicated(&mut groups);
    groups
}

fn build_group(professionals: &[Professional], skill: &str) -> Option<SkillGroup> {
    let mut members: Vec<GroupedProfessional> = professionals_with_skill(professionals, skill)
        .into_iter()
        .map(|pro| {
            let mut professional = pro.clone();
            professional.skills.sort_by(|a, b| a.name.cmp(&b.name));
            let selected_skill = professional
                .skills
                .iter()
                .position(|s| s.name == skill)
                .unwrap_or(0);

            GroupedProfessional {
                professional,
                selected_skill,
                panel_open: false,
            }
        })
        .collect();

    if members.is_empty() {
        return None;
    }

    members.sort_by_cached_key(|member| member.professional.sort_key());

    Some(SkillGroup {
        skill_name: skill.to_string(),
        professionals: members,
    })
}

/// Keeps each professional only in the earliest group it appears in.
/// `groups` must already be in display order.
fn remove_duplicated(groups: &mut Vec<SkillGroup>) {
    let mut seen: HashSet<ProfessionalId> = HashSet::new();

    for group in groups.iter_mut() {
        group
            .professionals
            .retain(|member| seen.insert(member.professional.id.clone()));
    }

    let before = groups.len();
    groups.retain(|group| !group.professionals.is_empty());
    if groups.len() < before {
        tracing::debug!(
            "Dropped {} skill groups emptied by deduplication",
            before - groups.len()
        );
    }
}

/// Distinct skill names in first-seen order.
pub fn distinct_skill_names(professionals: &[Professional]) -> Vec<String> {
    let mut seen = HashSet::new();
    professionals
        .iter()
        .flat_map(|pro| pro.skills.iter())
        .filter(|skill| !skill.name.trim().is_empty())
        .filter(|skill| seen.insert(skill.name.as_str()))
        .map(|skill| skill.name.clone())
        .collect()
}

pub fn professionals_with_skill<'a>(
    professionals: &'a [Professional],
    skill: &str,
) -> Vec<&'a Professional> {
    professionals
        .iter()
        .filter(|pro| pro.has_skill(skill))
        .collect()
}

/// Case-insensitive substring match, used to narrow autocomplete suggestions.
pub fn filter_skill_names(names: &[String], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
