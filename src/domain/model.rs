use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable record key assigned by the data source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfessionalId(pub String);

impl ProfessionalId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfessionalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "oficio_name", default)]
    pub name: String,
    #[serde(rename = "oficio_descripcion", default)]
    pub description: String,
    #[serde(rename = "fotos", default)]
    pub photos: Vec<String>,
}

impl Skill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A professional as stored in the directory. Field names follow the
/// stored documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub id: ProfessionalId,
    /// `id` value stored inside the document, if any. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(rename = "nombres", default)]
    pub given_names: String,
    #[serde(rename = "apellidoPaterno", default)]
    pub paternal_surname: String,
    #[serde(rename = "apellidoMaterno", default)]
    pub maternal_surname: String,
    #[serde(rename = "fotoPerfil", default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(rename = "ubicacionTrabajo", default, skip_serializing_if = "Option::is_none")]
    pub work_location: Option<String>,
    #[serde(rename = "numeroCelular", default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<serde_json::Value>,
    #[serde(rename = "oficios", default, deserialize_with = "skills_or_empty")]
    pub skills: Vec<Skill>,
}

impl Professional {
    pub fn new(id: impl Into<String>, given_names: impl Into<String>) -> Self {
        Self {
            id: ProfessionalId::new(id),
            record_id: None,
            given_names: given_names.into(),
            paternal_surname: String::new(),
            maternal_surname: String::new(),
            profile_photo: None,
            work_location: None,
            phone_number: None,
            skills: Vec::new(),
        }
    }

    pub fn with_surnames(mut self, paternal: impl Into<String>, maternal: impl Into<String>) -> Self {
        self.paternal_surname = paternal.into();
        self.maternal_surname = maternal.into();
        self
    }

    pub fn with_skills<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = names.into_iter().map(Skill::named).collect();
        self
    }

    /// Concatenation used as the in-group sort key.
    pub fn sort_key(&self) -> String {
        format!(
            "{}{}{}",
            self.given_names, self.paternal_surname, self.maternal_surname
        )
    }

    pub fn full_name(&self) -> String {
        [
            self.given_names.as_str(),
            self.paternal_surname.as_str(),
            self.maternal_surname.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|skill| skill.name == name)
    }

    /// Phone numbers are stored as either numbers or strings.
    pub fn phone_display(&self) -> String {
        match &self.phone_number {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

// A `null` skill list is treated the same as a missing one. Skills without
// a name cannot be grouped and are dropped.
fn skills_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Skill>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let mut skills = Option::<Vec<Skill>>::deserialize(deserializer)?.unwrap_or_default();
    skills.retain(|skill| !skill.name.trim().is_empty());
    Ok(skills)
}

/// A professional as shown on a skill card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedProfessional {
    #[serde(flatten)]
    pub professional: Professional,
    /// Index into `professional.skills` of the card's skill.
    pub selected_skill: usize,
    pub panel_open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub skill_name: String,
    pub professionals: Vec<GroupedProfessional>,
}

impl SkillGroup {
    pub fn contains(&self, id: &ProfessionalId) -> bool {
        self.professionals.iter().any(|p| &p.professional.id == id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogExport {
    pub groups: Vec<SkillGroup>,
    pub skills: Vec<String>,
    pub csv_output: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_stored_document() {
        let json = serde_json::json!({
            "id": "-Nabc",
            "nombres": "Ana",
            "apellidoPaterno": "López",
            "apellidoMaterno": "Ruiz",
            "numeroCelular": 5512345678u64,
            "oficios": [
                {"oficio_name": "Plomero", "oficio_descripcion": "Fugas", "fotos": ["a.jpg"]}
            ]
        });

        let pro: Professional = serde_json::from_value(json).unwrap();
        assert_eq!(pro.id.as_str(), "-Nabc");
        assert_eq!(pro.full_name(), "Ana López Ruiz");
        assert_eq!(pro.sort_key(), "AnaLópezRuiz");
        assert_eq!(pro.phone_display(), "5512345678");
        assert!(pro.has_skill("Plomero"));
        assert_eq!(pro.skills[0].photos, vec!["a.jpg".to_string()]);
    }

    #[test]
    fn test_missing_or_null_skills_decode_as_empty() {
        let missing: Professional =
            serde_json::from_value(serde_json::json!({"id": "1", "nombres": "Bob"})).unwrap();
        assert!(missing.skills.is_empty());

        let null: Professional = serde_json::from_value(
            serde_json::json!({"id": "2", "nombres": "Eva", "oficios": null}),
        )
        .unwrap();
        assert!(null.skills.is_empty());
    }

    #[test]
    fn test_nameless_skill_is_dropped() {
        let pro: Professional = serde_json::from_value(serde_json::json!({
            "id": "3",
            "nombres": "Ana",
            "oficios": [{"oficio_descripcion": "sin nombre"}, {"oficio_name": "Plomero"}]
        }))
        .unwrap();
        assert_eq!(pro.skills, vec![Skill::named("Plomero")]);
    }
}
