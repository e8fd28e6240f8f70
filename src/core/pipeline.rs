use crate::core::grouper::{build_groups, distinct_skill_names};
use crate::core::{CatalogExport, ConfigProvider, Pipeline, Professional, ProfessionalSource, SkillGroup, Storage};
use crate::utils::error::Result;
use chrono::Utc;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const EXPORT_FILE_NAME: &str = "catalog_export.zip";

const CSV_HEADER: [&str; 6] = [
    "skill_name",
    "professional_id",
    "full_name",
    "location",
    "phone",
    "skills",
];

/// Fetches the directory, groups it by skill and writes a zip export.
pub struct CatalogPipeline<P: ProfessionalSource, S: Storage, C: ConfigProvider> {
    source: P,
    storage: S,
    config: C,
}

impl<P: ProfessionalSource, S: Storage, C: ConfigProvider> CatalogPipeline<P, S, C> {
    pub fn new(source: P, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }
}

pub fn render_csv(groups: &[SkillGroup]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for group in groups {
        for member in &group.professionals {
            let pro = &member.professional;
            let skills = pro
                .skills
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            writer.write_record([
                group.skill_name.as_str(),
                pro.id.as_str(),
                pro.full_name().as_str(),
                pro.work_location.as_deref().unwrap_or(""),
                pro.phone_display().as_str(),
                skills.as_str(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[async_trait::async_trait]
impl<P, S, C> Pipeline for CatalogPipeline<P, S, C>
where
    P: ProfessionalSource,
    S: Storage,
    C: ConfigProvider,
{
    async fn extract(&self) -> Result<Vec<Professional>> {
        self.source.fetch_all().await
    }

    async fn transform(&self, data: Vec<Professional>) -> Result<CatalogExport> {
        let skills = distinct_skill_names(&data);
        let requested = if self.config.skill_filters().is_empty() {
            skills.clone()
        } else {
            self.config.skill_filters().to_vec()
        };
        tracing::debug!("Grouping by {} skills", requested.len());

        let groups = build_groups(&data, &requested);
        let csv_output = render_csv(&groups)?;

        let mut skills = skills;
        skills.sort();

        Ok(CatalogExport {
            groups,
            skills,
            csv_output,
            generated_at: Utc::now(),
        })
    }

    async fn load(&self, result: CatalogExport) -> Result<String> {
        let output_path = format!("{}/{}", self.config.output_path(), EXPORT_FILE_NAME);

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            zip.start_file::<_, ()>("catalog.csv", FileOptions::default())?;
            zip.write_all(result.csv_output.as_bytes())?;

            zip.start_file::<_, ()>("catalog.json", FileOptions::default())?;
            let json_data = serde_json::to_string_pretty(&serde_json::json!({
                "generated_at": result.generated_at,
                "groups": result.groups,
            }))?;
            zip.write_all(json_data.as_bytes())?;

            zip.start_file::<_, ()>("skills.json", FileOptions::default())?;
            zip.write_all(serde_json::to_string(&result.skills)?.as_bytes())?;

            zip.finish()?.into_inner()
        };

        tracing::debug!("Writing export ({} bytes) to storage", zip_data.len());
        self.storage.write_file(EXPORT_FILE_NAME, &zip_data).await?;

        Ok(output_path)
    }
}
