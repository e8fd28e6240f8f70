pub mod adapters;
pub mod admin;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{file::JsonFileSource, firebase::FirebaseSource, storage::LocalStorage};
pub use crate::core::{
    catalog::CatalogSession, engine::CatalogEngine, filters::FilterSet,
    grouper::build_groups, pipeline::CatalogPipeline,
};
pub use crate::domain::model::{Professional, ProfessionalId, Skill, SkillGroup};
pub use crate::utils::error::{CatalogError, Result};
