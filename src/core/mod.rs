pub mod catalog;
pub mod engine;
pub mod filters;
pub mod grouper;
pub mod pipeline;

pub use crate::domain::model::{
    CatalogExport, GroupedProfessional, Professional, ProfessionalId, Skill, SkillGroup,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ProfessionalSource, Storage};
pub use crate::utils::error::Result;
