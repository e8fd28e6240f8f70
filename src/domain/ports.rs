use crate::domain::model::{CatalogExport, Professional};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Upstream directory of professionals. One call yields one full snapshot.
#[async_trait]
pub trait ProfessionalSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Professional>>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    /// Skills to export; empty means every skill in the snapshot.
    fn skill_filters(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Professional>>;
    async fn transform(&self, data: Vec<Professional>) -> Result<CatalogExport>;
    async fn load(&self, result: CatalogExport) -> Result<String>;
}

#[async_trait]
impl<T: ProfessionalSource + ?Sized> ProfessionalSource for Box<T> {
    async fn fetch_all(&self) -> Result<Vec<Professional>> {
        (**self).fetch_all().await
    }
}
