use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct CatalogEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> CatalogEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting catalog export...");

        tracing::info!("Fetching professionals...");
        let professionals = self.pipeline.extract().await?;
        tracing::info!("Fetched {} professionals", professionals.len());
        self.monitor.log_stats("fetch");

        tracing::info!("Grouping by skill...");
        let export = self.pipeline.transform(professionals).await?;
        let placed: usize = export.groups.iter().map(|g| g.professionals.len()).sum();
        tracing::info!(
            "Built {} skill groups covering {} professionals",
            export.groups.len(),
            placed
        );
        self.monitor.log_stats("group");

        tracing::info!("Writing export...");
        let output_path = self.pipeline.load(export).await?;
        tracing::info!("Export saved to: {}", output_path);
        self.monitor.log_stats("export");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
