use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct CleanEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> CleanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting clean process...");

        // Extract
        println!("Reading stylesheet...");
        let raw_bytes = self.pipeline.extract()?;
        println!("Read {} bytes", raw_bytes.len());
        self.monitor.log_stats("Extract");

        // Transform
        println!("Cleaning stylesheet...");
        let result = self.pipeline.transform(raw_bytes)?;
        println!("Cleaned output is {} bytes", result.cleaned.len());
        self.monitor.log_stats("Transform");

        // Load
        println!("Writing stylesheet...");
        let output_path = self.pipeline.load(result)?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
