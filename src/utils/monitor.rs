#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct SystemStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed_time: Duration,
}

/// Samples this process's CPU and memory between catalog phases.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Mutex<System>,
    pid: Option<Pid>,
    start_time: Instant,
    peak_memory: Mutex<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let system = if enabled {
            System::new_with_specifics(RefreshKind::everything())
        } else {
            System::new()
        };
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!("System monitoring unavailable: {}", e);
                None
            }
        };

        Self {
            system: Mutex::new(system),
            pid,
            start_time: Instant::now(),
            peak_memory: Mutex::new(0),
            enabled,
        }
    }

    pub fn get_stats(&self) -> Option<SystemStats> {
        if !self.enabled {
            return None;
        }

        let pid = self.pid?;
        let mut system = self.system.lock().ok()?;
        system.refresh_all();

        let process = system.process(pid)?;
        let memory_mb = process.memory() / 1024 / 1024;

        let mut peak = self.peak_memory.lock().ok()?;
        if memory_mb > *peak {
            *peak = memory_mb;
        }

        Some(SystemStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: memory_mb,
            peak_memory_mb: *peak,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                phase,
                cpu = stats.cpu_usage,
                memory_mb = stats.memory_usage_mb,
                peak_mb = stats.peak_memory_mb,
                "📊 {} done after {:?}",
                phase,
                stats.elapsed_time
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed_time,
                stats.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
