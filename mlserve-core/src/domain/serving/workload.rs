// mlserve-core/src/domain/serving/workload.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Concurrency bucket of a served entity, spelled the way the platform spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WorkloadSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl WorkloadSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

impl fmt::Display for WorkloadSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkloadSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(format!("Unknown workload size: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkloadType {
    #[default]
    Cpu,
    GpuSmall,
    GpuMedium,
    GpuLarge,
}

impl WorkloadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::GpuSmall => "GPU_SMALL",
            Self::GpuMedium => "GPU_MEDIUM",
            Self::GpuLarge => "GPU_LARGE",
        }
    }
}

impl fmt::Display for WorkloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkloadType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CPU" => Ok(Self::Cpu),
            "GPU_SMALL" => Ok(Self::GpuSmall),
            "GPU_MEDIUM" => Ok(Self::GpuMedium),
            "GPU_LARGE" => Ok(Self::GpuLarge),
            _ => Err(format!("Unknown workload type: {}", s)),
        }
    }
}

/// Compute shape of a served entity. Default: small CPU, scale-to-zero on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadShape {
    #[serde(default)]
    pub size: WorkloadSize,

    #[serde(rename = "type", default)]
    pub workload_type: WorkloadType,

    #[serde(default = "default_scale_to_zero")]
    pub scale_to_zero: bool,
}

fn default_scale_to_zero() -> bool {
    true
}

impl Default for WorkloadShape {
    fn default() -> Self {
        Self {
            size: WorkloadSize::Small,
            workload_type: WorkloadType::Cpu,
            scale_to_zero: true,
        }
    }
}
