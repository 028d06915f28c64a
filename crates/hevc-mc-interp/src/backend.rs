//! 插值后端选择.
//!
//! 加速实现由 cargo feature `accel` 控制是否编译; 运行时按
//! [`InterpConfig`] 在参考实现与加速实现之间选择.

use std::fmt;
use std::str::FromStr;

use hevc_mc_core::{McError, McResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[cfg(feature = "accel")]
use crate::accel::AcceleratedKernels;
use crate::kernels::InterpKernels;
use crate::reference::ReferenceKernels;

pub(crate) static REFERENCE_KERNELS: ReferenceKernels = ReferenceKernels;

#[cfg(feature = "accel")]
static ACCELERATED_KERNELS: AcceleratedKernels = AcceleratedKernels;

/// 加速插值核是否已编译进来
pub fn is_acceleration_available() -> bool {
    cfg!(feature = "accel")
}

/// 后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// 有加速实现时用加速实现, 否则回退参考实现
    #[default]
    Auto,
    /// 逐样本参考实现
    Reference,
    /// 按相位特化的加速实现
    Accelerated,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Reference => "reference",
            Self::Accelerated => "accelerated",
        };
        f.write_str(name)
    }
}

impl FromStr for BackendKind {
    type Err = McError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "reference" | "ref" => Ok(Self::Reference),
            "accelerated" | "accel" => Ok(Self::Accelerated),
            other => Err(McError::InvalidArgument(format!("未知插值后端: {other}"))),
        }
    }
}

/// 插值配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpConfig {
    /// 后端类型
    pub backend: BackendKind,
}

/// 按后端类型取插值核
pub fn select_kernels(kind: BackendKind) -> McResult<&'static dyn InterpKernels> {
    let kernels: &'static dyn InterpKernels = match kind {
        BackendKind::Reference => &REFERENCE_KERNELS,
        BackendKind::Accelerated => accelerated_kernels().ok_or_else(|| {
            McError::Unsupported("加速插值核未编译 (需要启用 feature `accel`)".into())
        })?,
        BackendKind::Auto => match accelerated_kernels() {
            Some(kernels) => kernels,
            None => {
                warn!("加速插值核不可用, 回退参考实现");
                &REFERENCE_KERNELS
            }
        },
    };
    debug!("插值后端: 请求 {kind}, 选用 {}", kernels.name());
    Ok(kernels)
}

#[cfg(feature = "accel")]
fn accelerated_kernels() -> Option<&'static dyn InterpKernels> {
    Some(&ACCELERATED_KERNELS)
}

#[cfg(not(feature = "accel"))]
fn accelerated_kernels() -> Option<&'static dyn InterpKernels> {
    None
}
