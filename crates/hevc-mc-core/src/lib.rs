//! # hevc-mc-core
//!
//! HEVC 运动补偿核心库, 提供插值核共用的基础类型.
//!
//! - 统一错误类型 ([`McError`])
//! - 像素值域裁剪与中间精度常量 ([`pixel`])
//! - 预测块几何、参考列表选择与分数相位 ([`block`])
//! - 参考块视图与调用方持有的预测缓冲区 ([`buffer`])

pub mod block;
pub mod buffer;
pub mod error;
pub mod pixel;

// 重导出常用类型
pub use block::{BlockSize, MAX_PB_SIZE, PhasePair, PredList};
pub use buffer::{PredBuffers, RefPatch, SampleBuffers};
pub use error::{McError, McResult};
pub use pixel::clip_pixel;
