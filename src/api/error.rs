// ==========================================
// 物流决策支持引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，汇总引擎/导入错误为用户友好的错误消息
// ==========================================

use crate::domain::dataset::SourceKind;
use crate::engine::error::EngineError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 报告所需数据源缺失或联表为空
    #[error("数据不可用: {reason}")]
    DataUnavailable {
        missing: Vec<SourceKind>,
        reason: String,
    },

    // ==========================================
    // 下层错误
    // ==========================================
    #[error("引擎错误: {0}")]
    Engine(#[from] EngineError),

    #[error("数据导入失败: {0}")]
    Import(#[from] ImportError),
}

impl ApiError {
    pub fn missing_source(kind: SourceKind) -> Self {
        ApiError::DataUnavailable {
            missing: vec![kind],
            reason: format!("数据源缺失: {}", kind),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
