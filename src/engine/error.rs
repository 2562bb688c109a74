// ==========================================
// 物流决策支持引擎 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 只有输入格式错误才是失败; 空结果走显式结果枚举,不走错误
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    // ===== 输入格式错误 =====
    #[error("重复记录: {source_name} 中 order_id={order_id} 出现多次")]
    DuplicateRecord {
        source_name: String,
        order_id: String,
    },

    #[error("记录格式错误 ({entity} {id}): {message}")]
    MalformedRecord {
        entity: String,
        id: String,
        message: String,
    },

    // ===== 参数错误 =====
    #[error("参数无效 ({name}={value}): {message}")]
    InvalidArgument {
        name: String,
        value: String,
        message: String,
    },
}

impl EngineError {
    pub fn malformed(entity: &str, id: &str, message: impl Into<String>) -> Self {
        EngineError::MalformedRecord {
            entity: entity.to_string(),
            id: id.to_string(),
            message: message.into(),
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
