// ==========================================
// 物流决策支持引擎 - 配置层
// ==========================================
// 职责: 运行配置管理（数据目录 / 日志 / 默认参数）
//       固定业务口径常量（policy）
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod policy;

// 重导出核心配置管理器
pub use config_manager::{
    config_keys, ConfigError, ConfigManager, ConfigResult, DatasetFileNames, DATA_DIR_ENV,
};
