// ==========================================
// 物流决策支持引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: JSON 配置文件（扁平 key-value）
// 优先级: 运行时覆写 > 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::config::policy::DEFAULT_SWITCH_PERCENT;
use crate::domain::dataset::SourceKind;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const DATA_DIR: &str = "data_dir";
    pub const DEFAULT_SWITCH_PERCENT: &str = "default_switch_percent";
    pub const LOG_LEVEL: &str = "log_level";
    pub const LOG_JSON: &str = "log_json";

    /// 数据源文件名（不含扩展名）: file.<source>
    pub const FILE_PREFIX: &str = "file.";
}

/// 数据目录环境变量
pub const DATA_DIR_ENV: &str = "SHIPLYTICS_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "datasets";
const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件格式错误: {0}")]
    ParseError(String),

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// DatasetFileNames - 数据源文件名（不含扩展名）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFileNames {
    stems: HashMap<SourceKind, String>,
}

impl Default for DatasetFileNames {
    fn default() -> Self {
        Self {
            stems: SourceKind::ALL
                .into_iter()
                .map(|kind| (kind, kind.to_string()))
                .collect(),
        }
    }
}

impl DatasetFileNames {
    pub fn stem_for(&self, kind: SourceKind) -> String {
        self.stems
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| kind.to_string())
    }

    pub fn with_stem(mut self, kind: SourceKind, stem: impl Into<String>) -> Self {
        self.stems.insert(kind, stem.into());
        self
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
    overrides: HashMap<String, String>,
    source_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 空配置（全部走默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 默认配置文件路径: <config_dir>/shiplytics/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shiplytics").join("config.json"))
    }

    /// 从 JSON 配置文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut manager = Self::from_json_str(&content)?;
        manager.source_path = Some(path.to_path_buf());
        debug!(path = %path.display(), keys = manager.values.len(), "配置文件已加载");
        Ok(manager)
    }

    /// 加载配置; 未指定路径时使用默认路径, 文件不存在时使用默认配置
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        let candidate = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_config_path(),
        };

        match candidate {
            Some(p) if p.exists() => Self::load(p),
            Some(p) if path.is_some() => Err(ConfigError::ReadError {
                path: p.display().to_string(),
                message: "文件不存在".to_string(),
            }),
            _ => {
                debug!("未找到配置文件,使用默认配置");
                Ok(Self::new())
            }
        }
    }

    /// 从 JSON 字符串解析（顶层必须是对象,值为字符串/数字/布尔）
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let mut values = HashMap::with_capacity(map.len());
        for (key, value) in map {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => continue,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key,
                        value: other.to_string(),
                        message: "仅支持字符串/数字/布尔值".to_string(),
                    })
                }
            };
            values.insert(key, text);
        }

        Ok(Self {
            values,
            overrides: HashMap::new(),
            source_path: None,
        })
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// 运行时覆写（如命令行参数）
    pub fn set_override(&mut self, key: &str, value: impl Into<String>) {
        self.overrides.insert(key.to_string(), value.into());
    }

    /// 读取配置值
    ///
    /// 优先级: 运行时覆写 > 环境变量（仅 data_dir）> 配置文件
    pub fn get_config_value(&self, key: &str) -> Option<String> {
        if let Some(v) = self.overrides.get(key) {
            return Some(v.clone());
        }
        if key == config_keys::DATA_DIR {
            if let Ok(v) = std::env::var(DATA_DIR_ENV) {
                if !v.trim().is_empty() {
                    return Some(v);
                }
            }
        }
        self.values.get(key).cloned()
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .unwrap_or_else(|| default.to_string())
    }

    // ===== 类型化读取 =====

    /// 数据目录（默认 ./datasets）
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(self.get_config_or_default(config_keys::DATA_DIR, DEFAULT_DATA_DIR))
    }

    /// 切换模拟默认比例; 格式错误或越界时回退到默认值
    pub fn default_switch_percent(&self) -> f64 {
        let value = self.get_config_or_default(
            config_keys::DEFAULT_SWITCH_PERCENT,
            &DEFAULT_SWITCH_PERCENT.to_string(),
        );
        match value.parse::<f64>() {
            Ok(p) if (0.0..=100.0).contains(&p) => p,
            _ => {
                warn!(raw_value = %value, "切换比例配置无效，使用默认值");
                DEFAULT_SWITCH_PERCENT
            }
        }
    }

    pub fn log_level(&self) -> String {
        self.get_config_or_default(config_keys::LOG_LEVEL, DEFAULT_LOG_LEVEL)
    }

    pub fn log_json(&self) -> bool {
        let value = self.get_config_or_default(config_keys::LOG_JSON, "false");
        matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
    }

    /// 数据源文件名（file.orders / file.cost_breakdown / ...）
    pub fn dataset_file_names(&self) -> DatasetFileNames {
        SourceKind::ALL
            .into_iter()
            .fold(DatasetFileNames::default(), |names, kind| {
                let key = format!("{}{}", config_keys::FILE_PREFIX, kind);
                match self.get_config_value(&key) {
                    Some(stem) if !stem.trim().is_empty() => names.with_stem(kind, stem.trim()),
                    _ => names,
                }
            })
    }

    /// 生效配置快照（JSON,按 key 排序）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let mut snapshot: BTreeMap<String, String> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        snapshot.insert(
            config_keys::DATA_DIR.to_string(),
            self.data_dir().display().to_string(),
        );
        snapshot.insert(
            config_keys::DEFAULT_SWITCH_PERCENT.to_string(),
            self.default_switch_percent().to_string(),
        );
        snapshot.insert(config_keys::LOG_LEVEL.to_string(), self.log_level());
        snapshot.insert(config_keys::LOG_JSON.to_string(), self.log_json().to_string());
        for (k, v) in &self.overrides {
            snapshot.insert(k.clone(), v.clone());
        }

        serde_json::to_string(&snapshot).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
