// ==========================================
// 物流决策支持引擎 - 导入层
// ==========================================
// 职责: 外部数据导入,生成六类源记录
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod dataset_importer_trait;
pub mod dataset_loader;
pub mod dq_validator;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// 重导出核心类型
pub use dataset_loader::DatasetLoader;
pub use dq_validator::DatasetDqValidator;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};

// 重导出 Trait 接口
pub use dataset_importer_trait::{DatasetImporter, DqValidator, FileParser, RawRow, RecordMapper};
