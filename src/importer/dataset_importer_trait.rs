// ==========================================
// 物流决策支持引擎 - 数据集导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// ==========================================

use crate::domain::dataset::{DqReport, SourceDataset};
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// 一行原始记录: 表头 → 单元格文本（已去除首尾空白）
pub type RawRow = HashMap<String, String>;

// ==========================================
// DatasetImporter Trait
// ==========================================
// 用途: 数据集导入主接口
// 实现者: DatasetLoader
#[async_trait]
pub trait DatasetImporter: Send + Sync {
    /// 从数据目录加载六类数据源（并发执行）
    ///
    /// # 返回
    /// - Ok(SourceDataset): 文件缺失的数据源为 None
    /// - Err: 目录不存在、文件解析失败、字段类型错误
    async fn load_dataset(&self, data_dir: &Path) -> ImportResult<SourceDataset>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始记录（跳过完全空白的行）
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// RecordMapper Trait
// ==========================================
// 用途: 原始行 → 领域记录（阶段 1）
// 实现者: FieldMapper（每类源记录一个实现）
pub trait RecordMapper<T>: Send + Sync {
    /// # 参数
    /// - row: 原始行
    /// - row_number: 数据行号（不含表头,从 1 开始）
    fn map_row(&self, row: &RawRow, row_number: usize) -> ImportResult<T>;
}

// ==========================================
// DqValidator Trait
// ==========================================
// 用途: 数据质量校验（阶段 2）
// 实现者: DatasetDqValidator
pub trait DqValidator: Send + Sync {
    /// 校验整个数据集,生成 DQ 报告
    fn validate(&self, dataset: &SourceDataset) -> DqReport;
}
