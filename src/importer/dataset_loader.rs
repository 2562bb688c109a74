// ==========================================
// 物流决策支持引擎 - 数据集加载器
// ==========================================
// 职责: 数据目录 → SourceDataset（六类数据源）
// 流程: 查找文件 → 解析原始行 → 字段映射 → DQ 校验（仅记录,不阻断）
// 说明: 数据源文件缺失 → 该数据源为 None（不是错误）
//       文件按扩展名优先级查找: .csv > .xlsx > .xls
// ==========================================

use crate::config::DatasetFileNames;
use crate::domain::dataset::{DqLevel, DqReport, SourceDataset, SourceKind};
use crate::importer::dataset_importer_trait::{DatasetImporter, DqValidator, RecordMapper};
use crate::importer::dq_validator::DatasetDqValidator;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use async_trait::async_trait;
use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

// 单个数据源的加载结果
enum LoadedSource {
    Orders(Option<Vec<crate::domain::order::Order>>),
    Costs(Option<Vec<crate::domain::order::CostRecord>>),
    Performance(Option<Vec<crate::domain::order::DeliveryPerformance>>),
    Routes(Option<Vec<crate::domain::route::RouteRecord>>),
    Inventory(Option<Vec<crate::domain::inventory::InventoryRecord>>),
    Vehicles(Option<Vec<crate::domain::vehicle::Vehicle>>),
}

// ==========================================
// DatasetLoader - 数据集加载器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    files: DatasetFileNames,
    parser: UniversalFileParser,
    mapper: FieldMapper,
    validator: DatasetDqValidator,
}

impl DatasetLoader {
    pub fn new(files: DatasetFileNames) -> Self {
        Self {
            files,
            ..Self::default()
        }
    }

    /// 查找数据源文件（不存在返回 None）
    pub fn resolve_path(&self, data_dir: &Path, kind: SourceKind) -> Option<PathBuf> {
        let stem = self.files.stem_for(kind);
        UniversalFileParser::supported_extensions()
            .iter()
            .map(|ext| data_dir.join(format!("{}.{}", stem, ext)))
            .find(|p| p.is_file())
    }

    /// 加载单个数据源
    ///
    /// # 返回
    /// - Ok(None): 文件不存在
    /// - Ok(Some(records)): 解析成功（顺序与文件行顺序一致）
    /// - Err: 解析或字段映射失败
    pub fn load_source<T>(&self, data_dir: &Path, kind: SourceKind) -> ImportResult<Option<Vec<T>>>
    where
        FieldMapper: RecordMapper<T>,
    {
        let Some(path) = self.resolve_path(data_dir, kind) else {
            warn!(source = %kind, dir = %data_dir.display(), "数据源文件缺失");
            return Ok(None);
        };

        let rows = self.parser.parse(&path)?;
        let records = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                self.mapper
                    .map_row(row, idx + 1)
                    .map_err(|e| e.with_source(&kind.to_string()))
            })
            .collect::<ImportResult<Vec<T>>>()?;

        debug!(source = %kind, path = %path.display(), rows = records.len(), "数据源加载完成");
        Ok(Some(records))
    }

    fn load_payload(&self, data_dir: &Path, kind: SourceKind) -> ImportResult<LoadedSource> {
        Ok(match kind {
            SourceKind::Orders => LoadedSource::Orders(self.load_source(data_dir, kind)?),
            SourceKind::Costs => LoadedSource::Costs(self.load_source(data_dir, kind)?),
            SourceKind::Performance => LoadedSource::Performance(self.load_source(data_dir, kind)?),
            SourceKind::Routes => LoadedSource::Routes(self.load_source(data_dir, kind)?),
            SourceKind::Inventory => LoadedSource::Inventory(self.load_source(data_dir, kind)?),
            SourceKind::Vehicles => LoadedSource::Vehicles(self.load_source(data_dir, kind)?),
        })
    }

    fn assemble(payloads: Vec<LoadedSource>) -> SourceDataset {
        let mut dataset = SourceDataset::default();
        for payload in payloads {
            match payload {
                LoadedSource::Orders(v) => dataset.orders = v,
                LoadedSource::Costs(v) => dataset.costs = v,
                LoadedSource::Performance(v) => dataset.performance = v,
                LoadedSource::Routes(v) => dataset.routes = v,
                LoadedSource::Inventory(v) => dataset.inventory = v,
                LoadedSource::Vehicles(v) => dataset.vehicles = v,
            }
        }
        dataset
    }

    fn ensure_dir(data_dir: &Path) -> ImportResult<()> {
        if data_dir.is_dir() {
            Ok(())
        } else {
            Err(ImportError::DataDirNotFound(data_dir.display().to_string()))
        }
    }

    /// 同步加载整个数据目录（逐个数据源）
    #[instrument(skip(self), fields(dir = %data_dir.display()))]
    pub fn load_dir(&self, data_dir: &Path) -> ImportResult<SourceDataset> {
        Self::ensure_dir(data_dir)?;

        let payloads = SourceKind::ALL
            .into_iter()
            .map(|kind| self.load_payload(data_dir, kind))
            .collect::<ImportResult<Vec<_>>>()?;

        let dataset = Self::assemble(payloads);
        self.log_quality(&dataset);
        Ok(dataset)
    }

    /// 数据质量校验
    pub fn validate(&self, dataset: &SourceDataset) -> DqReport {
        self.validator.validate(dataset)
    }

    fn log_quality(&self, dataset: &SourceDataset) {
        let report = self.validate(dataset);
        for v in report.violations.iter().filter(|v| v.level == DqLevel::Error) {
            warn!(
                source = %v.source,
                row = v.row_number,
                field = %v.field,
                message = %v.message,
                "数据质量错误"
            );
        }
        info!(
            total_rows = report.summary.total_rows,
            errors = report.summary.error,
            warnings = report.summary.warning,
            missing = report.missing_sources.len(),
            "数据集加载完成"
        );
    }
}

// ==========================================
// DatasetImporter Trait 实现（并发加载）
// ==========================================
#[async_trait]
impl DatasetImporter for DatasetLoader {
    async fn load_dataset(&self, data_dir: &Path) -> ImportResult<SourceDataset> {
        Self::ensure_dir(data_dir)?;
        let started = Instant::now();

        // 每个数据源一个阻塞任务（文件 I/O + 解析）
        let tasks = SourceKind::ALL.into_iter().map(|kind| {
            let loader = self.clone();
            let dir = data_dir.to_path_buf();
            async move {
                tokio::task::spawn_blocking(move || loader.load_payload(&dir, kind))
                    .await
                    .map_err(|e| ImportError::TaskJoinError {
                        source_name: kind.to_string(),
                        message: e.to_string(),
                    })?
            }
        });

        let payloads = try_join_all(tasks).await?;
        let dataset = Self::assemble(payloads);
        self.log_quality(&dataset);

        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "并发加载耗时");
        Ok(dataset)
    }
}
