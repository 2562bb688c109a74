// ==========================================
// 物流决策支持引擎 - 核心库
// ==========================================
// 技术栈: Rust + CSV/Excel 数据集
// 系统定位: 决策支持系统 (推荐仅供参考,人工最终决策)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则（纯计算,不做 I/O）
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{InventoryStatus, MarginPercent, RankLabel, VehicleStatus};

// 领域实体
pub use domain::{
    CarrierAnalysis, CarrierStats, CostRecord, DeliveryPerformance, InventoryRecord,
    InventoryStatusEntry, JoinedOrderView, Order, RouteCandidate, RouteRecord,
    RouteScopedRanking, SourceDataset, SourceKind, SwitchProjection, TransferRecommendation,
    Vehicle,
};

// 引擎
pub use engine::{
    derive_order_metrics, EngineError, EngineResult, InventoryEngine, ProfitabilityEngine,
    RouteSelectionEngine,
};

// API
pub use api::{ApiError, ApiResult, LogisticsApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "物流决策支持引擎";
