// ==========================================
// 物流决策支持引擎 - 领域模型层
// ==========================================
// 职责: 定义源记录、派生值对象、领域类型
// 红线: 不含文件读取逻辑,不含引擎逻辑
// ==========================================

pub mod carrier;
pub mod dataset;
pub mod inventory;
pub mod order;
pub mod route;
pub mod types;
pub mod vehicle;

// 重导出核心类型
pub use carrier::{CarrierAnalysis, CarrierStats, RouteProfitSummary, SwitchProjection};
pub use dataset::{DqLevel, DqReport, DqSummary, DqViolation, SourceDataset, SourceKind};
pub use inventory::{
    DemandCount, DemandView, InventoryRecord, InventoryStatusCounts, InventoryStatusEntry,
    TransferRecommendation,
};
pub use order::{CostRecord, DeliveryPerformance, JoinedOrder, JoinedOrderView, Order, OrderMetrics};
pub use route::{RouteCandidate, RouteNetworkStats, RouteRecord, RouteSelection};
pub use types::{InventoryStatus, MarginPercent, RankLabel, VehicleStatus};
pub use vehicle::{
    RankedVehicle, RouteScopedRanking, ScoreNormalization, Vehicle, VehicleScore,
};
