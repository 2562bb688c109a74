// ==========================================
// 物流决策支持引擎 - 引擎层
// ==========================================
// 职责: 联表 / 指标派生 / 三个推荐引擎
// 红线: 引擎层不做 I/O, 只消费已加载的内存记录
// 红线: 空结果走显式结果枚举, 只有输入格式错误才返回 Err
// ==========================================

pub mod error;
pub mod inventory;
pub mod metrics;
pub mod profitability;
pub mod record_joiner;
pub mod route_selection;
pub mod transfer_matcher;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use inventory::InventoryEngine;
pub use metrics::{classify_stock, compute_order_metrics, derive_order_metrics};
pub use profitability::{CarrierAnalysisOutcome, ProfitabilityEngine, SwitchOutcome};
pub use record_joiner::{build_demand_view, join_orders, JoinOutcome, JoinedSource};
pub use route_selection::{
    RouteSelectionEngine, RouteSelectionOutcome, VehicleRecommendationOutcome,
};
pub use transfer_matcher::{FirstSurplusMatcher, TransferMatcher};
