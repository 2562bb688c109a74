// ==========================================
// 物流决策支持引擎 - 源数据集
// ==========================================
// 职责: 承载六类已解析源记录（由导入层提供） + 数据质量报告
// 说明: None 表示该数据源缺失,下游以 DataUnavailable 处理
// ==========================================

use crate::domain::inventory::InventoryRecord;
use crate::domain::order::{CostRecord, DeliveryPerformance, Order};
use crate::domain::route::RouteRecord;
use crate::domain::vehicle::Vehicle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 数据源标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Orders,
    Costs,
    Performance,
    Routes,
    Inventory,
    Vehicles,
}

impl SourceKind {
    pub const ALL: [SourceKind; 6] = [
        SourceKind::Orders,
        SourceKind::Costs,
        SourceKind::Performance,
        SourceKind::Routes,
        SourceKind::Inventory,
        SourceKind::Vehicles,
    ];
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Orders => write!(f, "orders"),
            SourceKind::Costs => write!(f, "cost_breakdown"),
            SourceKind::Performance => write!(f, "delivery_performance"),
            SourceKind::Routes => write!(f, "routes_distance"),
            SourceKind::Inventory => write!(f, "warehouse_inventory"),
            SourceKind::Vehicles => write!(f, "vehicle_fleet"),
        }
    }
}

// ==========================================
// SourceDataset - 六类源记录快照
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDataset {
    pub orders: Option<Vec<Order>>,
    pub costs: Option<Vec<CostRecord>>,
    pub performance: Option<Vec<DeliveryPerformance>>,
    pub routes: Option<Vec<RouteRecord>>,
    pub inventory: Option<Vec<InventoryRecord>>,
    pub vehicles: Option<Vec<Vehicle>>,
}

impl SourceDataset {
    /// 列出缺失的数据源
    pub fn missing_sources(&self) -> Vec<SourceKind> {
        SourceKind::ALL
            .into_iter()
            .filter(|kind| !self.has(*kind))
            .collect()
    }

    pub fn has(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Orders => self.orders.is_some(),
            SourceKind::Costs => self.costs.is_some(),
            SourceKind::Performance => self.performance.is_some(),
            SourceKind::Routes => self.routes.is_some(),
            SourceKind::Inventory => self.inventory.is_some(),
            SourceKind::Vehicles => self.vehicles.is_some(),
        }
    }
}

// ==========================================
// DqLevel - 数据质量级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DqLevel {
    Error,   // 错误（引擎会拒绝该数据源）
    Warning, // 警告（记录会被联表丢弃或结果受影响）
    Info,    // 提示（仅记录）
}

// ==========================================
// DqViolation - 数据质量违规记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DqViolation {
    pub source: SourceKind,
    pub row_number: usize,         // 数据行号（不含表头,从 1 开始）
    pub record_id: Option<String>, // 订单号 / 车辆号 / 仓库（如可识别）
    pub level: DqLevel,
    pub field: String,
    pub message: String,
}

// ==========================================
// DqSummary / DqReport - 数据质量报告
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DqSummary {
    pub total_rows: usize,
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DqReport {
    pub missing_sources: Vec<SourceKind>,
    pub summary: DqSummary,
    pub violations: Vec<DqViolation>,
}

impl DqReport {
    pub fn has_errors(&self) -> bool {
        self.summary.error > 0
    }
}
