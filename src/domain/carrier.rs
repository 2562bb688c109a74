// ==========================================
// 物流决策支持引擎 - 承运商领域模型
// ==========================================
// 职责: 承运商按路线聚合统计 / 路线利润摘要 / 切换模拟结果
// ==========================================

use crate::domain::types::MarginPercent;
use serde::{Deserialize, Serialize};

// ==========================================
// CarrierStats - 单条路线上单个承运商的聚合统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierStats {
    pub route: String,
    pub carrier: String,
    pub order_count: usize,
    pub mean_net_profit: f64,
    pub mean_delivery_days: f64,
    pub mean_margin: MarginPercent, // 仅统计利润率已定义的订单
}

// ==========================================
// RouteProfitSummary - 路线利润摘要（KPI）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteProfitSummary {
    pub route: String,
    pub total_orders: usize,
    pub total_profit: f64,
    pub profit_per_order: f64,
    pub average_margin: MarginPercent,
    pub loss_making_orders: usize, // net_profit < 0
}

// ==========================================
// CarrierAnalysis - 路线承运商分析结果
// ==========================================
// best/worst 为 stats 中的副本; 单一承运商时二者相同
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierAnalysis {
    pub route: String,
    pub stats: Vec<CarrierStats>,
    pub best: CarrierStats,
    pub worst: CarrierStats,
    pub summary: RouteProfitSummary,
}

impl CarrierAnalysis {
    /// 是否存在切换机会（最优与最差不是同一承运商）
    pub fn has_switch_opportunity(&self) -> bool {
        self.best.carrier != self.worst.carrier
    }
}

// ==========================================
// SwitchProjection - 承运商切换模拟（what-if，不落库）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchProjection {
    pub from_carrier: String,
    pub to_carrier: String,
    pub switch_percent: f64,
    pub orders_to_move: u64,
    pub profit_gap_per_order: f64,
    pub projected_savings: f64,
}
