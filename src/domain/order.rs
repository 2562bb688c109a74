// ==========================================
// 物流决策支持引擎 - 订单领域模型
// ==========================================
// 职责: 订单 / 成本明细 / 交付表现 + 派生财务指标
// 红线: 源记录加载后不可变,派生指标每次调用重新计算
// ==========================================

use crate::domain::types::MarginPercent;
use serde::{Deserialize, Serialize};

// ==========================================
// Order - 订单（一行一票货）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,         // 订单号（关联键）
    pub origin: String,           // 发货地
    pub destination: String,      // 目的地
    pub product_category: String, // 品类
    pub order_value: f64,         // 申报价值（INR）
}

// ==========================================
// CostRecord - 成本明细（与订单一对一）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub order_id: String,

    // ===== 七项成本 =====
    pub fuel_cost: f64,
    pub labor_cost: f64,
    pub vehicle_maintenance: f64,
    pub insurance: f64,
    pub packaging_cost: f64,
    pub technology_platform_fee: f64,
    pub other_overhead: f64,
}

impl CostRecord {
    /// 七项成本合计
    pub fn total(&self) -> f64 {
        self.fuel_cost
            + self.labor_cost
            + self.vehicle_maintenance
            + self.insurance
            + self.packaging_cost
            + self.technology_platform_fee
            + self.other_overhead
    }
}

// ==========================================
// DeliveryPerformance - 交付表现（与订单一对一）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPerformance {
    pub order_id: String,
    pub carrier: String,           // 承运商
    pub actual_delivery_days: f64, // 实际交付时长（天）
    pub delivery_status: String,   // 交付状态（On-Time / Delayed / ...）
}

// ==========================================
// OrderMetrics - 订单财务指标（派生）
// ==========================================
// 不变式: net_profit + total_cost == order_value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderMetrics {
    pub total_cost: f64,
    pub net_profit: f64,
    pub margin: MarginPercent,
}

// ==========================================
// JoinedOrder - 订单联表视图（一行）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedOrder {
    pub order_id: String,
    pub origin: String,
    pub destination: String,
    pub product_category: String,
    pub order_value: f64,
    pub carrier: String,
    pub actual_delivery_days: f64,
    pub delivery_status: String,
    pub route: String, // 订单级路线标签（"Origin-Destination"）
    pub metrics: OrderMetrics,
}

// ==========================================
// JoinedOrderView - 订单联表视图
// ==========================================
// 顺序: 与订单输入顺序一致
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinedOrderView {
    pub orders: Vec<JoinedOrder>,
}

impl JoinedOrderView {
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// 按路线标签过滤
    pub fn for_route<'a>(&'a self, route: &'a str) -> impl Iterator<Item = &'a JoinedOrder> + 'a {
        self.orders.iter().filter(move |o| o.route == route)
    }
}
