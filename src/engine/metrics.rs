// ==========================================
// 物流决策支持引擎 - 指标派生 (Metric Deriver)
// ==========================================
// 职责: 订单财务指标（总成本 / 净利润 / 利润率）
//       库存状态判定（CRITICAL_LOW / OVERSTOCKED / HEALTHY）
// 红线: 利润率逐单计算后再分组; 申报价值为 0 时利润率显式标记为未定义
// 红线: 超储倍数 3× 为固定口径,不可配置
// ==========================================

use crate::config::policy::OVERSTOCK_MULTIPLIER;
use crate::domain::order::{
    CostRecord, DeliveryPerformance, JoinedOrder, JoinedOrderView, Order, OrderMetrics,
};
use crate::domain::route::RouteRecord;
use crate::domain::types::{InventoryStatus, MarginPercent};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::record_joiner::{join_orders, JoinOutcome, JoinedSource};
use tracing::{info, instrument};

// ==========================================
// 订单财务指标
// ==========================================

/// 计算单个订单的财务指标
///
/// - total_cost = 七项成本之和
/// - net_profit = order_value - total_cost
/// - margin = net_profit / order_value × 100（order_value = 0 → Undefined）
pub fn compute_order_metrics(order_value: f64, cost: &CostRecord) -> OrderMetrics {
    let total_cost = cost.total();
    let net_profit = order_value - total_cost;

    OrderMetrics {
        total_cost,
        net_profit,
        margin: MarginPercent::from_profit(net_profit, order_value),
    }
}

/// 订单联表 + 财务指标派生
///
/// # 返回
/// - Ok(Joined(JoinedOrderView)): 联表视图,顺序与订单输入一致
/// - Ok(DataUnavailable): 数据源缺失或联表为空
/// - Err: order_id 重复,或金额字段不是有限数
#[instrument(skip_all)]
pub fn derive_order_metrics(
    orders: Option<&[Order]>,
    costs: Option<&[CostRecord]>,
    performance: Option<&[DeliveryPerformance]>,
    routes: Option<&[RouteRecord]>,
) -> EngineResult<JoinOutcome<JoinedOrderView>> {
    let rows = match join_orders(orders, costs, performance, routes)? {
        JoinOutcome::Joined(rows) => rows,
        JoinOutcome::DataUnavailable { missing, reason } => {
            return Ok(JoinOutcome::DataUnavailable { missing, reason });
        }
    };

    let orders = rows
        .into_iter()
        .map(joined_order_from)
        .collect::<EngineResult<Vec<_>>>()?;

    let undefined = orders.iter().filter(|o| !o.metrics.margin.is_defined()).count();
    info!(orders = orders.len(), undefined_margin = undefined, "订单指标派生完成");

    Ok(JoinOutcome::Joined(JoinedOrderView { orders }))
}

fn joined_order_from(row: JoinedSource<'_>) -> EngineResult<JoinedOrder> {
    let order = row.order;
    if !order.order_value.is_finite() {
        return Err(EngineError::malformed(
            "order",
            &order.order_id,
            format!("申报价值不是有限数: {}", order.order_value),
        ));
    }
    if !row.cost.total().is_finite() {
        return Err(EngineError::malformed(
            "cost_breakdown",
            &order.order_id,
            "成本合计不是有限数",
        ));
    }

    Ok(JoinedOrder {
        order_id: order.order_id.clone(),
        origin: order.origin.clone(),
        destination: order.destination.clone(),
        product_category: order.product_category.clone(),
        order_value: order.order_value,
        carrier: row.performance.carrier.clone(),
        actual_delivery_days: row.performance.actual_delivery_days,
        delivery_status: row.performance.delivery_status.clone(),
        route: row.route.route.clone(),
        metrics: compute_order_metrics(order.order_value, row.cost),
    })
}

// ==========================================
// 库存状态判定
// ==========================================

/// 库存状态判定（纯函数,仅依赖 current_stock 与 reorder_level）
///
/// 顺序:
/// 1) current_stock < reorder_level → CRITICAL_LOW
/// 2) current_stock > reorder_level × 3 → OVERSTOCKED
/// 3) 其他 → HEALTHY
pub fn classify_stock(current_stock: u64, reorder_level: u64) -> InventoryStatus {
    if current_stock < reorder_level {
        InventoryStatus::CriticalLow
    } else if current_stock > reorder_level.saturating_mul(OVERSTOCK_MULTIPLIER) {
        InventoryStatus::Overstocked
    } else {
        InventoryStatus::Healthy
    }
}
