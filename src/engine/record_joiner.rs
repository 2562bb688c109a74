// ==========================================
// 物流决策支持引擎 - 联表器 (Record Joiner)
// ==========================================
// 职责: 订单 + 成本 + 交付表现 + 订单级路线 → 订单联表行
//       订单 → 发货地 × 品类需求视图
// 红线: 内连接语义,任一侧缺失即丢弃该订单; 数据源缺失不做部分联表
// ==========================================

use crate::domain::dataset::SourceKind;
use crate::domain::inventory::DemandView;
use crate::domain::order::{CostRecord, DeliveryPerformance, Order};
use crate::domain::route::RouteRecord;
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

// ==========================================
// JoinOutcome - 联表结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum JoinOutcome<T> {
    Joined(T),
    DataUnavailable {
        missing: Vec<SourceKind>, // 缺失的数据源（联表结果为空时为空列表）
        reason: String,
    },
}

impl<T> JoinOutcome<T> {
    pub fn joined(self) -> Option<T> {
        match self {
            JoinOutcome::Joined(v) => Some(v),
            JoinOutcome::DataUnavailable { .. } => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, JoinOutcome::DataUnavailable { .. })
    }
}

/// 一条订单联表行（借用源记录）
#[derive(Debug, Clone, Copy)]
pub struct JoinedSource<'a> {
    pub order: &'a Order,
    pub cost: &'a CostRecord,
    pub performance: &'a DeliveryPerformance,
    pub route: &'a RouteRecord,
}

// ==========================================
// 订单联表
// ==========================================

/// 订单联表
///
/// 顺序与订单输入一致; 成本/交付/路线任一缺失的订单被丢弃
///
/// # 返回
/// - Ok(Joined): 至少一行联表结果
/// - Ok(DataUnavailable): 数据源缺失或联表为空
/// - Err(DuplicateRecord): 一对一数据源中 order_id 重复
#[instrument(skip_all)]
pub fn join_orders<'a>(
    orders: Option<&'a [Order]>,
    costs: Option<&'a [CostRecord]>,
    performance: Option<&'a [DeliveryPerformance]>,
    routes: Option<&'a [RouteRecord]>,
) -> EngineResult<JoinOutcome<Vec<JoinedSource<'a>>>> {
    let mut missing = Vec::new();
    if orders.is_none() {
        missing.push(SourceKind::Orders);
    }
    if costs.is_none() {
        missing.push(SourceKind::Costs);
    }
    if performance.is_none() {
        missing.push(SourceKind::Performance);
    }
    if routes.is_none() {
        missing.push(SourceKind::Routes);
    }

    let (Some(orders), Some(costs), Some(performance), Some(routes)) =
        (orders, costs, performance, routes)
    else {
        warn!(?missing, "数据源缺失,跳过联表");
        let reason = format!(
            "数据源缺失: {}",
            missing.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(", ")
        );
        return Ok(JoinOutcome::DataUnavailable { missing, reason });
    };

    let cost_index = index_by_order_id(SourceKind::Costs, costs, |c| Some(c.order_id.as_str()))?;
    let perf_index =
        index_by_order_id(SourceKind::Performance, performance, |p| Some(p.order_id.as_str()))?;
    let route_index = index_by_order_id(SourceKind::Routes, routes, |r| r.order_id.as_deref())?;

    let joined: Vec<JoinedSource<'a>> = orders
        .iter()
        .filter_map(|order| {
            let id = order.order_id.as_str();
            Some(JoinedSource {
                order,
                cost: *cost_index.get(id)?,
                performance: *perf_index.get(id)?,
                route: *route_index.get(id)?,
            })
        })
        .collect();

    debug!(
        orders = orders.len(),
        joined = joined.len(),
        dropped = orders.len() - joined.len(),
        "订单联表完成"
    );

    if joined.is_empty() {
        return Ok(JoinOutcome::DataUnavailable {
            missing: Vec::new(),
            reason: "联表结果为空: 没有订单同时匹配成本、交付与路线记录".to_string(),
        });
    }

    Ok(JoinOutcome::Joined(joined))
}

/// 按 order_id 建索引（一对一数据源,重复即报错）
fn index_by_order_id<'a, T, F>(
    kind: SourceKind,
    records: &'a [T],
    key: F,
) -> EngineResult<HashMap<&'a str, &'a T>>
where
    F: Fn(&'a T) -> Option<&'a str>,
{
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        let Some(id) = key(record) else {
            continue;
        };
        if index.insert(id, record).is_some() {
            return Err(EngineError::DuplicateRecord {
                source_name: kind.to_string(),
                order_id: id.to_string(),
            });
        }
    }
    Ok(index)
}

// ==========================================
// 需求视图
// ==========================================

/// 按发货地 × 品类统计订单数
///
/// 订单数据源缺失时返回 DataUnavailable; 订单为空时返回空视图
#[instrument(skip_all)]
pub fn build_demand_view(orders: Option<&[Order]>) -> JoinOutcome<DemandView> {
    let Some(orders) = orders else {
        return JoinOutcome::DataUnavailable {
            missing: vec![SourceKind::Orders],
            reason: "数据源缺失: orders".to_string(),
        };
    };

    let mut view = DemandView::new();
    for order in orders {
        view.record(&order.origin, &order.product_category);
    }
    debug!(groups = view.len(), "需求视图构建完成");

    JoinOutcome::Joined(view)
}
