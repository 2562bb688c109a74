// ==========================================
// 物流决策支持引擎 - 承运商利润分析与切换模拟引擎
// ==========================================
// 红线: 最优/最差承运商平局时取首次出现者（按输入顺序聚合）
// 红线: 切换模拟只是 what-if 推演,不修改任何记录
// ==========================================

use crate::domain::carrier::{CarrierAnalysis, CarrierStats, RouteProfitSummary, SwitchProjection};
use crate::domain::order::{JoinedOrder, JoinedOrderView};
use crate::domain::types::MarginPercent;
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument};

// ==========================================
// 结果枚举
// ==========================================

/// 承运商分析结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CarrierAnalysisOutcome {
    Analyzed(CarrierAnalysis),
    NoCarrierData { route: String },
}

/// 切换模拟结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SwitchOutcome {
    Projected(SwitchProjection),
    AlreadyOptimal { carrier: String },
    NoCarrierData,
}

// ==========================================
// ProfitabilityEngine - 承运商利润分析引擎
// ==========================================
// 无状态引擎,所有输入通过参数传入
#[derive(Debug, Default)]
pub struct ProfitabilityEngine;

impl ProfitabilityEngine {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 路线承运商利润分析
    ///
    /// 1) 过滤出该路线订单
    /// 2) 按承运商聚合（保持首次出现顺序）
    /// 3) 识别 best（平均净利润最大）/ worst（平均净利润最小）
    ///
    /// 路线上没有订单时返回 NoCarrierData
    ///
    /// 单一承运商路线同样返回 Analyzed, 此时 best 与 worst 为同一承运商,
    /// 不存在切换机会（has_switch_opportunity() 为 false,
    /// simulate_carrier_switch 返回 AlreadyOptimal）
    #[instrument(skip(self, view), fields(orders = view.len()))]
    pub fn analyze_carrier_profitability(
        &self,
        view: &JoinedOrderView,
        route: &str,
    ) -> CarrierAnalysisOutcome {
        let route_orders: Vec<&JoinedOrder> = view.for_route(route).collect();
        if route_orders.is_empty() {
            debug!(route, "路线无订单");
            return CarrierAnalysisOutcome::NoCarrierData {
                route: route.to_string(),
            };
        }

        let stats = self.aggregate_carrier_stats(route, &route_orders);
        let summary = self.summarize_route(route, &route_orders);

        let Some((best, worst)) = Self::select_best_and_worst(&stats) else {
            return CarrierAnalysisOutcome::NoCarrierData {
                route: route.to_string(),
            };
        };
        let (best, worst) = (best.clone(), worst.clone());

        info!(
            route,
            carriers = stats.len(),
            best = %best.carrier,
            worst = %worst.carrier,
            "承运商分析完成"
        );

        CarrierAnalysisOutcome::Analyzed(CarrierAnalysis {
            route: route.to_string(),
            stats,
            best,
            worst,
            summary,
        })
    }

    /// 承运商切换模拟
    ///
    /// - orders_to_move = floor(worst.order_count × p / 100)
    /// - projected_savings = orders_to_move × (best.mean_net_profit - worst.mean_net_profit)
    ///
    /// # 返回
    /// - Ok(Projected): 存在切换机会
    /// - Ok(AlreadyOptimal): best 与 worst 为同一承运商（含单一承运商路线）
    /// - Ok(NoCarrierData): stats 为空
    /// - Err(InvalidArgument): switch_percent 不在 [0, 100]
    pub fn simulate_carrier_switch(
        &self,
        stats: &[CarrierStats],
        switch_percent: f64,
    ) -> EngineResult<SwitchOutcome> {
        if !switch_percent.is_finite() || !(0.0..=100.0).contains(&switch_percent) {
            return Err(EngineError::InvalidArgument {
                name: "switch_percent".to_string(),
                value: switch_percent.to_string(),
                message: "切换比例必须在 [0, 100] 范围内".to_string(),
            });
        }

        let Some((best, worst)) = Self::select_best_and_worst(stats) else {
            return Ok(SwitchOutcome::NoCarrierData);
        };

        if best.carrier == worst.carrier {
            return Ok(SwitchOutcome::AlreadyOptimal {
                carrier: best.carrier.clone(),
            });
        }

        let orders_to_move = (worst.order_count as f64 * switch_percent / 100.0).floor() as u64;
        let profit_gap_per_order = best.mean_net_profit - worst.mean_net_profit;
        let projected_savings = orders_to_move as f64 * profit_gap_per_order;

        debug!(
            from = %worst.carrier,
            to = %best.carrier,
            orders_to_move,
            projected_savings,
            "切换模拟完成"
        );

        Ok(SwitchOutcome::Projected(SwitchProjection {
            from_carrier: worst.carrier.clone(),
            to_carrier: best.carrier.clone(),
            switch_percent,
            orders_to_move,
            profit_gap_per_order,
            projected_savings,
        }))
    }

    /// 列出联表视图中的路线（首次出现顺序,去重）
    pub fn list_routes(&self, view: &JoinedOrderView) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut routes = Vec::new();
        for order in &view.orders {
            if seen.insert(order.route.as_str()) {
                routes.push(order.route.clone());
            }
        }
        routes
    }

    // ==========================================
    // 聚合
    // ==========================================

    /// 按承运商聚合（首次出现顺序）
    pub fn aggregate_carrier_stats(&self, route: &str, orders: &[&JoinedOrder]) -> Vec<CarrierStats> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<&JoinedOrder>)> = Vec::new();

        for &order in orders {
            let carrier = order.carrier.as_str();
            match index.get(carrier) {
                Some(&idx) => groups[idx].1.push(order),
                None => {
                    index.insert(carrier, groups.len());
                    groups.push((carrier, vec![order]));
                }
            }
        }

        groups
            .into_iter()
            .map(|(carrier, members)| {
                let count = members.len() as f64;
                CarrierStats {
                    route: route.to_string(),
                    carrier: carrier.to_string(),
                    order_count: members.len(),
                    mean_net_profit: members.iter().map(|o| o.metrics.net_profit).sum::<f64>()
                        / count,
                    mean_delivery_days: members.iter().map(|o| o.actual_delivery_days).sum::<f64>()
                        / count,
                    mean_margin: MarginPercent::mean_of(members.iter().map(|o| o.metrics.margin)),
                }
            })
            .collect()
    }

    /// 路线 KPI 摘要
    pub fn summarize_route(&self, route: &str, orders: &[&JoinedOrder]) -> RouteProfitSummary {
        let total_orders = orders.len();
        let total_profit: f64 = orders.iter().map(|o| o.metrics.net_profit).sum();
        let profit_per_order = if total_orders == 0 {
            0.0
        } else {
            total_profit / total_orders as f64
        };

        RouteProfitSummary {
            route: route.to_string(),
            total_orders,
            total_profit,
            profit_per_order,
            average_margin: MarginPercent::mean_of(orders.iter().map(|o| o.metrics.margin)),
            loss_making_orders: orders.iter().filter(|o| o.metrics.net_profit < 0.0).count(),
        }
    }

    /// 选出 best / worst（严格大于/小于才替换,平局保留首次出现者）
    fn select_best_and_worst(stats: &[CarrierStats]) -> Option<(&CarrierStats, &CarrierStats)> {
        let first = stats.first()?;
        let mut best = first;
        let mut worst = first;

        for s in &stats[1..] {
            if s.mean_net_profit > best.mean_net_profit {
                best = s;
            }
            if s.mean_net_profit < worst.mean_net_profit {
                worst = s;
            }
        }

        Some((best, worst))
    }
}
