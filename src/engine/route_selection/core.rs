// ==========================================
// 物流决策支持引擎 - 路线与车辆推荐引擎
// ==========================================

use super::scoring::{age_score, composite_score};
use crate::config::policy::{FUEL_PRICE_PER_LITRE, VEHICLE_RECOMMENDATION_LIMIT};
use crate::domain::route::{RouteCandidate, RouteNetworkStats, RouteRecord, RouteSelection};
use crate::domain::types::RankLabel;
use crate::domain::vehicle::{
    RankedVehicle, RouteScopedRanking, ScoreNormalization, Vehicle, VehicleScore,
};
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

// ==========================================
// 结果枚举
// ==========================================

/// 路线查询结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteSelectionOutcome {
    Found(RouteSelection),
    NoRouteFound { origin: String, destination: String },
}

/// 车辆推荐结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VehicleRecommendationOutcome {
    Ranked(RouteScopedRanking),
    NoVehicleAvailable,
}

// ==========================================
// RouteSelectionEngine - 路线与车辆推荐引擎
// ==========================================
#[derive(Debug, Default)]
pub struct RouteSelectionEngine;

impl RouteSelectionEngine {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 路线查询
    // ==========================================

    /// 起讫点路线查询
    ///
    /// 1) 收集两端匹配的全部记录（不区分方向,保持输入顺序）
    /// 2) 计算每条候选的燃油费与总成本
    /// 3) 取距离最小者为最短路线（平局取首次出现）
    ///
    /// 无匹配时返回 NoRouteFound,原样回显起讫点
    #[instrument(skip(self, routes), fields(route_count = routes.len()))]
    pub fn select_route(
        &self,
        routes: &[RouteRecord],
        origin: &str,
        destination: &str,
    ) -> RouteSelectionOutcome {
        let (a, b) = (origin.trim(), destination.trim());

        let candidates: Vec<RouteCandidate> = routes
            .iter()
            .filter(|r| r.connects(a, b))
            .filter_map(Self::to_candidate)
            .collect();

        let Some(shortest) = candidates
            .iter()
            .reduce(|best, c| if c.record.distance_km < best.record.distance_km { c } else { best })
            .cloned()
        else {
            debug!(origin, destination, "无直达路线");
            return RouteSelectionOutcome::NoRouteFound {
                origin: origin.to_string(),
                destination: destination.to_string(),
            };
        };

        info!(
            origin,
            destination,
            candidates = candidates.len(),
            shortest_km = shortest.record.distance_km,
            "路线查询完成"
        );

        RouteSelectionOutcome::Found(RouteSelection {
            origin: origin.to_string(),
            destination: destination.to_string(),
            shortest,
            candidates,
        })
    }

    fn to_candidate(record: &RouteRecord) -> Option<RouteCandidate> {
        let (origin, destination) = record.endpoints()?;
        let fuel_cost = record.fuel_consumption_l * FUEL_PRICE_PER_LITRE;
        Some(RouteCandidate {
            origin: origin.to_string(),
            destination: destination.to_string(),
            record: record.clone(),
            fuel_cost,
            total_cost: fuel_cost + record.toll_charges,
        })
    }

    // ==========================================
    // 车辆推荐
    // ==========================================

    /// 车辆推荐
    ///
    /// 1) 只保留 Available 车辆
    /// 2) 按路线距离计算燃油费、排放、车龄评分
    /// 3) 以本次候选集的最大燃油费/最大排放归一化,计算综合评分
    /// 4) 按综合评分升序（稳定排序）取前三名,标记 best / good / viable
    ///
    /// # 返回
    /// - Ok(Ranked): 路线作用域排名
    /// - Ok(NoVehicleAvailable): 无可用车辆
    /// - Err(MalformedRecord): 路线距离或车辆油耗不合法
    #[instrument(skip(self, vehicles, route), fields(vehicle_count = vehicles.len(), route = %route.record.route))]
    pub fn recommend_vehicles(
        &self,
        vehicles: &[Vehicle],
        route: &RouteCandidate,
    ) -> EngineResult<VehicleRecommendationOutcome> {
        let distance = route.record.distance_km;
        if !distance.is_finite() || distance < 0.0 {
            return Err(EngineError::malformed(
                "route",
                &route.record.route,
                format!("路线距离不合法: {}", distance),
            ));
        }

        let available: Vec<&Vehicle> = vehicles.iter().filter(|v| v.status.is_available()).collect();
        if available.is_empty() {
            warn!(total = vehicles.len(), "无可用车辆");
            return Ok(VehicleRecommendationOutcome::NoVehicleAvailable);
        }

        // (fuel_cost, emissions, age_score)
        let mut raw = Vec::with_capacity(available.len());
        for vehicle in &available {
            let efficiency = vehicle.fuel_efficiency_km_per_l;
            if !efficiency.is_finite() || efficiency <= 0.0 {
                return Err(EngineError::malformed(
                    "vehicle",
                    &vehicle.vehicle_id,
                    format!("油耗必须为正数: {}", efficiency),
                ));
            }
            raw.push((
                distance / efficiency * FUEL_PRICE_PER_LITRE,
                vehicle.co2_emissions_kg_per_km * distance,
                age_score(vehicle.age_years),
            ));
        }

        let normalization = ScoreNormalization {
            max_fuel_cost: raw.iter().map(|r| r.0).fold(0.0, f64::max),
            max_emissions_kg: raw.iter().map(|r| r.1).fold(0.0, f64::max),
        };

        let mut scores: Vec<VehicleScore> = available
            .iter()
            .zip(raw)
            .map(|(vehicle, (fuel_cost, emissions_kg, age_score))| VehicleScore {
                vehicle_id: vehicle.vehicle_id.clone(),
                vehicle_type: vehicle.vehicle_type.clone(),
                fuel_cost,
                emissions_kg,
                age_score,
                composite_score: composite_score(fuel_cost, emissions_kg, age_score, &normalization),
            })
            .collect();

        scores.sort_by(|a, b| a.composite_score.total_cmp(&b.composite_score));

        let recommendations: Vec<RankedVehicle> = scores
            .into_iter()
            .take(VEHICLE_RECOMMENDATION_LIMIT)
            .enumerate()
            .filter_map(|(pos, score)| {
                RankLabel::from_position(pos).map(|rank| RankedVehicle { rank, score })
            })
            .collect();

        info!(
            candidates = available.len(),
            best = recommendations.first().map(|r| r.score.vehicle_id.as_str()).unwrap_or(""),
            "车辆推荐完成"
        );

        Ok(VehicleRecommendationOutcome::Ranked(RouteScopedRanking {
            route: route.record.route.clone(),
            distance_km: distance,
            candidate_count: available.len(),
            normalization,
            recommendations,
        }))
    }

    // ==========================================
    // 路网统计
    // ==========================================

    /// 路网统计（只统计能解析出起讫点的记录）
    pub fn network_stats(&self, routes: &[RouteRecord]) -> RouteNetworkStats {
        let valid: Vec<&RouteRecord> = routes.iter().filter(|r| r.endpoints().is_some()).collect();
        let n = valid.len();
        let mean = |f: fn(&RouteRecord) -> f64| -> f64 {
            if n == 0 {
                0.0
            } else {
                valid.iter().map(|r| f(r)).sum::<f64>() / n as f64
            }
        };

        RouteNetworkStats {
            total_routes: n,
            cities_covered: self.list_cities(routes).len(),
            average_distance_km: mean(|r| r.distance_km),
            longest_distance_km: valid.iter().map(|r| r.distance_km).fold(0.0, f64::max),
            average_fuel_consumption_l: mean(|r| r.fuel_consumption_l),
            average_toll_charges: mean(|r| r.toll_charges),
        }
    }

    /// 路线覆盖的城市（去重,按字母序）
    pub fn list_cities(&self, routes: &[RouteRecord]) -> Vec<String> {
        routes
            .iter()
            .filter_map(|r| r.endpoints())
            .flat_map(|(a, b)| [a, b])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
