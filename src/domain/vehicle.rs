// ==========================================
// 物流决策支持引擎 - 车辆领域模型
// ==========================================
// 职责: 车队车辆 / 单车评分 / 路线作用域排名
// 红线: 评分归一化基数只在一次路线查询内有效,不可跨查询比较
// ==========================================

use crate::domain::types::{RankLabel, VehicleStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// Vehicle - 车辆
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub capacity_kg: f64,
    pub fuel_efficiency_km_per_l: f64, // 每升燃油可行驶公里数
    pub co2_emissions_kg_per_km: f64,  // 每公里排放（kg）
    pub age_years: f64,
    pub status: VehicleStatus,
    pub current_location: String,
}

// ==========================================
// VehicleScore - 单车评分（越低越好）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleScore {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub fuel_cost: f64,
    pub emissions_kg: f64,
    pub age_score: f64, // clamp(10 - age_years, 0, 10)
    pub composite_score: f64,
}

// ==========================================
// RankedVehicle - 带等级的推荐车辆
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedVehicle {
    pub rank: RankLabel,
    pub score: VehicleScore,
}

// ==========================================
// ScoreNormalization - 本次查询的归一化基数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreNormalization {
    pub max_fuel_cost: f64,
    pub max_emissions_kg: f64,
}

// ==========================================
// RouteScopedRanking - 单次路线查询的车辆排名
// ==========================================
// 值对象: 绑定 route + distance + 归一化基数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteScopedRanking {
    pub route: String,
    pub distance_km: f64,
    pub candidate_count: usize, // 参与评分的可用车辆数
    pub normalization: ScoreNormalization,
    pub recommendations: Vec<RankedVehicle>, // 至多 3 条
}

impl RouteScopedRanking {
    pub fn best(&self) -> Option<&RankedVehicle> {
        self.recommendations.first()
    }
}
