// ==========================================
// 物流决策支持引擎 - 路线与车辆推荐引擎
// ==========================================
// 红线: 路线查询不区分方向（A-B 记录同样满足 B-A 查询）
// 红线: 最短路线平局时取首次出现者
// 红线: 车辆评分归一化基数只取本次候选集,结果不可跨查询比较
// ==========================================
// 职责: 起讫点 → 直达路线候选 + 最短路线; 最短路线 → 可用车辆前三名
// 输入: 路线记录 / 车队记录 / 起讫点
// 输出: RouteSelection / RouteScopedRanking
// ==========================================
// 注: 只评估直达记录,不做多跳路径规划
// ==========================================

mod core;
mod scoring;

#[cfg(test)]
mod tests;

pub use core::{RouteSelectionEngine, RouteSelectionOutcome, VehicleRecommendationOutcome};
pub use scoring::{age_score, composite_score};
