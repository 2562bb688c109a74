// ==========================================
// 物流决策支持引擎 - 承运商利润分析与切换模拟引擎
// ==========================================
// 红线: 最优/最差承运商平局时取首次出现者（按输入顺序聚合）
// 红线: 切换模拟只是 what-if 推演,不修改任何记录
// ==========================================
// 职责: 按路线聚合承运商统计 + 识别最优/最差 + 切换收益推演
// 输入: 订单联表视图（JoinedOrderView）+ 路线标签
// 输出: CarrierAnalysis / SwitchProjection
// ==========================================

mod core;


pub use core::{CarrierAnalysisOutcome, ProfitabilityEngine, SwitchOutcome};
