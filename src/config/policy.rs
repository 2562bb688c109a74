// ==========================================
// 物流决策支持引擎 - 固定策略常量
// ==========================================
// 红线: 以下常量为业务口径,不从输入或配置文件读取
// ==========================================

/// 燃油单价（INR / 升）
pub const FUEL_PRICE_PER_LITRE: f64 = 100.0;

/// 超储倍数: current_stock > reorder_level × 3 → OVERSTOCKED
pub const OVERSTOCK_MULTIPLIER: u64 = 3;

// ===== 车辆综合评分权重 =====
pub const FUEL_COST_WEIGHT: f64 = 0.4;
pub const EMISSIONS_WEIGHT: f64 = 0.4;
pub const AGE_WEIGHT: f64 = 0.2;

/// 车龄评分满分（age_score = 10 - age_years）
pub const AGE_SCORE_SCALE: f64 = 10.0;

/// 车辆推荐条数（best / good / viable）
pub const VEHICLE_RECOMMENDATION_LIMIT: usize = 3;

/// 切换模拟默认比例（%）
pub const DEFAULT_SWITCH_PERCENT: f64 = 50.0;
