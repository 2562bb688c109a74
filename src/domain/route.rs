// ==========================================
// 物流决策支持引擎 - 路线领域模型
// ==========================================
// 职责: 路线记录 / 候选路线 / 查询结果 / 路网统计
// 说明: order_id 非空 = 订单级记录（联表用）; 为空 = 独立路线描述
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RouteRecord - 路线记录
// ==========================================
// 同一起讫点允许多条平行记录,不假设唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub order_id: Option<String>,
    pub route: String, // 路线标签 "Origin-Destination"
    pub distance_km: f64,
    pub fuel_consumption_l: f64,
    pub toll_charges: f64,
    pub traffic_delay_minutes: f64,
    pub weather_impact: Option<String>,
}

impl RouteRecord {
    /// 解析起讫点
    ///
    /// 按 '-' 切分,取前两段并去除首尾空白; 标签中没有 '-' 或任一段为空时返回 None
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        let mut parts = self.route.split('-');
        let origin = parts.next()?.trim();
        let destination = parts.next()?.trim();
        if origin.is_empty() || destination.is_empty() {
            return None;
        }
        Some((origin, destination))
    }

    /// 是否连接给定两地（不区分方向）
    pub fn connects(&self, a: &str, b: &str) -> bool {
        match self.endpoints() {
            Some((origin, destination)) => {
                (origin == a && destination == b) || (origin == b && destination == a)
            }
            None => false,
        }
    }
}

// ==========================================
// RouteCandidate - 候选路线（附成本）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub origin: String,
    pub destination: String,
    pub record: RouteRecord,
    pub fuel_cost: f64,  // fuel_consumption_l × 燃油单价
    pub total_cost: f64, // fuel_cost + toll_charges
}

// ==========================================
// RouteSelection - 起讫点查询结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSelection {
    pub origin: String,
    pub destination: String,
    pub shortest: RouteCandidate,
    pub candidates: Vec<RouteCandidate>, // 所有匹配记录,输入顺序
}

// ==========================================
// RouteNetworkStats - 路网整体统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteNetworkStats {
    pub total_routes: usize,
    pub cities_covered: usize,
    pub average_distance_km: f64,
    pub longest_distance_km: f64,
    pub average_fuel_consumption_l: f64,
    pub average_toll_charges: f64,
}
