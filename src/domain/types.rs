// ==========================================
// 物流决策支持引擎 - 领域类型定义
// ==========================================
// 职责: 库存状态 / 车辆状态 / 推荐等级 / 利润率
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 库存状态 (Inventory Status)
// ==========================================
// 红线: 每条库存记录有且仅有一个状态
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryStatus {
    Healthy,     // 正常
    CriticalLow, // 低于补货线
    Overstocked, // 超过补货线 3 倍
}

impl fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryStatus::Healthy => write!(f, "HEALTHY"),
            InventoryStatus::CriticalLow => write!(f, "CRITICAL_LOW"),
            InventoryStatus::Overstocked => write!(f, "OVERSTOCKED"),
        }
    }
}

// ==========================================
// 车辆状态 (Vehicle Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,   // 可调度
    InTransit,   // 运输中
    Maintenance, // 维修中
    Unavailable, // 其他不可用
}

impl VehicleStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, VehicleStatus::Available)
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleStatus::Available => write!(f, "AVAILABLE"),
            VehicleStatus::InTransit => write!(f, "IN_TRANSIT"),
            VehicleStatus::Maintenance => write!(f, "MAINTENANCE"),
            VehicleStatus::Unavailable => write!(f, "UNAVAILABLE"),
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    /// 宽松解析: 忽略大小写、空格、下划线、连字符
    ///
    /// "Available" / "In_Transit" / "in transit" / "MAINTENANCE" 均可识别
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "available" => Ok(VehicleStatus::Available),
            "intransit" => Ok(VehicleStatus::InTransit),
            "maintenance" | "undermaintenance" => Ok(VehicleStatus::Maintenance),
            "unavailable" | "outofservice" | "retired" => Ok(VehicleStatus::Unavailable),
            other => Err(format!("未知车辆状态: {}", other)),
        }
    }
}

// ==========================================
// 车辆推荐等级 (Rank Label)
// ==========================================
// 顺序: Best < Good < Viable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankLabel {
    Best,
    Good,
    Viable,
}

impl RankLabel {
    /// 按名次（从 0 开始）取等级，超出前三名返回 None
    pub fn from_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(RankLabel::Best),
            1 => Some(RankLabel::Good),
            2 => Some(RankLabel::Viable),
            _ => None,
        }
    }
}

impl fmt::Display for RankLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankLabel::Best => write!(f, "best"),
            RankLabel::Good => write!(f, "good"),
            RankLabel::Viable => write!(f, "viable"),
        }
    }
}

// ==========================================
// 利润率 (Margin Percent)
// ==========================================
// 红线: 申报价值为 0 时利润率未定义，必须显式标记，不得静默置 0 或 ∞
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MarginPercent {
    Defined(f64),
    Undefined,
}

impl MarginPercent {
    /// 由净利润与申报价值计算利润率
    pub fn from_profit(net_profit: f64, order_value: f64) -> Self {
        if order_value == 0.0 {
            MarginPercent::Undefined
        } else {
            MarginPercent::Defined(net_profit / order_value * 100.0)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            MarginPercent::Defined(v) => Some(*v),
            MarginPercent::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, MarginPercent::Defined(_))
    }

    /// 对一组利润率取均值，仅统计已定义的值；全部未定义时返回 Undefined
    pub fn mean_of<I>(margins: I) -> Self
    where
        I: IntoIterator<Item = MarginPercent>,
    {
        let (sum, count) = margins
            .into_iter()
            .filter_map(|m| m.value())
            .fold((0.0_f64, 0_usize), |(s, c), v| (s + v, c + 1));

        if count == 0 {
            MarginPercent::Undefined
        } else {
            MarginPercent::Defined(sum / count as f64)
        }
    }
}

impl fmt::Display for MarginPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginPercent::Defined(v) => write!(f, "{}%", v),
            MarginPercent::Undefined => write!(f, "UNDEFINED"),
        }
    }
}
