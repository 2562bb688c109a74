// ==========================================
// 物流决策支持引擎 - 库存领域模型
// ==========================================
// 职责: 仓库库存记录 / 需求视图 / 库存状态 / 调拨建议
// ==========================================

use crate::domain::types::InventoryStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// InventoryRecord - 仓库库存（一行对应 location × category）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub location: String,
    pub product_category: String,
    pub current_stock: u64,
    pub reorder_level: u64,
}

// ==========================================
// DemandCount / DemandView - 按发货地 × 品类统计的订单数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandCount {
    pub location: String,
    pub product_category: String,
    pub order_count: usize,
}

/// 需求视图
///
/// 条目保持首次出现顺序; 查询走内部索引
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemandView {
    entries: Vec<DemandCount>,
    #[serde(skip)]
    index: HashMap<(String, String), usize>,
}

impl DemandView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加一笔订单
    pub fn record(&mut self, location: &str, product_category: &str) {
        let key = (location.to_string(), product_category.to_string());
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].order_count += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(DemandCount {
                    location: location.to_string(),
                    product_category: product_category.to_string(),
                    order_count: 1,
                });
            }
        }
    }

    /// 查询需求数（无记录返回 0）
    pub fn count_for(&self, location: &str, product_category: &str) -> usize {
        self.index
            .get(&(location.to_string(), product_category.to_string()))
            .map(|&idx| self.entries[idx].order_count)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[DemandCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// InventoryStatusEntry - 库存状态判定结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStatusEntry {
    pub location: String,
    pub product_category: String,
    pub current_stock: u64,
    pub reorder_level: u64,
    pub status: InventoryStatus,
    pub demand_count: usize,
}

impl InventoryStatusEntry {
    /// 距离补货线的缺口（非 CRITICAL_LOW 时为 0）
    pub fn shortfall(&self) -> u64 {
        self.reorder_level.saturating_sub(self.current_stock)
    }
}

// ==========================================
// InventoryStatusCounts - 品类状态分布
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStatusCounts {
    pub critical_low: usize,
    pub overstocked: usize,
    pub healthy: usize,
}

// ==========================================
// TransferRecommendation - 调拨建议（临时对象,不落库）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecommendation {
    pub from: String,    // 调出仓（OVERSTOCKED）
    pub to: String,      // 调入仓（CRITICAL_LOW）
    pub available: u64,  // 调出仓当前库存（原样报告）
    pub needed: u64,     // reorder_level - current_stock
}
