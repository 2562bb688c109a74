// ==========================================
// 物流决策支持引擎 - 库存调拨引擎
// ==========================================
// 职责: 品类库存状态判定 + 调拨建议
// 输入: 仓库库存记录 + 需求视图 + 品类
// 输出: InventoryStatusEntry 列表 / TransferRecommendation 列表
// 红线: 状态判定是纯函数,重复调用结果一致
// 红线: 调拨建议是临时对象,每次请求重新计算
// ==========================================

use crate::domain::inventory::{
    DemandView, InventoryRecord, InventoryStatusCounts, InventoryStatusEntry,
    TransferRecommendation,
};
use crate::domain::types::InventoryStatus;
use crate::engine::metrics::classify_stock;
use crate::engine::transfer_matcher::{FirstSurplusMatcher, TransferMatcher};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

// ==========================================
// InventoryEngine - 库存调拨引擎
// ==========================================
pub struct InventoryEngine {
    matcher: Box<dyn TransferMatcher>,
}

impl Default for InventoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InventoryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryEngine")
            .field("matcher", &self.matcher.name())
            .finish()
    }
}

impl InventoryEngine {
    /// 使用默认匹配策略（FirstSurplusMatcher）
    pub fn new() -> Self {
        Self::with_matcher(Box::new(FirstSurplusMatcher))
    }

    /// 使用自定义匹配策略
    pub fn with_matcher(matcher: Box<dyn TransferMatcher>) -> Self {
        Self { matcher }
    }

    pub fn matcher_name(&self) -> &'static str {
        self.matcher.name()
    }

    // ==========================================
    // 状态判定
    // ==========================================

    /// 品类库存状态判定
    ///
    /// 只保留该品类的记录,顺序与输入一致; 需求数来自需求视图（无记录为 0）
    #[instrument(skip(self, records, demand), fields(record_count = records.len()))]
    pub fn classify_inventory(
        &self,
        records: &[InventoryRecord],
        demand: &DemandView,
        category: &str,
    ) -> Vec<InventoryStatusEntry> {
        let entries: Vec<InventoryStatusEntry> = records
            .iter()
            .filter(|r| r.product_category == category)
            .map(|r| InventoryStatusEntry {
                location: r.location.clone(),
                product_category: r.product_category.clone(),
                current_stock: r.current_stock,
                reorder_level: r.reorder_level,
                status: classify_stock(r.current_stock, r.reorder_level),
                demand_count: demand.count_for(&r.location, &r.product_category),
            })
            .collect();

        let counts = Self::status_counts(&entries);
        debug!(
            category,
            critical_low = counts.critical_low,
            overstocked = counts.overstocked,
            healthy = counts.healthy,
            "库存状态判定完成"
        );

        entries
    }

    /// 状态分布统计
    pub fn status_counts(entries: &[InventoryStatusEntry]) -> InventoryStatusCounts {
        entries
            .iter()
            .fold(InventoryStatusCounts::default(), |mut acc, e| {
                match e.status {
                    InventoryStatus::CriticalLow => acc.critical_low += 1,
                    InventoryStatus::Overstocked => acc.overstocked += 1,
                    InventoryStatus::Healthy => acc.healthy += 1,
                }
                acc
            })
    }

    // ==========================================
    // 调拨建议
    // ==========================================

    /// 调拨建议
    ///
    /// 1) 按原始顺序切分 deficits（CRITICAL_LOW）/ surpluses（OVERSTOCKED）
    /// 2) 任一为空 → 空列表
    /// 3) 否则交给匹配策略
    pub fn recommend_transfers(&self, entries: &[InventoryStatusEntry]) -> Vec<TransferRecommendation> {
        let deficits: Vec<&InventoryStatusEntry> = entries
            .iter()
            .filter(|e| e.status == InventoryStatus::CriticalLow)
            .collect();
        let surpluses: Vec<&InventoryStatusEntry> = entries
            .iter()
            .filter(|e| e.status == InventoryStatus::Overstocked)
            .collect();

        if deficits.is_empty() || surpluses.is_empty() {
            debug!(
                deficits = deficits.len(),
                surpluses = surpluses.len(),
                "无可匹配的调拨"
            );
            return Vec::new();
        }

        let recommendations = self.matcher.match_transfers(&deficits, &surpluses);
        info!(
            matcher = self.matcher.name(),
            deficits = deficits.len(),
            surpluses = surpluses.len(),
            recommendations = recommendations.len(),
            "调拨建议生成完成"
        );
        recommendations
    }

    /// 列出库存记录中的品类（去重,按字母序）
    pub fn list_categories(&self, records: &[InventoryRecord]) -> Vec<String> {
        let mut categories: Vec<String> = records
            .iter()
            .map(|r| r.product_category.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        categories.sort();
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(location: &str, category: &str, stock: u64, reorder: u64) -> InventoryRecord {
        InventoryRecord {
            location: location.to_string(),
            product_category: category.to_string(),
            current_stock: stock,
            reorder_level: reorder,
        }
    }

    #[test]
    fn test_transfer_scenario_x_y() {
        let engine = InventoryEngine::new();
        let records = vec![
            record("X", "Electronics", 5, 10),
            record("Y", "Electronics", 40, 10),
        ];

        let entries = engine.classify_inventory(&records, &DemandView::new(), "Electronics");
        assert_eq!(entries[0].status, InventoryStatus::CriticalLow);
        assert_eq!(entries[1].status, InventoryStatus::Overstocked);

        let recs = engine.recommend_transfers(&entries);
        assert_eq!(
            recs,
            vec![TransferRecommendation {
                from: "Y".to_string(),
                to: "X".to_string(),
                available: 40,
                needed: 5,
            }]
        );
    }

    #[test]
    fn test_classify_filters_category_and_attaches_demand() {
        let engine = InventoryEngine::new();
        let records = vec![
            record("Mumbai", "Food", 50, 20),
            record("Mumbai", "Electronics", 5, 10),
            record("Pune", "Food", 10, 20),
        ];
        let mut demand = DemandView::new();
        demand.record("Mumbai", "Food");
        demand.record("Mumbai", "Food");

        let entries = engine.classify_inventory(&records, &demand, "Food");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].location, "Mumbai");
        assert_eq!(entries[0].demand_count, 2);
        assert_eq!(entries[0].status, InventoryStatus::Healthy);
        assert_eq!(entries[1].demand_count, 0);
        assert_eq!(entries[1].status, InventoryStatus::CriticalLow);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let engine = InventoryEngine::new();
        let records = vec![record("A", "Food", 1, 5), record("B", "Food", 100, 5)];
        let demand = DemandView::new();

        let first = engine.classify_inventory(&records, &demand, "Food");
        let second = engine.classify_inventory(&records, &demand, "Food");
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_transfers_without_surplus() {
        let engine = InventoryEngine::new();
        let records = vec![record("A", "Food", 1, 5), record("B", "Food", 6, 5)];
        let entries = engine.classify_inventory(&records, &DemandView::new(), "Food");
        assert!(engine.recommend_transfers(&entries).is_empty());
    }

    #[test]
    fn test_status_counts() {
        let engine = InventoryEngine::new();
        let records = vec![
            record("A", "Food", 1, 5),
            record("B", "Food", 100, 5),
            record("C", "Food", 5, 5),
            record("D", "Food", 0, 5),
        ];
        let entries = engine.classify_inventory(&records, &DemandView::new(), "Food");
        let counts = InventoryEngine::status_counts(&entries);

        assert_eq!(counts.critical_low, 2);
        assert_eq!(counts.overstocked, 1);
        assert_eq!(counts.healthy, 1);
    }

    #[test]
    fn test_list_categories_sorted_distinct() {
        let engine = InventoryEngine::new();
        let records = vec![
            record("A", "Food", 1, 5),
            record("B", "Electronics", 1, 5),
            record("C", "Food", 1, 5),
        ];
        assert_eq!(engine.list_categories(&records), vec!["Electronics", "Food"]);
    }

    struct NoopMatcher;

    impl TransferMatcher for NoopMatcher {
        fn match_transfers(
            &self,
            _deficits: &[&InventoryStatusEntry],
            _surpluses: &[&InventoryStatusEntry],
        ) -> Vec<TransferRecommendation> {
            Vec::new()
        }

        fn name(&self) -> &'static str {
            "noop"
        }
    }

    #[test]
    fn test_custom_matcher_is_used() {
        let engine = InventoryEngine::with_matcher(Box::new(NoopMatcher));
        let records = vec![record("X", "Food", 5, 10), record("Y", "Food", 40, 10)];
        let entries = engine.classify_inventory(&records, &DemandView::new(), "Food");

        assert_eq!(engine.matcher_name(), "noop");
        assert!(engine.recommend_transfers(&entries).is_empty());
    }
}
