// ==========================================
// 物流决策支持引擎 - 调拨匹配策略
// ==========================================
// 职责: 缺货仓 × 超储仓 → 调拨建议
// 红线: FirstSurplusMatcher 保持贪心单一调出仓语义
//       (每个缺货仓都配第一个超储仓,不扣减调出仓库存)
// ==========================================

use crate::domain::inventory::{InventoryStatusEntry, TransferRecommendation};

// ==========================================
// TransferMatcher Trait
// ==========================================
// 用途: 调拨匹配算法接口
// 实现者: FirstSurplusMatcher
// 说明: 可替换为容量感知的匹配算法（如最小费用流）,调用方无需改动
pub trait TransferMatcher: Send + Sync {
    /// 为缺货仓匹配调出仓
    ///
    /// # 参数
    /// - deficits: CRITICAL_LOW 条目（原始顺序）
    /// - surpluses: OVERSTOCKED 条目（原始顺序）
    fn match_transfers(
        &self,
        deficits: &[&InventoryStatusEntry],
        surpluses: &[&InventoryStatusEntry],
    ) -> Vec<TransferRecommendation>;

    /// 策略名称（日志用）
    fn name(&self) -> &'static str;
}

// ==========================================
// FirstSurplusMatcher - 首个超储仓贪心匹配
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstSurplusMatcher;

impl TransferMatcher for FirstSurplusMatcher {
    fn match_transfers(
        &self,
        deficits: &[&InventoryStatusEntry],
        surpluses: &[&InventoryStatusEntry],
    ) -> Vec<TransferRecommendation> {
        let Some(donor) = surpluses.first() else {
            return Vec::new();
        };

        deficits
            .iter()
            .map(|deficit| TransferRecommendation {
                from: donor.location.clone(),
                to: deficit.location.clone(),
                available: donor.current_stock,
                needed: deficit.shortfall(),
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "first_surplus"
    }
}
