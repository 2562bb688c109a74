// ==========================================
// 物流决策支持引擎 - 物流决策 API
// ==========================================
// 职责: 在已加载数据集上组合引擎调用,生成报告
// 红线: 只读,不修改数据集; 所有推荐均为 what-if 结果
// ==========================================

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::config::DatasetFileNames;
use crate::domain::dataset::{DqReport, SourceDataset, SourceKind};
use crate::domain::inventory::{
    DemandView, InventoryStatusCounts, InventoryStatusEntry, TransferRecommendation,
};
use crate::domain::order::JoinedOrderView;
use crate::domain::route::RouteNetworkStats;
use crate::engine::inventory::InventoryEngine;
use crate::engine::metrics::derive_order_metrics;
use crate::engine::profitability::{CarrierAnalysisOutcome, ProfitabilityEngine, SwitchOutcome};
use crate::engine::record_joiner::{build_demand_view, JoinOutcome};
use crate::engine::route_selection::{
    RouteSelectionEngine, RouteSelectionOutcome, VehicleRecommendationOutcome,
};
use crate::importer::{DatasetDqValidator, DatasetImporter, DatasetLoader, DqValidator};

// ==========================================
// 报告结构
// ==========================================

/// 路线利润报告（承运商分析 + 切换模拟）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitReport {
    pub route: String,
    pub switch_percent: f64,
    pub analysis: CarrierAnalysisOutcome,
    pub switch: SwitchOutcome,
}

/// 品类库存报告（状态分布 + 调拨建议）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub category: String,
    pub demand_available: bool, // 订单数据源缺失时需求数全部为 0
    pub counts: InventoryStatusCounts,
    pub entries: Vec<InventoryStatusEntry>,
    pub transfers: Vec<TransferRecommendation>,
    pub matcher: String,
}

/// 调度报告（路线查询 + 车辆推荐）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub origin: String,
    pub destination: String,
    pub route: RouteSelectionOutcome,
    /// 仅在找到路线时给出
    pub vehicles: Option<VehicleRecommendationOutcome>,
}

// ==========================================
// LogisticsApi - 物流决策 API
// ==========================================

/// 物流决策API
///
/// 职责：
/// 1. 路线利润分析与承运商切换模拟
/// 2. 库存状态判定与调拨建议
/// 3. 路线查询与车辆推荐
/// 4. 数据质量报告
pub struct LogisticsApi {
    dataset: Arc<SourceDataset>,
    profitability_engine: ProfitabilityEngine,
    inventory_engine: InventoryEngine,
    route_engine: RouteSelectionEngine,
    dq_validator: DatasetDqValidator,
}

impl LogisticsApi {
    /// 基于已加载的数据集创建 API（默认引擎）
    pub fn new(dataset: Arc<SourceDataset>) -> Self {
        Self::with_engines(
            dataset,
            ProfitabilityEngine::new(),
            InventoryEngine::new(),
            RouteSelectionEngine::new(),
        )
    }

    /// 创建 API 并注入引擎实例
    pub fn with_engines(
        dataset: Arc<SourceDataset>,
        profitability_engine: ProfitabilityEngine,
        inventory_engine: InventoryEngine,
        route_engine: RouteSelectionEngine,
    ) -> Self {
        Self {
            dataset,
            profitability_engine,
            inventory_engine,
            route_engine,
            dq_validator: DatasetDqValidator::new(),
        }
    }

    /// 从数据目录并发加载数据集并创建 API
    pub async fn load(data_dir: &Path, files: DatasetFileNames) -> ApiResult<Self> {
        let loader = DatasetLoader::new(files);
        let dataset = loader.load_dataset(data_dir).await?;
        info!(
            dir = %data_dir.display(),
            missing = dataset.missing_sources().len(),
            "数据集已加载"
        );
        Ok(Self::new(Arc::new(dataset)))
    }

    pub fn dataset(&self) -> &SourceDataset {
        &self.dataset
    }

    // ==========================================
    // 利润分析
    // ==========================================

    /// 路线利润报告
    ///
    /// # 参数
    /// - route: 路线标签（如 "Mumbai-Delhi"）
    /// - switch_percent: 切换比例 [0, 100]
    ///
    /// # 返回
    /// - Ok(ProfitReport): 路线无订单时 analysis 为 NoCarrierData
    /// - Err(DataUnavailable): 订单/成本/交付/路线任一数据源缺失或联表为空
    /// - Err(Engine): 重复记录 / 切换比例越界
    #[instrument(skip(self))]
    pub fn profit_report(&self, route: &str, switch_percent: f64) -> ApiResult<ProfitReport> {
        let route = route.trim();
        if route.is_empty() {
            return Err(ApiError::InvalidInput("路线标签不能为空".to_string()));
        }

        let view = self.joined_view()?;
        let analysis = self
            .profitability_engine
            .analyze_carrier_profitability(&view, route);

        let stats = match &analysis {
            CarrierAnalysisOutcome::Analyzed(a) => a.stats.as_slice(),
            CarrierAnalysisOutcome::NoCarrierData { .. } => &[][..],
        };
        let switch = self
            .profitability_engine
            .simulate_carrier_switch(stats, switch_percent)?;

        Ok(ProfitReport {
            route: route.to_string(),
            switch_percent,
            analysis,
            switch,
        })
    }

    /// 联表视图中的路线列表（首次出现顺序）
    pub fn list_routes(&self) -> ApiResult<Vec<String>> {
        let view = self.joined_view()?;
        Ok(self.profitability_engine.list_routes(&view))
    }

    fn joined_view(&self) -> ApiResult<JoinedOrderView> {
        let outcome = derive_order_metrics(
            self.dataset.orders.as_deref(),
            self.dataset.costs.as_deref(),
            self.dataset.performance.as_deref(),
            self.dataset.routes.as_deref(),
        )?;

        match outcome {
            JoinOutcome::Joined(view) => Ok(view),
            JoinOutcome::DataUnavailable { missing, reason } => {
                warn!(%reason, "订单联表不可用");
                Err(ApiError::DataUnavailable { missing, reason })
            }
        }
    }

    // ==========================================
    // 库存调拨
    // ==========================================

    /// 品类库存报告
    ///
    /// 订单数据源缺失时仍给出库存状态,需求数按 0 计
    #[instrument(skip(self))]
    pub fn inventory_report(&self, category: &str) -> ApiResult<InventoryReport> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ApiError::InvalidInput("品类不能为空".to_string()));
        }

        let records = self.require_inventory()?;

        let (demand, demand_available) = match build_demand_view(self.dataset.orders.as_deref()) {
            JoinOutcome::Joined(view) => (view, true),
            JoinOutcome::DataUnavailable { reason, .. } => {
                warn!(%reason, "需求视图不可用,需求数按 0 计");
                (DemandView::new(), false)
            }
        };

        let entries = self
            .inventory_engine
            .classify_inventory(records, &demand, category);
        let counts = InventoryEngine::status_counts(&entries);
        let transfers = self.inventory_engine.recommend_transfers(&entries);

        debug!(
            category,
            entries = entries.len(),
            transfers = transfers.len(),
            "库存报告生成完成"
        );

        Ok(InventoryReport {
            category: category.to_string(),
            demand_available,
            counts,
            entries,
            transfers,
            matcher: self.inventory_engine.matcher_name().to_string(),
        })
    }

    /// 库存数据中的品类（排序去重）
    pub fn list_categories(&self) -> ApiResult<Vec<String>> {
        let records = self.require_inventory()?;
        Ok(self.inventory_engine.list_categories(records))
    }

    fn require_inventory(&self) -> ApiResult<&[crate::domain::inventory::InventoryRecord]> {
        self.dataset
            .inventory
            .as_deref()
            .ok_or_else(|| ApiError::missing_source(SourceKind::Inventory))
    }

    // ==========================================
    // 路线与车辆
    // ==========================================

    /// 调度报告: 最短直达路线 + 该路线上的车辆推荐
    #[instrument(skip(self))]
    pub fn dispatch_report(&self, origin: &str, destination: &str) -> ApiResult<DispatchReport> {
        let (origin, destination) = (origin.trim(), destination.trim());
        if origin.is_empty() || destination.is_empty() {
            return Err(ApiError::InvalidInput("起点和终点不能为空".to_string()));
        }

        let routes = self.require_routes()?;
        let route = self.route_engine.select_route(routes, origin, destination);

        let vehicles = match &route {
            RouteSelectionOutcome::Found(selection) => {
                let fleet = self
                    .dataset
                    .vehicles
                    .as_deref()
                    .ok_or_else(|| ApiError::missing_source(SourceKind::Vehicles))?;
                Some(self.route_engine.recommend_vehicles(fleet, &selection.shortest)?)
            }
            RouteSelectionOutcome::NoRouteFound { .. } => None,
        };

        Ok(DispatchReport {
            origin: origin.to_string(),
            destination: destination.to_string(),
            route,
            vehicles,
        })
    }

    /// 路线数据覆盖的城市（排序去重）
    pub fn list_cities(&self) -> ApiResult<Vec<String>> {
        Ok(self.route_engine.list_cities(self.require_routes()?))
    }

    /// 路网整体统计
    pub fn network_stats(&self) -> ApiResult<RouteNetworkStats> {
        Ok(self.route_engine.network_stats(self.require_routes()?))
    }

    fn require_routes(&self) -> ApiResult<&[crate::domain::route::RouteRecord]> {
        self.dataset
            .routes
            .as_deref()
            .ok_or_else(|| ApiError::missing_source(SourceKind::Routes))
    }

    // ==========================================
    // 数据质量
    // ==========================================

    /// 数据质量报告（不阻断任何报告）
    pub fn data_quality_report(&self) -> DqReport {
        self.dq_validator.validate(&self.dataset)
    }
}
