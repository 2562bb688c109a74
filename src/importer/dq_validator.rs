// ==========================================
// 物流决策支持引擎 - 数据质量校验器实现
// ==========================================
// 职责: 数据集级 DQ 校验 + DQ 报告生成
// 级别:
//   ERROR   - 引擎会拒绝（一对一数据源 order_id 重复 / 车辆油耗非正 / 路线距离为负）
//   WARNING - 结果受影响（订单无法联表 / 申报价值为 0 / 成本为负 / 路线标签无法解析）
//   INFO    - 仅提示（数据源文件缺失）
// ==========================================

use crate::domain::dataset::{DqLevel, DqReport, DqSummary, DqViolation, SourceDataset, SourceKind};
use crate::domain::order::CostRecord;
use crate::importer::dataset_importer_trait::DqValidator;
use std::collections::HashSet;

#[derive(Debug, Default, Clone, Copy)]
pub struct DatasetDqValidator;

impl DatasetDqValidator {
    pub fn new() -> Self {
        Self
    }

    fn violation(
        source: SourceKind,
        row_number: usize,
        record_id: Option<&str>,
        level: DqLevel,
        field: &str,
        message: impl Into<String>,
    ) -> DqViolation {
        DqViolation {
            source,
            row_number,
            record_id: record_id.map(str::to_string),
            level,
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// 一对一数据源 order_id 唯一性
    fn validate_unique_ids<'a, I>(source: SourceKind, ids: I) -> Vec<DqViolation>
    where
        I: IntoIterator<Item = (usize, Option<&'a str>)>,
    {
        let mut seen = HashSet::new();
        let mut violations = Vec::new();
        for (idx, id) in ids {
            let Some(id) = id else { continue };
            if !seen.insert(id) {
                violations.push(Self::violation(
                    source,
                    idx + 1,
                    Some(id),
                    DqLevel::Error,
                    "order_id",
                    "order_id 重复（一对一数据源）",
                ));
            }
        }
        violations
    }

    fn validate_costs(costs: &[CostRecord]) -> Vec<DqViolation> {
        let mut violations = Vec::new();
        for (idx, cost) in costs.iter().enumerate() {
            let items = [
                ("fuel_cost", cost.fuel_cost),
                ("labor_cost", cost.labor_cost),
                ("vehicle_maintenance", cost.vehicle_maintenance),
                ("insurance", cost.insurance),
                ("packaging_cost", cost.packaging_cost),
                ("technology_platform_fee", cost.technology_platform_fee),
                ("other_overhead", cost.other_overhead),
            ];
            for (field, value) in items {
                if value < 0.0 {
                    violations.push(Self::violation(
                        SourceKind::Costs,
                        idx + 1,
                        Some(&cost.order_id),
                        DqLevel::Warning,
                        field,
                        format!("成本为负: {}", value),
                    ));
                }
            }
        }
        violations
    }

    /// 订单能否完成联表（仅在四个数据源都存在时校验）
    fn validate_joinability(dataset: &SourceDataset) -> Vec<DqViolation> {
        let (Some(orders), Some(costs), Some(performance), Some(routes)) = (
            dataset.orders.as_deref(),
            dataset.costs.as_deref(),
            dataset.performance.as_deref(),
            dataset.routes.as_deref(),
        ) else {
            return Vec::new();
        };

        let cost_ids: HashSet<&str> = costs.iter().map(|c| c.order_id.as_str()).collect();
        let perf_ids: HashSet<&str> = performance.iter().map(|p| p.order_id.as_str()).collect();
        let route_ids: HashSet<&str> = routes.iter().filter_map(|r| r.order_id.as_deref()).collect();

        let mut violations = Vec::new();
        for (idx, order) in orders.iter().enumerate() {
            let id = order.order_id.as_str();
            let mut missing = Vec::new();
            if !cost_ids.contains(id) {
                missing.push(SourceKind::Costs.to_string());
            }
            if !perf_ids.contains(id) {
                missing.push(SourceKind::Performance.to_string());
            }
            if !route_ids.contains(id) {
                missing.push(SourceKind::Routes.to_string());
            }
            if !missing.is_empty() {
                violations.push(Self::violation(
                    SourceKind::Orders,
                    idx + 1,
                    Some(id),
                    DqLevel::Warning,
                    "order_id",
                    format!("无法联表,缺少: {}", missing.join(", ")),
                ));
            }
        }
        violations
    }
}

impl DqValidator for DatasetDqValidator {
    fn validate(&self, dataset: &SourceDataset) -> DqReport {
        let mut violations = Vec::new();

        let missing_sources = dataset.missing_sources();
        for kind in &missing_sources {
            violations.push(Self::violation(
                *kind,
                0,
                None,
                DqLevel::Info,
                "-",
                format!("数据源文件缺失: {}", kind),
            ));
        }

        if let Some(orders) = &dataset.orders {
            for (idx, order) in orders.iter().enumerate() {
                if order.order_value == 0.0 {
                    violations.push(Self::violation(
                        SourceKind::Orders,
                        idx + 1,
                        Some(&order.order_id),
                        DqLevel::Warning,
                        "order_value",
                        "申报价值为 0,利润率未定义",
                    ));
                }
            }
        }

        if let Some(costs) = &dataset.costs {
            violations.extend(Self::validate_unique_ids(
                SourceKind::Costs,
                costs.iter().enumerate().map(|(i, c)| (i, Some(c.order_id.as_str()))),
            ));
            violations.extend(Self::validate_costs(costs));
        }

        if let Some(performance) = &dataset.performance {
            violations.extend(Self::validate_unique_ids(
                SourceKind::Performance,
                performance.iter().enumerate().map(|(i, p)| (i, Some(p.order_id.as_str()))),
            ));
        }

        if let Some(routes) = &dataset.routes {
            violations.extend(Self::validate_unique_ids(
                SourceKind::Routes,
                routes.iter().enumerate().map(|(i, r)| (i, r.order_id.as_deref())),
            ));
            for (idx, route) in routes.iter().enumerate() {
                if route.endpoints().is_none() {
                    violations.push(Self::violation(
                        SourceKind::Routes,
                        idx + 1,
                        route.order_id.as_deref(),
                        DqLevel::Warning,
                        "route",
                        format!("路线标签无法解析起讫点: {}", route.route),
                    ));
                }
                if route.distance_km < 0.0 {
                    violations.push(Self::violation(
                        SourceKind::Routes,
                        idx + 1,
                        route.order_id.as_deref(),
                        DqLevel::Error,
                        "distance_km",
                        format!("距离为负: {}", route.distance_km),
                    ));
                }
            }
        }

        if let Some(vehicles) = &dataset.vehicles {
            for (idx, vehicle) in vehicles.iter().enumerate() {
                if vehicle.fuel_efficiency_km_per_l <= 0.0 {
                    violations.push(Self::violation(
                        SourceKind::Vehicles,
                        idx + 1,
                        Some(&vehicle.vehicle_id),
                        DqLevel::Error,
                        "fuel_efficiency_km_per_l",
                        format!("油耗必须为正数: {}", vehicle.fuel_efficiency_km_per_l),
                    ));
                }
            }
        }

        violations.extend(Self::validate_joinability(dataset));

        let total_rows = dataset.orders.as_ref().map_or(0, Vec::len)
            + dataset.costs.as_ref().map_or(0, Vec::len)
            + dataset.performance.as_ref().map_or(0, Vec::len)
            + dataset.routes.as_ref().map_or(0, Vec::len)
            + dataset.inventory.as_ref().map_or(0, Vec::len)
            + dataset.vehicles.as_ref().map_or(0, Vec::len);

        let summary = DqSummary {
            total_rows,
            error: violations.iter().filter(|v| v.level == DqLevel::Error).count(),
            warning: violations.iter().filter(|v| v.level == DqLevel::Warning).count(),
            info: violations.iter().filter(|v| v.level == DqLevel::Info).count(),
        };

        DqReport {
            missing_sources,
            summary,
            violations,
        }
    }
}
