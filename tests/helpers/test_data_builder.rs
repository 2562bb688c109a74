// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use shiplytics::domain::dataset::SourceDataset;
use shiplytics::domain::inventory::InventoryRecord;
use shiplytics::domain::order::{CostRecord, DeliveryPerformance, Order};
use shiplytics::domain::route::RouteRecord;
use shiplytics::domain::types::VehicleStatus;
use shiplytics::domain::vehicle::Vehicle;

// ==========================================
// 单条记录构建函数
// ==========================================

/// 成本明细（全部计入燃油成本,其余为 0）
pub fn cost(order_id: &str, total: f64) -> CostRecord {
    CostRecord {
        order_id: order_id.to_string(),
        fuel_cost: total,
        labor_cost: 0.0,
        vehicle_maintenance: 0.0,
        insurance: 0.0,
        packaging_cost: 0.0,
        technology_platform_fee: 0.0,
        other_overhead: 0.0,
    }
}

pub fn performance(order_id: &str, carrier: &str, days: f64) -> DeliveryPerformance {
    DeliveryPerformance {
        order_id: order_id.to_string(),
        carrier: carrier.to_string(),
        actual_delivery_days: days,
        delivery_status: "On-Time".to_string(),
    }
}

pub fn inventory(location: &str, category: &str, stock: u64, reorder: u64) -> InventoryRecord {
    InventoryRecord {
        location: location.to_string(),
        product_category: category.to_string(),
        current_stock: stock,
        reorder_level: reorder,
    }
}

// ==========================================
// RouteRecord 构建器
// ==========================================

pub struct RouteBuilder {
    order_id: Option<String>,
    route: String,
    distance_km: f64,
    fuel_consumption_l: f64,
    toll_charges: f64,
}

impl RouteBuilder {
    pub fn new(route: &str) -> Self {
        Self {
            order_id: None,
            route: route.to_string(),
            distance_km: 100.0,
            fuel_consumption_l: 10.0,
            toll_charges: 0.0,
        }
    }

    pub fn order(mut self, order_id: &str) -> Self {
        self.order_id = Some(order_id.to_string());
        self
    }

    pub fn distance(mut self, km: f64) -> Self {
        self.distance_km = km;
        self
    }

    pub fn fuel(mut self, litres: f64) -> Self {
        self.fuel_consumption_l = litres;
        self
    }

    pub fn toll(mut self, toll: f64) -> Self {
        self.toll_charges = toll;
        self
    }

    pub fn build(self) -> RouteRecord {
        RouteRecord {
            order_id: self.order_id,
            route: self.route,
            distance_km: self.distance_km,
            fuel_consumption_l: self.fuel_consumption_l,
            toll_charges: self.toll_charges,
            traffic_delay_minutes: 0.0,
            weather_impact: None,
        }
    }
}

// ==========================================
// Vehicle 构建器
// ==========================================

pub struct VehicleBuilder {
    vehicle_id: String,
    fuel_efficiency_km_per_l: f64,
    co2_emissions_kg_per_km: f64,
    age_years: f64,
    status: VehicleStatus,
}

impl VehicleBuilder {
    pub fn new(vehicle_id: &str) -> Self {
        Self {
            vehicle_id: vehicle_id.to_string(),
            fuel_efficiency_km_per_l: 10.0,
            co2_emissions_kg_per_km: 0.5,
            age_years: 5.0,
            status: VehicleStatus::Available,
        }
    }

    pub fn efficiency(mut self, km_per_l: f64) -> Self {
        self.fuel_efficiency_km_per_l = km_per_l;
        self
    }

    pub fn emissions(mut self, kg_per_km: f64) -> Self {
        self.co2_emissions_kg_per_km = kg_per_km;
        self
    }

    pub fn age(mut self, years: f64) -> Self {
        self.age_years = years;
        self
    }

    pub fn status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Vehicle {
        Vehicle {
            vehicle_id: self.vehicle_id,
            vehicle_type: "Medium_Truck".to_string(),
            capacity_kg: 5000.0,
            fuel_efficiency_km_per_l: self.fuel_efficiency_km_per_l,
            co2_emissions_kg_per_km: self.co2_emissions_kg_per_km,
            age_years: self.age_years,
            status: self.status,
            current_location: "Mumbai".to_string(),
        }
    }
}

// ==========================================
// 数据集构建器
// ==========================================

/// 按订单组装四个联表数据源（订单 + 成本 + 交付 + 订单级路线）
#[derive(Default)]
pub struct DatasetBuilder {
    orders: Vec<Order>,
    costs: Vec<CostRecord>,
    performance: Vec<DeliveryPerformance>,
    routes: Vec<RouteRecord>,
    inventory: Vec<InventoryRecord>,
    vehicles: Vec<Vehicle>,
    seq: usize,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一笔完整订单（四个数据源各一条）
    ///
    /// route 形如 "Mumbai-Delhi"; 订单的发货地/目的地取自路线标签
    pub fn order(
        mut self,
        route: &str,
        carrier: &str,
        category: &str,
        value: f64,
        total_cost: f64,
    ) -> Self {
        self.seq += 1;
        let id = format!("ORD{:06}", self.seq);
        let mut ends = route.splitn(2, '-');
        let origin = ends.next().unwrap_or_default().trim().to_string();
        let destination = ends.next().unwrap_or_default().trim().to_string();

        self.orders.push(Order {
            order_id: id.clone(),
            origin,
            destination,
            product_category: category.to_string(),
            order_value: value,
        });
        self.costs.push(cost(&id, total_cost));
        self.performance.push(performance(&id, carrier, 3.0));
        self.routes.push(RouteBuilder::new(route).order(&id).build());
        self
    }

    /// 批量添加同一承运商的订单
    pub fn orders(
        mut self,
        count: usize,
        route: &str,
        carrier: &str,
        value: f64,
        total_cost: f64,
    ) -> Self {
        for _ in 0..count {
            self = self.order(route, carrier, "Electronics", value, total_cost);
        }
        self
    }

    /// 添加独立路线描述（无订单号）
    pub fn route(mut self, record: RouteRecord) -> Self {
        self.routes.push(record);
        self
    }

    pub fn stock(mut self, record: InventoryRecord) -> Self {
        self.inventory.push(record);
        self
    }

    pub fn vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    pub fn build(self) -> SourceDataset {
        SourceDataset {
            orders: Some(self.orders),
            costs: Some(self.costs),
            performance: Some(self.performance),
            routes: Some(self.routes),
            inventory: Some(self.inventory),
            vehicles: Some(self.vehicles),
        }
    }
}
