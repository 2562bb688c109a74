// ==========================================
// 物流决策支持引擎 - 字段映射器实现
// ==========================================
// 职责: 原始列 → 领域字段映射 + 类型转换
// 说明: 列名支持别名（如 Order_Value_INR / Order_Value）
//       空字符串视为缺失; 必填字段缺失返回 MissingField
// ==========================================

use crate::domain::inventory::InventoryRecord;
use crate::domain::order::{CostRecord, DeliveryPerformance, Order};
use crate::domain::route::RouteRecord;
use crate::domain::types::VehicleStatus;
use crate::domain::vehicle::Vehicle;
use crate::importer::dataset_importer_trait::{RawRow, RecordMapper};
use crate::importer::error::{ImportError, ImportResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct FieldMapper;

impl RecordMapper<Order> for FieldMapper {
    fn map_row(&self, row: &RawRow, row_number: usize) -> ImportResult<Order> {
        Ok(Order {
            order_id: self.require_string(row, "Order_ID", row_number)?,
            origin: self.require_string(row, "Origin", row_number)?,
            destination: self.require_string(row, "Destination", row_number)?,
            product_category: self.require_string(row, "Product_Category", row_number)?,
            order_value: self.require_f64(row, "Order_Value_INR", row_number)?,
        })
    }
}

impl RecordMapper<CostRecord> for FieldMapper {
    fn map_row(&self, row: &RawRow, row_number: usize) -> ImportResult<CostRecord> {
        Ok(CostRecord {
            order_id: self.require_string(row, "Order_ID", row_number)?,
            fuel_cost: self.require_f64(row, "Fuel_Cost", row_number)?,
            labor_cost: self.require_f64(row, "Labor_Cost", row_number)?,
            vehicle_maintenance: self.require_f64(row, "Vehicle_Maintenance", row_number)?,
            insurance: self.require_f64(row, "Insurance", row_number)?,
            packaging_cost: self.require_f64(row, "Packaging_Cost", row_number)?,
            technology_platform_fee: self.require_f64(row, "Technology_Platform_Fee", row_number)?,
            other_overhead: self.require_f64(row, "Other_Overhead", row_number)?,
        })
    }
}

impl RecordMapper<DeliveryPerformance> for FieldMapper {
    fn map_row(&self, row: &RawRow, row_number: usize) -> ImportResult<DeliveryPerformance> {
        Ok(DeliveryPerformance {
            order_id: self.require_string(row, "Order_ID", row_number)?,
            carrier: self.require_string(row, "Carrier", row_number)?,
            actual_delivery_days: self.require_f64(row, "Actual_Delivery_Days", row_number)?,
            delivery_status: self.get_string(row, "Delivery_Status").unwrap_or_default(),
        })
    }
}

impl RecordMapper<RouteRecord> for FieldMapper {
    fn map_row(&self, row: &RawRow, row_number: usize) -> ImportResult<RouteRecord> {
        Ok(RouteRecord {
            order_id: self.get_string(row, "Order_ID"),
            route: self.require_string(row, "Route", row_number)?,
            distance_km: self.require_f64(row, "Distance_KM", row_number)?,
            fuel_consumption_l: self.require_f64(row, "Fuel_Consumption_L", row_number)?,
            toll_charges: self.require_f64(row, "Toll_Charges_INR", row_number)?,
            traffic_delay_minutes: self.f64_or_zero(row, "Traffic_Delay_Minutes", row_number)?,
            weather_impact: self
                .get_string(row, "Weather_Impact")
                .filter(|w| !w.eq_ignore_ascii_case("none")),
        })
    }
}

impl RecordMapper<InventoryRecord> for FieldMapper {
    fn map_row(&self, row: &RawRow, row_number: usize) -> ImportResult<InventoryRecord> {
        Ok(InventoryRecord {
            location: self.require_string(row, "Location", row_number)?,
            product_category: self.require_string(row, "Product_Category", row_number)?,
            current_stock: self.require_u64(row, "Current_Stock_Units", row_number)?,
            reorder_level: self.require_u64(row, "Reorder_Level", row_number)?,
        })
    }
}

impl RecordMapper<Vehicle> for FieldMapper {
    fn map_row(&self, row: &RawRow, row_number: usize) -> ImportResult<Vehicle> {
        let status_text = self.require_string(row, "Status", row_number)?;
        let status = status_text
            .parse::<VehicleStatus>()
            .map_err(|message| ImportError::TypeConversionError {
                row: row_number,
                field: "Status".to_string(),
                message,
            })?;

        Ok(Vehicle {
            vehicle_id: self.require_string(row, "Vehicle_ID", row_number)?,
            vehicle_type: self.get_string(row, "Vehicle_Type").unwrap_or_default(),
            capacity_kg: self.f64_or_zero(row, "Capacity_KG", row_number)?,
            fuel_efficiency_km_per_l: self.require_f64(row, "Fuel_Efficiency_KM_per_L", row_number)?,
            co2_emissions_kg_per_km: self.require_f64(row, "CO2_Emissions_Kg_per_KM", row_number)?,
            age_years: self.require_f64(row, "Age_Years", row_number)?,
            status,
            current_location: self.get_string(row, "Current_Location").unwrap_or_default(),
        })
    }
}

impl FieldMapper {
    /// 提取字符串字段（返回 Option），支持多个可能的列名（别名）
    fn get_string(&self, row: &RawRow, key: &str) -> Option<String> {
        let aliases: &[&str] = match key {
            "Order_Value_INR" => &["Order_Value_INR", "Order_Value"],
            "Toll_Charges_INR" => &["Toll_Charges_INR", "Toll_Charges"],
            "Current_Stock_Units" => &["Current_Stock_Units", "Current_Stock"],
            "Reorder_Level" => &["Reorder_Level", "Reorder_Threshold"],
            "Fuel_Efficiency_KM_per_L" => &["Fuel_Efficiency_KM_per_L", "Fuel_Efficiency"],
            "CO2_Emissions_Kg_per_KM" => &["CO2_Emissions_Kg_per_KM", "CO2_Emissions"],
            "Actual_Delivery_Days" => &["Actual_Delivery_Days", "Delivery_Days"],
            _ => std::slice::from_ref(&key),
        };

        aliases.iter().find_map(|alias| {
            row.get(*alias)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })
    }

    fn require_string(&self, row: &RawRow, key: &str, row_number: usize) -> ImportResult<String> {
        self.get_string(row, key).ok_or_else(|| ImportError::MissingField {
            source_name: String::new(),
            row: row_number,
            field: key.to_string(),
        })
    }

    /// 解析浮点数（空值返回 None）
    fn parse_f64(&self, row: &RawRow, key: &str, row_number: usize) -> ImportResult<Option<f64>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => match value.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(ImportError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("无法解析为浮点数: {}", value),
                }),
            },
        }
    }

    fn require_f64(&self, row: &RawRow, key: &str, row_number: usize) -> ImportResult<f64> {
        self.parse_f64(row, key, row_number)?
            .ok_or_else(|| ImportError::MissingField {
                source_name: String::new(),
                row: row_number,
                field: key.to_string(),
            })
    }

    /// 可选数值字段（Traffic_Delay_Minutes / Capacity_KG）空值按 0 处理
    fn f64_or_zero(&self, row: &RawRow, key: &str, row_number: usize) -> ImportResult<f64> {
        Ok(self.parse_f64(row, key, row_number)?.unwrap_or(0.0))
    }

    /// 解析非负整数（兼容 "40.0" 这类整数值浮点写法）
    fn require_u64(&self, row: &RawRow, key: &str, row_number: usize) -> ImportResult<u64> {
        let value = self.require_string(row, key, row_number)?;
        if let Ok(v) = value.parse::<u64>() {
            return Ok(v);
        }

        match value.parse::<f64>() {
            Ok(v) if v.is_finite() && v < 0.0 => Err(ImportError::ValueRangeError {
                row: row_number,
                field: key.to_string(),
                value: v,
                min: 0.0,
                max: u64::MAX as f64,
            }),
            Ok(v) if v.is_finite() && v.fract() == 0.0 && v < u64::MAX as f64 => Ok(v as u64),
            _ => Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为非负整数: {}", value),
            }),
        }
    }
}
