// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成六类数据源 CSV 文件（确定性,无随机数）
// 输出: tests/fixtures/datasets/*.csv（可通过第一个参数指定目录）
// ==========================================

use csv::Writer;
use std::error::Error;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

const CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Pune",
    "Hyderabad",
];

const CARRIERS: &[&str] = &[
    "SpeedyLogistics",
    "QuickShip",
    "GlobalTransit",
    "ReliableExpress",
    "EcoDeliver",
];

const CATEGORIES: &[&str] = &[
    "Electronics",
    "Fashion",
    "Food & Beverage",
    "Healthcare",
    "Industrial",
    "Books",
    "Home Goods",
];

const VEHICLE_TYPES: &[(&str, f64, f64, f64)] = &[
    // 车型, 载重kg, 油耗km/L, 排放kg/km
    ("Small_Van", 1000.0, 12.0, 0.18),
    ("Medium_Truck", 5000.0, 8.0, 0.35),
    ("Large_Truck", 15000.0, 5.0, 0.62),
    ("Express_Bike", 50.0, 40.0, 0.05),
    ("Refrigerated", 7000.0, 6.0, 0.55),
];

const ORDER_COUNT: usize = 200;
const VEHICLE_COUNT: usize = 50;

// 城市坐标（粗略,km）,用于确定性生成距离
fn city_position(idx: usize) -> (f64, f64) {
    const POSITIONS: &[(f64, f64)] = &[
        (0.0, 0.0),
        (250.0, 1150.0),
        (700.0, -800.0),
        (1050.0, -900.0),
        (1650.0, 350.0),
        (120.0, -130.0),
        (600.0, -400.0),
    ];
    POSITIONS[idx % POSITIONS.len()]
}

fn distance_between(a: usize, b: usize) -> f64 {
    let (ax, ay) = city_position(a);
    let (bx, by) = city_position(b);
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt().round().max(50.0)
}

fn order_endpoints(i: usize) -> (usize, usize) {
    let origin = i % CITIES.len();
    let mut destination = (i * 3 + 1) % CITIES.len();
    if destination == origin {
        destination = (destination + 1) % CITIES.len();
    }
    (origin, destination)
}

fn order_id(i: usize) -> String {
    format!("ORD{:06}", i + 1)
}

fn writer_for(dir: &Path, name: &str) -> Result<Writer<File>, Box<dyn Error>> {
    let file = File::create(dir.join(name))?;
    Ok(Writer::from_writer(file))
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/datasets"));
    fs::create_dir_all(&out_dir)?;

    println!("开始生成测试数据集 → {}", out_dir.display());

    generate_orders(&out_dir)?;
    generate_costs(&out_dir)?;
    generate_performance(&out_dir)?;
    generate_routes(&out_dir)?;
    generate_inventory(&out_dir)?;
    generate_vehicles(&out_dir)?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn generate_orders(dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = writer_for(dir, "orders.csv")?;
    wtr.write_record([
        "Order_ID",
        "Origin",
        "Destination",
        "Product_Category",
        "Order_Value_INR",
    ])?;

    for i in 0..ORDER_COUNT {
        let (origin, destination) = order_endpoints(i);
        // 每 50 单一笔申报价值为 0（利润率未定义）
        let value = if i % 50 == 49 {
            0.0
        } else {
            800.0 + ((i * 137) % 4200) as f64 + (i % 7) as f64 * 0.25
        };
        wtr.write_record([
            order_id(i),
            CITIES[origin].to_string(),
            CITIES[destination].to_string(),
            CATEGORIES[(i * 5 + 2) % CATEGORIES.len()].to_string(),
            format!("{:.2}", value),
        ])?;
    }

    wtr.flush()?;
    println!("✓ 生成 orders.csv ({}条)", ORDER_COUNT);
    Ok(())
}

fn generate_costs(dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = writer_for(dir, "cost_breakdown.csv")?;
    wtr.write_record([
        "Order_ID",
        "Fuel_Cost",
        "Labor_Cost",
        "Vehicle_Maintenance",
        "Insurance",
        "Packaging_Cost",
        "Technology_Platform_Fee",
        "Other_Overhead",
    ])?;

    let mut written = 0;
    for i in 0..ORDER_COUNT {
        // 每 20 单缺一条成本记录（联表时被丢弃）
        if i % 20 == 19 {
            continue;
        }
        let (origin, destination) = order_endpoints(i);
        let fuel = distance_between(origin, destination) * 0.35;
        let carrier_factor = 1.0 + (i % CARRIERS.len()) as f64 * 0.12;
        wtr.write_record([
            order_id(i),
            format!("{:.2}", fuel * carrier_factor),
            format!("{:.2}", 150.0 + (i % 9) as f64 * 20.0),
            format!("{:.2}", 40.0 + (i % 5) as f64 * 8.0),
            format!("{:.2}", 25.0 + (i % 4) as f64 * 5.0),
            format!("{:.2}", 15.0 + (i % 3) as f64 * 10.0),
            "12.00".to_string(),
            format!("{:.2}", 30.0 + (i % 6) as f64 * 4.0),
        ])?;
        written += 1;
    }

    wtr.flush()?;
    println!("✓ 生成 cost_breakdown.csv ({}条)", written);
    Ok(())
}

fn generate_performance(dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = writer_for(dir, "delivery_performance.csv")?;
    wtr.write_record([
        "Order_ID",
        "Carrier",
        "Actual_Delivery_Days",
        "Delivery_Status",
    ])?;

    for i in 0..ORDER_COUNT {
        let days = 1 + (i * 7) % 6;
        let status = match i % 10 {
            0..=6 => "On-Time",
            7 | 8 => "Slightly-Delayed",
            _ => "Severely-Delayed",
        };
        wtr.write_record([
            order_id(i),
            CARRIERS[i % CARRIERS.len()].to_string(),
            days.to_string(),
            status.to_string(),
        ])?;
    }

    wtr.flush()?;
    println!("✓ 生成 delivery_performance.csv ({}条)", ORDER_COUNT);
    Ok(())
}

fn generate_routes(dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = writer_for(dir, "routes_distance.csv")?;
    wtr.write_record([
        "Order_ID",
        "Route",
        "Distance_KM",
        "Fuel_Consumption_L",
        "Toll_Charges_INR",
        "Traffic_Delay_Minutes",
        "Weather_Impact",
    ])?;

    // 订单级路线（同一起讫点距离略有差异,模拟平行线路）
    for i in 0..ORDER_COUNT {
        let (origin, destination) = order_endpoints(i);
        let distance = distance_between(origin, destination) + (i % 4) as f64 * 15.0;
        let weather = match i % 8 {
            0 => "Heavy_Rain",
            3 => "Fog",
            _ => "None",
        };
        wtr.write_record([
            order_id(i),
            format!("{}-{}", CITIES[origin], CITIES[destination]),
            format!("{:.1}", distance),
            format!("{:.1}", distance / 7.5),
            format!("{:.0}", distance * 0.9),
            ((i * 11) % 90).to_string(),
            weather.to_string(),
        ])?;
    }

    // 独立路线描述（无订单号）
    let mut standalone = 0;
    for a in 0..CITIES.len() {
        let b = (a + 2) % CITIES.len();
        let distance = distance_between(a, b);
        wtr.write_record([
            String::new(),
            format!("{}-{}", CITIES[a], CITIES[b]),
            format!("{:.1}", distance),
            format!("{:.1}", distance / 8.0),
            format!("{:.0}", distance * 0.8),
            "20".to_string(),
            "None".to_string(),
        ])?;
        standalone += 1;
    }

    wtr.flush()?;
    println!(
        "✓ 生成 routes_distance.csv ({}条订单级 + {}条独立路线)",
        ORDER_COUNT, standalone
    );
    Ok(())
}

fn generate_inventory(dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = writer_for(dir, "warehouse_inventory.csv")?;
    wtr.write_record([
        "Location",
        "Product_Category",
        "Current_Stock_Units",
        "Reorder_Level",
    ])?;

    let mut count = 0;
    for (ci, city) in CITIES.iter().enumerate() {
        for (pi, category) in CATEGORIES.iter().enumerate() {
            let reorder = 20 + ((ci + pi) % 5) as u64 * 10;
            // 轮换三种状态: 低于补货线 / 正常 / 超储
            let stock = match (ci * 3 + pi) % 3 {
                0 => reorder / 2,
                1 => reorder * 2,
                _ => reorder * 4 + 5,
            };
            wtr.write_record([
                city.to_string(),
                category.to_string(),
                stock.to_string(),
                reorder.to_string(),
            ])?;
            count += 1;
        }
    }

    wtr.flush()?;
    println!("✓ 生成 warehouse_inventory.csv ({}条)", count);
    Ok(())
}

fn generate_vehicles(dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = writer_for(dir, "vehicle_fleet.csv")?;
    wtr.write_record([
        "Vehicle_ID",
        "Vehicle_Type",
        "Capacity_KG",
        "Fuel_Efficiency_KM_per_L",
        "CO2_Emissions_Kg_per_KM",
        "Age_Years",
        "Status",
        "Current_Location",
    ])?;

    for i in 0..VEHICLE_COUNT {
        let (vehicle_type, capacity, efficiency, emissions) = VEHICLE_TYPES[i % VEHICLE_TYPES.len()];
        let status = match i % 6 {
            0..=3 => "Available",
            4 => "In_Transit",
            _ => "Maintenance",
        };
        wtr.write_record([
            format!("VEH{:03}", i + 1),
            vehicle_type.to_string(),
            format!("{:.0}", capacity),
            format!("{:.1}", efficiency - (i % 3) as f64 * 0.5),
            format!("{:.2}", emissions + (i % 4) as f64 * 0.02),
            ((i * 7) % 13).to_string(),
            status.to_string(),
            CITIES[(i * 2) % CITIES.len()].to_string(),
        ])?;
    }

    wtr.flush()?;
    println!("✓ 生成 vehicle_fleet.csv ({}条)", VEHICLE_COUNT);
    Ok(())
}
