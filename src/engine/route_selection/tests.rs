use super::*;
use crate::domain::route::{RouteCandidate, RouteRecord};
use crate::domain::types::{RankLabel, VehicleStatus};
use crate::domain::vehicle::{ScoreNormalization, Vehicle};
use crate::engine::error::EngineError;

// ==========================================
// 测试辅助函数
// ==========================================

fn create_test_route(label: &str, distance_km: f64, fuel_l: f64, toll: f64) -> RouteRecord {
    RouteRecord {
        order_id: None,
        route: label.to_string(),
        distance_km,
        fuel_consumption_l: fuel_l,
        toll_charges: toll,
        traffic_delay_minutes: 0.0,
        weather_impact: None,
    }
}

fn create_test_vehicle(
    id: &str,
    efficiency: f64,
    emissions: f64,
    age: f64,
    status: VehicleStatus,
) -> Vehicle {
    Vehicle {
        vehicle_id: id.to_string(),
        vehicle_type: "Medium_Truck".to_string(),
        capacity_kg: 5000.0,
        fuel_efficiency_km_per_l: efficiency,
        co2_emissions_kg_per_km: emissions,
        age_years: age,
        status,
        current_location: "Mumbai".to_string(),
    }
}

fn shortest_of(outcome: RouteSelectionOutcome) -> RouteCandidate {
    match outcome {
        RouteSelectionOutcome::Found(selection) => selection.shortest,
        other => panic!("应找到路线, 实际: {:?}", other),
    }
}

fn ranking_of(outcome: VehicleRecommendationOutcome) -> crate::domain::vehicle::RouteScopedRanking {
    match outcome {
        VehicleRecommendationOutcome::Ranked(ranking) => ranking,
        VehicleRecommendationOutcome::NoVehicleAvailable => panic!("应有可用车辆"),
    }
}

// ==========================================
// 路线查询
// ==========================================

#[test]
fn test_shortest_of_two_parallel_routes() {
    let engine = RouteSelectionEngine::new();
    let routes = vec![
        create_test_route("A-B", 120.0, 12.0, 300.0),
        create_test_route("A-B", 100.0, 15.0, 200.0),
        create_test_route("A-C", 50.0, 5.0, 0.0),
    ];

    match engine.select_route(&routes, "A", "B") {
        RouteSelectionOutcome::Found(selection) => {
            assert_eq!(selection.shortest.record.distance_km, 100.0);
            assert_eq!(selection.candidates.len(), 2);
            // 燃油费 = 15 × 100, 总成本 = 1500 + 200
            assert_eq!(selection.shortest.fuel_cost, 1500.0);
            assert_eq!(selection.shortest.total_cost, 1700.0);
        }
        other => panic!("应找到路线, 实际: {:?}", other),
    }
}

#[test]
fn test_select_route_is_symmetric() {
    let engine = RouteSelectionEngine::new();
    let routes = vec![
        create_test_route("Mumbai-Delhi", 1400.0, 150.0, 900.0),
        create_test_route("Delhi-Mumbai", 1380.0, 160.0, 800.0),
        create_test_route("Mumbai-Pune", 150.0, 20.0, 100.0),
    ];

    let forward = engine.select_route(&routes, "Mumbai", "Delhi");
    let backward = engine.select_route(&routes, "Delhi", "Mumbai");

    match (forward, backward) {
        (RouteSelectionOutcome::Found(f), RouteSelectionOutcome::Found(b)) => {
            assert_eq!(f.candidates, b.candidates);
            assert_eq!(f.shortest, b.shortest);
            assert_eq!(f.shortest.record.distance_km, 1380.0);
        }
        other => panic!("双向都应找到路线: {:?}", other),
    }
}

#[test]
fn test_shortest_tie_keeps_first_occurrence() {
    let engine = RouteSelectionEngine::new();
    let routes = vec![
        create_test_route("A-B", 100.0, 10.0, 1.0),
        create_test_route("B-A", 100.0, 10.0, 2.0),
    ];

    let shortest = shortest_of(engine.select_route(&routes, "A", "B"));
    assert_eq!(shortest.record.toll_charges, 1.0);
}

#[test]
fn test_no_route_found_echoes_endpoints() {
    let engine = RouteSelectionEngine::new();
    let routes = vec![create_test_route("A-B", 100.0, 10.0, 0.0)];

    assert_eq!(
        engine.select_route(&routes, "X", "Y"),
        RouteSelectionOutcome::NoRouteFound {
            origin: "X".to_string(),
            destination: "Y".to_string(),
        }
    );
}

#[test]
fn test_network_stats_and_cities() {
    let engine = RouteSelectionEngine::new();
    let routes = vec![
        create_test_route("Mumbai-Delhi", 1400.0, 150.0, 900.0),
        create_test_route("Pune-Mumbai", 200.0, 30.0, 100.0),
        create_test_route("broken", 999.0, 1.0, 1.0),
    ];

    let stats = engine.network_stats(&routes);
    assert_eq!(stats.total_routes, 2);
    assert_eq!(stats.cities_covered, 3);
    assert_eq!(stats.average_distance_km, 800.0);
    assert_eq!(stats.longest_distance_km, 1400.0);
    assert_eq!(stats.average_fuel_consumption_l, 90.0);
    assert_eq!(stats.average_toll_charges, 500.0);

    assert_eq!(engine.list_cities(&routes), vec!["Delhi", "Mumbai", "Pune"]);
}

#[test]
fn test_network_stats_empty() {
    let engine = RouteSelectionEngine::new();
    let stats = engine.network_stats(&[]);
    assert_eq!(stats.total_routes, 0);
    assert_eq!(stats.average_distance_km, 0.0);
}

// ==========================================
// 车辆评分
// ==========================================

#[test]
fn test_composite_formula_pinned() {
    let norm = ScoreNormalization {
        max_fuel_cost: 2000.0,
        max_emissions_kg: 100.0,
    };
    // 0.4 × 0.5 + 0.4 × 0.25 + 0.2 × (1 - 6/10) = 0.2 + 0.1 + 0.08
    let score = composite_score(1000.0, 25.0, 6.0, &norm);
    assert!((score - 0.38).abs() < 1e-12);
}

#[test]
fn test_age_score_clamped() {
    assert_eq!(age_score(3.0), 7.0);
    assert_eq!(age_score(0.0), 10.0);
    assert_eq!(age_score(15.0), 0.0);
    assert_eq!(age_score(-2.0), 10.0);
}

#[test]
fn test_zero_denominator_contributes_zero() {
    let norm = ScoreNormalization {
        max_fuel_cost: 0.0,
        max_emissions_kg: 0.0,
    };
    assert_eq!(composite_score(0.0, 0.0, 10.0, &norm), 0.0);
}

#[test]
fn test_recommend_vehicles_ranks_top_three() {
    let engine = RouteSelectionEngine::new();
    let route = shortest_of(engine.select_route(
        &[create_test_route("A-B", 100.0, 10.0, 0.0)],
        "A",
        "B",
    ));
    let vehicles = vec![
        create_test_vehicle("V-OLD", 5.0, 1.0, 10.0, VehicleStatus::Available),
        create_test_vehicle("V-NEW", 10.0, 0.5, 0.0, VehicleStatus::Available),
        create_test_vehicle("V-MID", 8.0, 0.8, 4.0, VehicleStatus::Available),
        create_test_vehicle("V-BUSY", 20.0, 0.1, 0.0, VehicleStatus::InTransit),
        create_test_vehicle("V-WORST", 4.0, 1.2, 12.0, VehicleStatus::Available),
    ];

    let ranking = ranking_of(engine.recommend_vehicles(&vehicles, &route).unwrap());

    assert_eq!(ranking.candidate_count, 4);
    assert_eq!(ranking.distance_km, 100.0);
    // 最大燃油费 = 100 / 4 × 100 = 2500; 最大排放 = 1.2 × 100 = 120
    assert_eq!(ranking.normalization.max_fuel_cost, 2500.0);
    assert_eq!(ranking.normalization.max_emissions_kg, 120.0);

    let ids: Vec<&str> = ranking
        .recommendations
        .iter()
        .map(|r| r.score.vehicle_id.as_str())
        .collect();
    assert_eq!(ids, vec!["V-NEW", "V-MID", "V-OLD"]);

    let ranks: Vec<RankLabel> = ranking.recommendations.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![RankLabel::Best, RankLabel::Good, RankLabel::Viable]);

    let best = &ranking.recommendations[0].score;
    assert_eq!(best.fuel_cost, 1000.0);
    assert_eq!(best.emissions_kg, 50.0);
    assert_eq!(best.age_score, 10.0);
    let expected = 0.4 * (1000.0 / 2500.0) + 0.4 * (50.0 / 120.0);
    assert!((best.composite_score - expected).abs() < 1e-12);
}

#[test]
fn test_recommend_vehicles_fewer_than_three() {
    let engine = RouteSelectionEngine::new();
    let route = shortest_of(engine.select_route(
        &[create_test_route("A-B", 50.0, 5.0, 0.0)],
        "A",
        "B",
    ));
    let vehicles = vec![create_test_vehicle("V1", 10.0, 0.5, 2.0, VehicleStatus::Available)];

    let ranking = ranking_of(engine.recommend_vehicles(&vehicles, &route).unwrap());
    assert_eq!(ranking.recommendations.len(), 1);
    assert_eq!(ranking.best().map(|r| r.rank), Some(RankLabel::Best));
}

#[test]
fn test_no_vehicle_available() {
    let engine = RouteSelectionEngine::new();
    let route = shortest_of(engine.select_route(
        &[create_test_route("A-B", 50.0, 5.0, 0.0)],
        "A",
        "B",
    ));
    let vehicles = vec![
        create_test_vehicle("V1", 10.0, 0.5, 2.0, VehicleStatus::Maintenance),
        create_test_vehicle("V2", 10.0, 0.5, 2.0, VehicleStatus::InTransit),
    ];

    assert_eq!(
        engine.recommend_vehicles(&vehicles, &route).unwrap(),
        VehicleRecommendationOutcome::NoVehicleAvailable
    );
}

#[test]
fn test_zero_fuel_efficiency_is_malformed() {
    let engine = RouteSelectionEngine::new();
    let route = shortest_of(engine.select_route(
        &[create_test_route("A-B", 50.0, 5.0, 0.0)],
        "A",
        "B",
    ));
    let vehicles = vec![create_test_vehicle("V1", 0.0, 0.5, 2.0, VehicleStatus::Available)];

    let err = engine.recommend_vehicles(&vehicles, &route).unwrap_err();
    assert!(matches!(err, EngineError::MalformedRecord { .. }));
}

#[test]
fn test_equal_scores_keep_input_order() {
    let engine = RouteSelectionEngine::new();
    let route = shortest_of(engine.select_route(
        &[create_test_route("A-B", 80.0, 5.0, 0.0)],
        "A",
        "B",
    ));
    let vehicles = vec![
        create_test_vehicle("V1", 10.0, 0.5, 2.0, VehicleStatus::Available),
        create_test_vehicle("V2", 10.0, 0.5, 2.0, VehicleStatus::Available),
    ];

    let ranking = ranking_of(engine.recommend_vehicles(&vehicles, &route).unwrap());
    assert_eq!(ranking.recommendations[0].score.vehicle_id, "V1");
    assert_eq!(ranking.recommendations[1].score.vehicle_id, "V2");
}
