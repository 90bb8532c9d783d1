use carbonsense_core::models::{
    Confidence, ContextScore, GridReading, Method, ModelOutcome, PredictionResult, Rating,
    SignalMeta, WeatherCondition,
};
use carbonsense_core::VehicleType;

#[test]
fn rating_is_a_step_function_of_score() {
    assert_eq!(Rating::from_score(100.0), Rating::Excellent);
    assert_eq!(Rating::from_score(80.0), Rating::Excellent);
    assert_eq!(Rating::from_score(79.9), Rating::Good);
    assert_eq!(Rating::from_score(65.0), Rating::Good);
    assert_eq!(Rating::from_score(50.0), Rating::Fair);
    assert_eq!(Rating::from_score(35.0), Rating::Poor);
    assert_eq!(Rating::from_score(34.9), Rating::VeryPoor);
    assert_eq!(Rating::from_score(0.0), Rating::VeryPoor);
}

#[test]
fn very_poor_rating_serializes_with_space() {
    let score = ContextScore {
        score: 10.0,
        rating: Rating::VeryPoor,
        message: Rating::VeryPoor.message().to_string(),
        factors: vec![],
        weights: Default::default(),
    };
    let json = serde_json::to_value(&score).unwrap();
    assert_eq!(json["rating"], "Very Poor");
}

#[test]
fn grid_reading_flattens_provenance() {
    let reading = GridReading {
        intensity_gco2_kwh: 212.0,
        meta: SignalMeta {
            source: "UK Carbon Intensity API (Free)".into(),
            location: "United Kingdom".into(),
            timestamp: "2024-01-01T12:00Z".into(),
            confidence: Confidence::High,
            method: Method::Api,
        },
        components: None,
        comparison: None,
    };
    let json = serde_json::to_value(&reading).unwrap();
    assert_eq!(json["intensity_gco2_kwh"], 212.0);
    assert_eq!(json["confidence"], "high");
    assert_eq!(json["method"], "api");
    assert!(json.get("components").is_none());
}

#[test]
fn method_labels_are_snake_case() {
    let labels: Vec<String> = [
        Method::Api,
        Method::Temporal,
        Method::Static,
        Method::TimeBasedEstimate,
        Method::RealTimeApi,
    ]
    .iter()
    .map(|m| serde_json::to_value(m).unwrap().as_str().unwrap().to_string())
    .collect();
    assert_eq!(
        labels,
        vec!["api", "temporal", "static", "time_based_estimate", "real_time_api"]
    );
}

#[test]
fn model_outcome_is_untagged() {
    let ok = serde_json::to_value(ModelOutcome::Success(PredictionResult::point(1.5))).unwrap();
    assert_eq!(ok, serde_json::json!({"mean": 1.5}));
    let failed = serde_json::to_value(ModelOutcome::Failed {
        error: "boom".into(),
    })
    .unwrap();
    assert_eq!(failed, serde_json::json!({"error": "boom"}));
}

#[test]
fn interval_is_symmetric() {
    let p = PredictionResult::with_interval(2.0, 0.5, 1.96);
    assert!((p.ci_lower.unwrap() - 1.02).abs() < 1e-9);
    assert!((p.ci_upper.unwrap() - 2.98).abs() < 1e-9);
}

#[test]
fn vehicle_factors_are_exact() {
    let expected = [
        ("petrol_car", 0.170),
        ("diesel_car", 0.165),
        ("hybrid", 0.110),
        ("electric", 0.053),
        ("motorcycle", 0.113),
        ("bus", 0.089),
        ("train", 0.041),
        ("bicycle", 0.000),
        ("walking", 0.000),
    ];
    for (name, factor) in expected {
        let vehicle = VehicleType::from_name(name).unwrap();
        assert_eq!(vehicle.emission_factor(), factor, "{name}");
    }
    assert_eq!(
        VehicleType::from_name_or_default(Some("hovercraft")),
        VehicleType::PetrolCar
    );
    assert_eq!(VehicleType::from_name("Electric"), Some(VehicleType::Electric));
}

#[test]
fn weather_condition_groups() {
    assert_eq!(WeatherCondition::from_label("Clear"), WeatherCondition::Clear);
    assert_eq!(WeatherCondition::from_label("Mist"), WeatherCondition::Other);
    assert!(WeatherCondition::Drizzle.is_rain());
    assert!(!WeatherCondition::Snow.is_rain());
}
