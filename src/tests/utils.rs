use crate::listings::ReferenceDataset;
use crate::model::RentModel;
use crate::state::AppState;

/// A small deterministic model so router tests can assert exact rendered
/// numbers. For a 2bd/1ba, 1000 sqft Chelsea record with default floor (3),
/// age (20) and subway (5) and no amenities, it predicts exactly $4,385.
pub const TEST_MODEL_JSON: &str = r#"{
    "intercept": 500.0,
    "coefficients": {
        "bedrooms": 250.0,
        "bathrooms": 150.0,
        "size_sqft": 2.0,
        "no_fee": -50.0,
        "has_dishwasher": 40.0,
        "min_to_subway": -10.0,
        "floor": 15.0,
        "has_doorman": 90.0,
        "building_age_yrs": -3.0,
        "has_elevator": 60.0,
        "has_patio": 30.0,
        "has_roofdeck": 20.0,
        "has_washer_dryer": 80.0,
        "has_gym": 70.0
    },
    "borough_effects": {
        "Brooklyn": 300.0,
        "Manhattan": 800.0,
        "Queens": 100.0
    },
    "neighborhood_effects": {
        "Astoria": 50.0,
        "Chelsea": 500.0,
        "Dumbo": 400.0,
        "Harlem": -100.0,
        "Williamsburg": 250.0
    }
}"#;

pub const TEST_LISTINGS_CSV: &str = "\
rent,borough,neighborhood,size_sqft
3500,Brooklyn,Williamsburg,700
4200,Brooklyn,Dumbo,650
3600,Brooklyn,Williamsburg,720
4800,Manhattan,Chelsea,600
2400,Manhattan,Harlem,800
2300,Queens,Astoria,750
";

/// Build a fresh in-memory state from the fixture artifacts above.
pub fn init_test_state() -> AppState {
    let model = RentModel::from_reader(TEST_MODEL_JSON.as_bytes())
        .unwrap_or_else(|e| panic!("Test model failed to parse: {e}"));
    let listings = ReferenceDataset::from_reader(TEST_LISTINGS_CSV.as_bytes())
        .unwrap_or_else(|e| panic!("Test listings failed to parse: {e}"));

    AppState { model, listings }
}
