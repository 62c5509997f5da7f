use crate::domain::record::FeatureRecord;
use crate::state::AppState;

// Loads the artifacts checked in at their production paths, the same files
// `main()` loads. Guards against the sample model and the sample listings
// drifting apart (a neighborhood in the CSV the model was not trained on
// would make a valid form submission fail).
#[test]
fn checked_in_artifacts_load_and_agree() {
    let state = AppState::load().expect("checked-in artifacts should load");

    let boroughs = state.listings.distinct_boroughs();
    assert!(!boroughs.is_empty());

    for borough in &boroughs {
        let neighborhoods = state.listings.distinct_neighborhoods(borough);
        assert!(
            !neighborhoods.is_empty(),
            "borough `{borough}` has no neighborhoods"
        );

        for neighborhood in neighborhoods {
            let record = FeatureRecord {
                borough: borough.clone(),
                neighborhood: neighborhood.clone(),
                ..FeatureRecord::default()
            };
            let rent = state
                .model
                .predict(&record)
                .unwrap_or_else(|e| panic!("predict failed for {borough}/{neighborhood}: {e}"));
            assert!(rent > 0.0, "nonpositive rent for {borough}/{neighborhood}");
        }
    }
}
