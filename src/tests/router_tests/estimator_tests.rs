use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::init_test_state;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

// A 2bd/1ba 1000 sqft Chelsea apartment with no amenities; the fixture
// model predicts exactly $4,385 for this record.
const CHELSEA_FORM: &str = "borough=Manhattan&neighborhood=Chelsea&bedrooms=2&bathrooms=1.0\
&size_sqft=1000&floor=3&building_age_yrs=20&min_to_subway=5";

#[test]
fn home_page_shows_form_with_borough_choices() {
    let state = init_test_state();

    let resp = handle(get("/"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("NYC Rent Analyzer"));
    assert!(body.contains("action=\"/predict\""));
    assert!(body.contains("Brooklyn"));
    assert!(body.contains("Manhattan"));
    assert!(body.contains("Queens"));

    // Idle state: no prediction rendered yet.
    assert!(!body.contains("Estimated fair rent:"));
}

#[test]
fn home_page_defaults_to_first_borough_neighborhoods() {
    let state = init_test_state();

    let body = body_string(handle(get("/"), &state).unwrap());

    // Brooklyn sorts first, so its neighborhoods populate the select.
    assert!(body.contains("Dumbo"));
    assert!(body.contains("Williamsburg"));
    assert!(!body.contains("Chelsea"));
}

#[test]
fn borough_query_switches_neighborhood_choices() {
    let state = init_test_state();

    let body = body_string(handle(get("/?borough=Queens"), &state).unwrap());

    assert!(body.contains("Astoria"));
    assert!(!body.contains("Dumbo"));
}

#[test]
fn unknown_borough_query_falls_back_to_first() {
    let state = init_test_state();

    let body = body_string(handle(get("/?borough=Atlantis"), &state).unwrap());

    assert!(body.contains("Dumbo"));
}

#[test]
fn predict_renders_the_estimate() {
    let state = init_test_state();

    let req = post_form("/predict", &format!("{CHELSEA_FORM}&listed_rent=0"));
    let resp = handle(req, &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Estimated fair rent:"));
    assert!(body.contains("$4,385"));

    // Listed rent of 0 means no comparison block at all.
    assert!(!body.contains("relative to the model estimate"));
    assert!(!body.contains("<progress"));
}

#[test]
fn predict_without_listed_rent_field_renders_no_comparison() {
    let state = init_test_state();

    let body = body_string(handle(post_form("/predict", CHELSEA_FORM), &state).unwrap());

    assert!(body.contains("$4,385"));
    assert!(!body.contains("relative to the model estimate"));
}

#[test]
fn predict_flags_an_overpriced_listing() {
    let state = init_test_state();

    // 5500 against 4385 is +25.4%; gauge truncates to 75.
    let req = post_form("/predict", &format!("{CHELSEA_FORM}&listed_rent=5500"));
    let body = body_string(handle(req, &state).unwrap());

    assert!(body.contains("Overpriced"));
    assert!(body.contains("$5,500"));
    assert!(body.contains("+25.4%"));
    assert!(body.contains("value=\"75\""));
}

#[test]
fn predict_flags_an_underpriced_listing() {
    let state = init_test_state();

    // 3000 against 4385 is -31.6%; gauge truncates to 18.
    let req = post_form("/predict", &format!("{CHELSEA_FORM}&listed_rent=3000"));
    let body = body_string(handle(req, &state).unwrap());

    assert!(body.contains("Underpriced"));
    assert!(body.contains("-31.6%"));
    assert!(body.contains("value=\"18\""));
}

#[test]
fn predict_calls_a_matching_listing_fairly_priced() {
    let state = init_test_state();

    let req = post_form("/predict", &format!("{CHELSEA_FORM}&listed_rent=4385"));
    let body = body_string(handle(req, &state).unwrap());

    assert!(body.contains("Fairly priced"));
    assert!(body.contains("+0.0%"));
    assert!(body.contains("value=\"50\""));
}

#[test]
fn amenity_checkboxes_feed_the_model() {
    let state = init_test_state();

    // Doorman adds its 90-dollar coefficient to the baseline 4385.
    let req = post_form("/predict", &format!("{CHELSEA_FORM}&has_doorman=on"));
    let body = body_string(handle(req, &state).unwrap());

    assert!(body.contains("$4,475"));
}

#[test]
fn unknown_neighborhood_propagates_as_schema_mismatch() {
    let state = init_test_state();

    let form = CHELSEA_FORM.replace("neighborhood=Chelsea", "neighborhood=Atlantis");
    let result = handle(post_form("/predict", &form), &state);

    assert!(matches!(result, Err(ServerError::SchemaMismatch(_))));
}

#[test]
fn missing_numeric_field_is_a_bad_request() {
    let state = init_test_state();

    let form = CHELSEA_FORM.replace("&bedrooms=2", "");
    let result = handle(post_form("/predict", &form), &state);

    match result {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("bedrooms")),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[test]
fn unknown_route_is_not_found() {
    let state = init_test_state();

    let result = handle(get("/nope"), &state);

    assert!(matches!(result, Err(ServerError::NotFound)));
}
