use crate::domain::pricing::{compare_to_listed, format_usd};
use crate::domain::record::FeatureRecord;
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::state::AppState;
use crate::templates::pages::estimator::{ComparisonVm, EstimatorVm, ResultVm};
use crate::templates::pages::estimator_page;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => estimator_form(req, state),
        ("POST", "/predict") => predict(req, state),
        _ => Err(ServerError::NotFound),
    }
}

/// Idle state: the form with choices drawn from the reference dataset.
/// An optional `?borough=` query repopulates the dependent neighborhood
/// select without running a prediction.
fn estimator_form(req: Request, state: &AppState) -> ResultResp {
    let params = parse_query(&req);
    let boroughs = state.listings.distinct_boroughs();

    let borough = params
        .get("borough")
        .filter(|b| boroughs.iter().any(|known| known == *b))
        .cloned()
        .or_else(|| boroughs.first().cloned())
        .unwrap_or_default();
    let neighborhoods = state.listings.distinct_neighborhoods(&borough);

    let record = FeatureRecord {
        borough,
        neighborhood: neighborhoods.first().cloned().unwrap_or_default(),
        ..FeatureRecord::default()
    };

    html_response(estimator_page(&EstimatorVm {
        boroughs,
        neighborhoods,
        record,
        listed_rent: 0.0,
        result: None,
    }))
}

/// Submission: assemble one record, run the model, re-render the page with
/// the result section. A schema mismatch from the model is not caught here.
fn predict(req: Request, state: &AppState) -> ResultResp {
    let form = parse_form_body(req)?;
    let record = record_from_form(&form)?;
    let listed_rent = opt_f64(&form, "listed_rent")?.unwrap_or(0.0);

    let predicted = state.model.predict(&record)?;

    let comparison = compare_to_listed(predicted, listed_rent).map(|cmp| ComparisonVm {
        label: cmp.verdict.label(),
        listed_usd: format_usd(cmp.listed_rent),
        diff_pct: cmp.diff_pct,
        gauge: cmp.gauge,
    });

    let boroughs = state.listings.distinct_boroughs();
    let neighborhoods = state.listings.distinct_neighborhoods(&record.borough);

    html_response(estimator_page(&EstimatorVm {
        boroughs,
        neighborhoods,
        record,
        listed_rent,
        result: Some(ResultVm {
            predicted_usd: format_usd(predicted),
            comparison,
        }),
    }))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

fn parse_form_body(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect())
}

fn record_from_form(form: &HashMap<String, String>) -> Result<FeatureRecord, ServerError> {
    Ok(FeatureRecord {
        bedrooms: req_u32(form, "bedrooms")?,
        bathrooms: req_f64(form, "bathrooms")?,
        size_sqft: req_u32(form, "size_sqft")?,
        borough: req_str(form, "borough")?,
        neighborhood: req_str(form, "neighborhood")?,
        no_fee: flag(form, "no_fee"),
        has_dishwasher: flag(form, "has_dishwasher"),
        min_to_subway: req_u32(form, "min_to_subway")?,
        floor: req_u32(form, "floor")?,
        has_doorman: flag(form, "has_doorman"),
        building_age_yrs: req_u32(form, "building_age_yrs")?,
        has_elevator: flag(form, "has_elevator"),
        has_patio: flag(form, "has_patio"),
        has_roofdeck: flag(form, "has_roofdeck"),
        has_washer_dryer: flag(form, "has_washer_dryer"),
        has_gym: flag(form, "has_gym"),
    })
}

fn req_str(form: &HashMap<String, String>, key: &str) -> Result<String, ServerError> {
    form.get(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing field `{key}`")))
}

fn req_u32(form: &HashMap<String, String>, key: &str) -> Result<u32, ServerError> {
    req_str(form, key)?
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid number for `{key}`")))
}

fn req_f64(form: &HashMap<String, String>, key: &str) -> Result<f64, ServerError> {
    req_str(form, key)?
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid number for `{key}`")))
}

fn opt_f64(form: &HashMap<String, String>, key: &str) -> Result<Option<f64>, ServerError> {
    match form.get(key).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("invalid number for `{key}`"))),
    }
}

/// Unchecked checkboxes are simply absent from a urlencoded form body.
fn flag(form: &HashMap<String, String>, key: &str) -> bool {
    form.contains_key(key)
}
