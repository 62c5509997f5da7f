use crate::domain::record::FeatureRecord;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Everything the estimator page needs to render: the select choices, the
/// current form values, and (after a submission) the prediction.
pub struct EstimatorVm {
    pub boroughs: Vec<String>,
    pub neighborhoods: Vec<String>,
    pub record: FeatureRecord,
    pub listed_rent: f64,
    pub result: Option<ResultVm>,
}

pub struct ResultVm {
    pub predicted_usd: String,
    pub comparison: Option<ComparisonVm>,
}

pub struct ComparisonVm {
    pub label: &'static str,
    pub listed_usd: String,
    pub diff_pct: f64,
    pub gauge: u8,
}

pub fn estimator_page(vm: &EstimatorVm) -> Markup {
    desktop_layout(
        "NYC Rent Analyzer",
        html! {
            main class="container" {
                h1 { "NYC Rent Analyzer" }
                p { "Estimate fair rent prices using a model trained on NYC rentals." }

                div class="card" {
                    h2 { "Price Estimator" }

                    form method="post" action="/predict" {
                        label for="borough" { "Borough" }
                        select
                            id="borough"
                            name="borough"
                            required
                            onchange="window.location='/?borough=' + encodeURIComponent(this.value)"
                        {
                            @for borough in &vm.boroughs {
                                option value=(borough) selected[*borough == vm.record.borough] { (borough) }
                            }
                        }

                        label for="neighborhood" { "Neighborhood" }
                        select id="neighborhood" name="neighborhood" required {
                            @for neighborhood in &vm.neighborhoods {
                                option value=(neighborhood) selected[*neighborhood == vm.record.neighborhood] { (neighborhood) }
                            }
                        }

                        label for="bedrooms" { "Bedrooms" }
                        input type="number" id="bedrooms" name="bedrooms" min="0" max="10" step="1" value=(vm.record.bedrooms) required;

                        label for="bathrooms" { "Bathrooms" }
                        input type="number" id="bathrooms" name="bathrooms" min="1.0" max="5.0" step="0.5" value=(vm.record.bathrooms) required;

                        label for="size_sqft" { "Size (sqft)" }
                        input type="number" id="size_sqft" name="size_sqft" min="100" max="5000" step="50" value=(vm.record.size_sqft) required;

                        label for="floor" { "Floor" }
                        input type="number" id="floor" name="floor" min="0" max="80" step="1" value=(vm.record.floor) required;

                        label for="building_age_yrs" { "Building age (years)" }
                        input type="number" id="building_age_yrs" name="building_age_yrs" min="0" max="200" step="1" value=(vm.record.building_age_yrs) required;

                        label for="min_to_subway" { "Minutes to subway" }
                        input type="number" id="min_to_subway" name="min_to_subway" min="0" max="60" step="1" value=(vm.record.min_to_subway) required;

                        fieldset {
                            legend { "Building & Amenities" }
                            label { input type="checkbox" name="no_fee" checked[vm.record.no_fee]; " No broker fee" }
                            label { input type="checkbox" name="has_doorman" checked[vm.record.has_doorman]; " Doorman" }
                            label { input type="checkbox" name="has_elevator" checked[vm.record.has_elevator]; " Elevator" }
                            label { input type="checkbox" name="has_gym" checked[vm.record.has_gym]; " Gym" }
                            label { input type="checkbox" name="has_dishwasher" checked[vm.record.has_dishwasher]; " Dishwasher" }
                            label { input type="checkbox" name="has_patio" checked[vm.record.has_patio]; " Patio/Balcony" }
                            label { input type="checkbox" name="has_roofdeck" checked[vm.record.has_roofdeck]; " Roof deck" }
                            label { input type="checkbox" name="has_washer_dryer" checked[vm.record.has_washer_dryer]; " Washer/Dryer in unit" }
                        }

                        label for="listed_rent" { "Optional: Listed Rent (USD)" }
                        input type="number" id="listed_rent" name="listed_rent" min="0" max="20000" step="50" value=(vm.listed_rent);
                        p class="hint" { "If you enter the asking rent, the verdict below tells you if it's over/underpriced." }

                        button type="submit" { "Predict Rent" }
                    }
                }

                @if let Some(result) = &vm.result {
                    div class="card" {
                        h2 { "Prediction" }
                        p {
                            b { "Estimated fair rent:" }
                            " " (result.predicted_usd) " / month"
                        }

                        @if let Some(cmp) = &result.comparison {
                            p {
                                b { (cmp.label) }
                                " – listed rent is " (cmp.listed_usd)
                                ", which is " (format!("{:+.1}%", cmp.diff_pct))
                                " relative to the model estimate."
                            }
                            progress value=(cmp.gauge) max="100" {}
                        }
                    }
                }
            }
        },
    )
}
