// src/domain/record.rs

/// Number of numeric and flag features the model consumes.
pub const NUMERIC_FEATURE_COUNT: usize = 14;

/// Total number of fields the model was trained on: the numeric/flag
/// features plus the two categorical ones (borough, neighborhood).
pub const FEATURE_COUNT: usize = NUMERIC_FEATURE_COUNT + 2;

/// The fixed-schema row of inputs submitted to the predictive model.
///
/// The field set must match what the model was trained on. That contract
/// lives outside this process, so the only enforcement happens inside
/// `RentModel::predict`, which rejects records it cannot line up with its
/// coefficient table.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub size_sqft: u32,
    pub borough: String,
    pub neighborhood: String,
    pub no_fee: bool,
    pub has_dishwasher: bool,
    pub min_to_subway: u32,
    pub floor: u32,
    pub has_doorman: bool,
    pub building_age_yrs: u32,
    pub has_elevator: bool,
    pub has_patio: bool,
    pub has_roofdeck: bool,
    pub has_washer_dryer: bool,
    pub has_gym: bool,
}

impl Default for FeatureRecord {
    /// Defaults shown by the form before the first submission.
    fn default() -> Self {
        Self {
            bedrooms: 1,
            bathrooms: 1.0,
            size_sqft: 600,
            borough: String::new(),
            neighborhood: String::new(),
            no_fee: false,
            has_dishwasher: false,
            min_to_subway: 5,
            floor: 3,
            has_doorman: false,
            building_age_yrs: 20,
            has_elevator: false,
            has_patio: false,
            has_roofdeck: false,
            has_washer_dryer: false,
            has_gym: false,
        }
    }
}

impl FeatureRecord {
    /// The numeric and flag features as (column name, value) pairs.
    /// Flags are encoded as 0/1 integers to match the model's trained
    /// encoding, never as booleans.
    pub fn numeric_features(&self) -> [(&'static str, f64); NUMERIC_FEATURE_COUNT] {
        let flag = |b: bool| f64::from(u8::from(b));
        [
            ("bedrooms", f64::from(self.bedrooms)),
            ("bathrooms", self.bathrooms),
            ("size_sqft", f64::from(self.size_sqft)),
            ("no_fee", flag(self.no_fee)),
            ("has_dishwasher", flag(self.has_dishwasher)),
            ("min_to_subway", f64::from(self.min_to_subway)),
            ("floor", f64::from(self.floor)),
            ("has_doorman", flag(self.has_doorman)),
            ("building_age_yrs", f64::from(self.building_age_yrs)),
            ("has_elevator", flag(self.has_elevator)),
            ("has_patio", flag(self.has_patio)),
            ("has_roofdeck", flag(self.has_roofdeck)),
            ("has_washer_dryer", flag(self.has_washer_dryer)),
            ("has_gym", flag(self.has_gym)),
        ]
    }
}
