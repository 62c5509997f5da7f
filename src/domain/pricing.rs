// src/domain/pricing.rs

/// Band, in percent, around the model estimate within which a listing
/// counts as fairly priced. Both boundaries are strict: exactly +15% or
/// -15% is still "Fairly priced".
pub const FAIR_BAND_PCT: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceVerdict {
    Overpriced,
    FairlyPriced,
    Underpriced,
}

impl PriceVerdict {
    pub fn label(self) -> &'static str {
        match self {
            PriceVerdict::Overpriced => "Overpriced",
            PriceVerdict::FairlyPriced => "Fairly priced",
            PriceVerdict::Underpriced => "Underpriced",
        }
    }
}

/// How a user-supplied asking rent compares to the model estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceComparison {
    pub listed_rent: f64,
    pub diff: f64,
    pub diff_pct: f64,
    pub verdict: PriceVerdict,
    /// Gauge value in 0..=100, centered at 50 for a fair price and
    /// saturating at the extremes. Visual feedback only, not a
    /// probability or confidence score.
    pub gauge: u8,
}

/// Compares a listed rent against the predicted rent. Returns `None` when
/// the listed rent is 0 or unset, meaning the user asked for no comparison.
pub fn compare_to_listed(predicted: f64, listed_rent: f64) -> Option<PriceComparison> {
    if listed_rent <= 0.0 {
        return None;
    }

    let diff = listed_rent - predicted;
    let diff_pct = diff / predicted * 100.0;

    Some(PriceComparison {
        listed_rent,
        diff,
        diff_pct,
        verdict: classify(diff_pct),
        gauge: gauge_value(diff_pct),
    })
}

fn classify(diff_pct: f64) -> PriceVerdict {
    if diff_pct > FAIR_BAND_PCT {
        PriceVerdict::Overpriced
    } else if diff_pct < -FAIR_BAND_PCT {
        PriceVerdict::Underpriced
    } else {
        PriceVerdict::FairlyPriced
    }
}

/// `clamp(50 + diff_pct, 0, 100)`, truncated to an integer.
pub fn gauge_value(diff_pct: f64) -> u8 {
    (50.0 + diff_pct).clamp(0.0, 100.0) as u8
}

/// Formats a dollar amount with a thousands separator and no cents.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
