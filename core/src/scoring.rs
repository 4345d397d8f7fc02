//! Points and bonus policy.
//!
//! RULES:
//!   - Scores are computed ONCE, when a draft is built from a quote.
//!     They are never re-derived later (sales have no update path).
//!   - Renewals score a flat 20 points and no bonus, whatever the tier.
//!   - Non-renewals score tuition / 20 points; Elite pays a 70 EUR bonus,
//!     Premium 40 EUR, Standard and Barganha nothing.

use crate::model::CourseModality;

/// Fixed per-sale services deduction (Learner Protection, exam, insurance,
/// book). Always 420 EUR, regardless of what the quote document shows.
pub const SERVICES_AMOUNT_EUR: f64 = 420.0;

/// Flat points awarded for a renewal sale.
pub const RENEWAL_POINTS: f64 = 20.0;

/// Euros of tuition per point on a non-renewal sale.
pub const TUITION_PER_POINT: f64 = 20.0;

pub const ELITE_BONUS_EUR: f64 = 70.0;
pub const PREMIUM_BONUS_EUR: f64 = 40.0;

/// The two score components of a sale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleScore {
    pub points: f64,
    pub bonus_euro: f64,
}

/// Tuition is what remains of the package after the fixed services
/// deduction and accommodation.
pub fn tuition_amount(package_total: f64, services: f64, accommodation: f64) -> f64 {
    package_total - services - accommodation
}

/// Bonus tier for a non-renewal sale of the given modality.
pub fn bonus_for(modality: CourseModality) -> f64 {
    match modality {
        CourseModality::Elite => ELITE_BONUS_EUR,
        CourseModality::Premium => PREMIUM_BONUS_EUR,
        CourseModality::Standard | CourseModality::Barganha => 0.0,
    }
}

/// Score a sale from its modality, renewal flag, and tuition amount.
pub fn score(modality: CourseModality, is_renewal: bool, tuition: f64) -> SaleScore {
    if is_renewal {
        SaleScore {
            points: RENEWAL_POINTS,
            bonus_euro: 0.0,
        }
    } else {
        SaleScore {
            points: tuition / TUITION_PER_POINT,
            bonus_euro: bonus_for(modality),
        }
    }
}
