//! Quote admission: from extracted document to board-ready sale.
//!
//! RULES:
//!   - A draft carries everything a sale needs except its identity.
//!     Tuition, points, and bonus are computed here, once, from the
//!     package value with the fixed services deduction applied.
//!   - Admission fills what the document could not say: missing date
//!     becomes today, missing city becomes the consultant's home city.
//!   - The consultant credited is whoever the operator selected, not
//!     whatever name the document showed.

use crate::model::{City, Consultant, CourseModality, PaymentMethod, Sale, Shift};
use crate::scoring::{self, SERVICES_AMOUNT_EUR};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validated output of a document extraction. Construction happens at
/// the extraction boundary; everything here is already typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedQuote {
    /// Name printed on the quote. Display only, never used for credit.
    pub seller_name: String,
    pub client_name: String,
    pub quote_number: String,
    pub date: Option<NaiveDate>,
    pub city: Option<City>,
    pub modality: CourseModality,
    pub is_renewal: bool,
    pub package_total_value: f64,
    pub accommodation_amount: f64,
}

/// A staged sale awaiting operator confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDraft {
    pub consultant_name: String,
    pub client_name: String,
    pub quote_number: String,
    pub date: Option<NaiveDate>,
    pub city: Option<City>,
    pub shift: Shift,
    pub modality: CourseModality,
    pub is_renewal: bool,
    pub package_total_value: f64,
    pub services_amount: f64,
    pub accommodation_amount: f64,
    pub tuition_amount: f64,
    pub payment_method: PaymentMethod,
    pub points: f64,
    pub bonus_euro: f64,
}

/// Stage a draft from an extracted quote. Shift and payment method are
/// not on the quote document, so they start at the desk defaults.
pub fn draft_from_quote(quote: ExtractedQuote) -> SaleDraft {
    let tuition = scoring::tuition_amount(
        quote.package_total_value,
        SERVICES_AMOUNT_EUR,
        quote.accommodation_amount,
    );
    let score = scoring::score(quote.modality, quote.is_renewal, tuition);
    SaleDraft {
        consultant_name: quote.seller_name,
        client_name: quote.client_name,
        quote_number: quote.quote_number,
        date: quote.date,
        city: quote.city,
        shift: Shift::Manha,
        modality: quote.modality,
        is_renewal: quote.is_renewal,
        package_total_value: quote.package_total_value,
        services_amount: SERVICES_AMOUNT_EUR,
        accommodation_amount: quote.accommodation_amount,
        tuition_amount: tuition,
        payment_method: PaymentMethod::Transferencia,
        points: score.points,
        bonus_euro: score.bonus_euro,
    }
}

/// Turn a confirmed draft into a sale credited to `consultant`.
pub fn admit(draft: SaleDraft, consultant: &Consultant, today: NaiveDate) -> Sale {
    Sale {
        id: Uuid::new_v4().to_string(),
        date: draft.date.unwrap_or(today),
        consultant_id: consultant.id.clone(),
        consultant_name: consultant.name.clone(),
        client_name: draft.client_name,
        quote_number: draft.quote_number,
        city: draft.city.unwrap_or(consultant.city),
        shift: draft.shift,
        modality: draft.modality,
        is_renewal: draft.is_renewal,
        package_total_value: draft.package_total_value,
        services_amount: draft.services_amount,
        accommodation_amount: draft.accommodation_amount,
        tuition_amount: draft.tuition_amount,
        payment_method: draft.payment_method,
        is_eligible: true,
        points: draft.points,
        bonus_euro: draft.bonus_euro,
    }
}

/// Remove a sale by id. Returns whether anything was removed; removing
/// an id that is not on the board is a no-op.
pub fn remove_sale(sales: &mut Vec<Sale>, id: &str) -> bool {
    let before = sales.len();
    sales.retain(|s| s.id != id);
    sales.len() != before
}
