//! Ranking and rollups over the filtered sales.
//!
//! RULES:
//!   - The roster is the row source: every consultant surviving the
//!     roster-level manager cut gets a row, zero-sale consultants
//!     included.
//!   - The sort is stable descending by points, so ties keep roster
//!     order.
//!   - Points and bonus totals roll up over the ranked rows. Sale count
//!     and tuition come from the filtered records directly, so a sale
//!     credited to an id missing from the roster still counts toward
//!     volume but never toward points.

use crate::model::{City, Consultant, CourseModality, Manager, Sale};
use crate::types::ConsultantId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultantPerformance {
    pub consultant_id: ConsultantId,
    pub name: String,
    pub manager: Manager,
    pub city: City,
    pub total_points: f64,
    pub total_bonus: f64,
    pub total_tuition: f64,
    pub sale_count: usize,
    /// Latest sale date among the consultant's visible sales. `None`
    /// when no visible sale is theirs.
    pub last_sale_date: Option<NaiveDate>,
}

/// Headline numbers above the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total_points: f64,
    pub total_bonus: f64,
    pub total_sales: usize,
    pub total_tuition: f64,
    /// Tuition per visible sale, 0 when nothing is visible.
    pub avg_ticket: f64,
}

/// One slice of the modality mix chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalitySlice {
    pub modality: CourseModality,
    pub count: usize,
}

/// Build the ranked board. `active_manager` narrows the row source to one
/// team; the sale-level filters have already been applied to `filtered`.
pub fn rank_consultants(
    filtered: &[&Sale],
    roster: &[Consultant],
    active_manager: Option<Manager>,
) -> Vec<ConsultantPerformance> {
    let mut rows: Vec<ConsultantPerformance> = roster
        .iter()
        .filter(|c| active_manager.map_or(true, |manager| c.manager == manager))
        .map(|consultant| {
            let mut total_points = 0.0;
            let mut total_bonus = 0.0;
            let mut total_tuition = 0.0;
            let mut sale_count = 0;
            let mut last_sale_date = None;
            for sale in filtered.iter().filter(|s| s.consultant_id == consultant.id) {
                total_points += sale.points;
                total_bonus += sale.bonus_euro;
                total_tuition += sale.tuition_amount;
                sale_count += 1;
                last_sale_date = last_sale_date.max(Some(sale.date));
            }
            ConsultantPerformance {
                consultant_id: consultant.id.clone(),
                name: consultant.name.clone(),
                manager: consultant.manager,
                city: consultant.city,
                total_points,
                total_bonus,
                total_tuition,
                sale_count,
                last_sale_date,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_points
            .partial_cmp(&a.total_points)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

/// Roll up the headline numbers from the ranked rows and the filtered
/// sales they were built from.
pub fn global_stats(ranked: &[ConsultantPerformance], filtered: &[&Sale]) -> GlobalStats {
    let total_points = ranked.iter().map(|r| r.total_points).sum();
    let total_bonus = ranked.iter().map(|r| r.total_bonus).sum();
    let total_sales = filtered.len();
    let total_tuition: f64 = filtered.iter().map(|s| s.tuition_amount).sum();
    let avg_ticket = if total_sales > 0 {
        total_tuition / total_sales as f64
    } else {
        0.0
    };
    GlobalStats {
        total_points,
        total_bonus,
        total_sales,
        total_tuition,
        avg_ticket,
    }
}

/// Count visible sales per modality, slices in first-seen order.
pub fn modality_mix(filtered: &[&Sale]) -> Vec<ModalitySlice> {
    let mut mix: Vec<ModalitySlice> = Vec::new();
    for sale in filtered {
        match mix.iter_mut().find(|slice| slice.modality == sale.modality) {
            Some(slice) => slice.count += 1,
            None => mix.push(ModalitySlice {
                modality: sale.modality,
                count: 1,
            }),
        }
    }
    mix
}
