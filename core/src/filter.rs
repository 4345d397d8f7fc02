//! Leaderboard filters.
//!
//! The three filters AND together. Manager is an indirect filter: a sale
//! matches through its consultant's roster entry, so a sale whose
//! consultant is not on the roster fails any active manager filter but
//! still passes when the filter is off. City and consultant match the
//! sale record directly.

use crate::model::{Consultant, Sale};
use crate::state::FilterSelection;

/// Select the sales visible under the given filters, preserving the
/// order of the session list.
pub fn apply<'a>(
    sales: &'a [Sale],
    roster: &[Consultant],
    selection: &FilterSelection,
) -> Vec<&'a Sale> {
    sales
        .iter()
        .filter(|sale| {
            let manager_match = selection.manager.map_or(true, |manager| {
                roster
                    .iter()
                    .find(|c| c.id == sale.consultant_id)
                    .map_or(false, |c| c.manager == manager)
            });
            let city_match = selection.city.map_or(true, |city| sale.city == city);
            let consultant_match = selection
                .consultant_id
                .as_deref()
                .map_or(true, |id| sale.consultant_id == id);
            manager_match && city_match && consultant_match
        })
        .collect()
}
