use crate::admission::SaleDraft;
use crate::model::{City, Language, Manager, ViewMode};
use crate::types::{ConsultantId, SaleId};
use serde::{Deserialize, Serialize};

/// All operator-issued commands. `None` on an optional field means
/// "All" for a filter and "back to the gate" for the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DashboardCommand {
    // ── Session ───────────────────────────────────
    SetLanguage { language: Language },
    SelectView { view: Option<ViewMode> },
    Login { username: String, password: String },
    Logout,

    // ── Filters ───────────────────────────────────
    SetManagerFilter { manager: Option<Manager> },
    SetCityFilter { city: Option<City> },
    SetConsultantFilter { consultant_id: Option<ConsultantId> },

    // ── Admission ─────────────────────────────────
    StageDraft { draft: SaleDraft },
    SelectConsultant { consultant_id: Option<ConsultantId> },
    ConfirmSale,
    CancelDraft,
    DeleteSale {
        sale_id: SaleId,
        /// The caller's delete dialog outcome. Defaults to false, and an
        /// unconfirmed delete is ignored.
        #[serde(default)]
        confirmed: bool,
    },
}
