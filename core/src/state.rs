//! Session state: everything that changes while the dashboard is open.
//!
//! RULES:
//!   - All mutable state lives here. Stage functions (filter, leaderboard,
//!     admission, export) are pure and receive slices of it.
//!   - Nothing is persisted. Closing the session discards every change,
//!     and the next session starts again from the seed sales.
//!   - New sales are prepended so the board lists the newest entry
//!     first. Entry order is not date order: an admitted quote may
//!     carry a date older than sales already on the board.

use crate::admission::SaleDraft;
use crate::model::{City, Language, Manager, Sale, ViewMode};
use crate::types::ConsultantId;
use serde::{Deserialize, Serialize};

/// The three independent leaderboard filters. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub manager: Option<Manager>,
    pub city: Option<City>,
    pub consultant_id: Option<ConsultantId>,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub language:               Language,
    /// `None` until a profile is chosen on the landing gate.
    pub active_view:            Option<ViewMode>,
    pub is_authenticated:       bool,
    pub filters:                FilterSelection,
    /// Newest entry first.
    pub sales:                  Vec<Sale>,
    /// Draft awaiting confirmation after a document scan.
    pub pending_draft:          Option<SaleDraft>,
    /// Consultant the pending draft will be credited to.
    pub selected_consultant_id: Option<ConsultantId>,
    /// Last motivational analysis text, fallback included.
    pub analysis:               Option<String>,
    pub is_analyzing:           bool,
    pub is_scanning:            bool,
}

impl SessionState {
    pub fn new(seed_sales: Vec<Sale>) -> Self {
        Self {
            language: Language::Pt,
            active_view: None,
            is_authenticated: false,
            filters: FilterSelection::default(),
            sales: seed_sales,
            pending_draft: None,
            selected_consultant_id: None,
            analysis: None,
            is_analyzing: false,
            is_scanning: false,
        }
    }

    /// Editing (scanning, confirming, deleting) is open to the Gestor and
    /// Gerentes profiles once the login gate has been passed. Consultores
    /// is always read-only.
    pub fn can_edit(&self) -> bool {
        self.is_authenticated
            && matches!(
                self.active_view,
                Some(ViewMode::Gestor) | Some(ViewMode::Gerentes)
            )
    }
}
