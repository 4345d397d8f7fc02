//! The dashboard: one session's state plus the stages wired over it.
//!
//! PIPELINE (fixed order, every render):
//!   1. Filter      select the visible sales under the three AND-ed filters
//!   2. Leaderboard build rows from the roster cut, stable sort by points
//!   3. Rollups     headline stats and the modality mix
//!
//! RULES:
//!   - Commands are the only mutation path. The stages are pure
//!     functions over the session state.
//!   - Editing commands without edit rights are logged and ignored.
//!     A failed login is an error; an unconfirmed delete is a no-op.
//!   - Service calls (analysis, scan) are gated by a busy flag and
//!     never run concurrently with themselves. Analysis needs an
//!     authenticated session; scanning needs full edit rights.

use crate::admission::{self, SaleDraft};
use crate::auth;
use crate::command::DashboardCommand;
use crate::config::RaceConfig;
use crate::error::{RaceError, RaceResult};
use crate::filter;
use crate::gemini::GeminiClient;
use crate::leaderboard::{self, ConsultantPerformance, GlobalStats, ModalitySlice};
use crate::model::Sale;
use crate::state::SessionState;
use chrono::NaiveDate;

pub struct Dashboard {
    pub config: RaceConfig,
    pub state: SessionState,
}

impl Dashboard {
    /// Open a session over the given race inputs.
    pub fn build(config: RaceConfig) -> Self {
        let state = SessionState::new(config.seed_sales.clone());
        Self { config, state }
    }

    /// Session over the hardcoded test roster and seeds.
    pub fn build_test() -> Self {
        Self::build(RaceConfig::default_test())
    }

    // ── Stages ────────────────────────────────────

    pub fn filtered_sales(&self) -> Vec<&Sale> {
        filter::apply(&self.state.sales, &self.config.consultants, &self.state.filters)
    }

    pub fn leaderboard(&self) -> Vec<ConsultantPerformance> {
        leaderboard::rank_consultants(
            &self.filtered_sales(),
            &self.config.consultants,
            self.state.filters.manager,
        )
    }

    pub fn stats(&self) -> GlobalStats {
        leaderboard::global_stats(&self.leaderboard(), &self.filtered_sales())
    }

    pub fn modality_mix(&self) -> Vec<ModalitySlice> {
        leaderboard::modality_mix(&self.filtered_sales())
    }

    // ── Commands ──────────────────────────────────

    pub fn apply(&mut self, command: DashboardCommand) -> RaceResult<()> {
        match command {
            DashboardCommand::SetLanguage { language } => {
                self.state.language = language;
            }
            DashboardCommand::SelectView { view } => {
                self.state.active_view = view;
                if let Some(view) = view {
                    if auth::view_requires_login(view) && !self.state.is_authenticated {
                        log::debug!("view {view:?} selected, login required before editing");
                    }
                }
            }
            DashboardCommand::Login { username, password } => {
                if !auth::verify(&username, &password) {
                    return Err(RaceError::AuthFailed);
                }
                self.state.is_authenticated = true;
            }
            DashboardCommand::Logout => {
                // Leaving the session also drops the manager filter; the
                // city and consultant filters survive.
                self.state.is_authenticated = false;
                self.state.active_view = None;
                self.state.filters.manager = None;
            }
            DashboardCommand::SetManagerFilter { manager } => {
                self.state.filters.manager = manager;
            }
            DashboardCommand::SetCityFilter { city } => {
                self.state.filters.city = city;
            }
            DashboardCommand::SetConsultantFilter { consultant_id } => {
                self.state.filters.consultant_id = consultant_id;
            }
            DashboardCommand::StageDraft { draft } => {
                if !self.state.can_edit() {
                    log::warn!("stage_draft without edit rights, ignoring");
                    return Ok(());
                }
                self.state.selected_consultant_id =
                    self.config.consultants.first().map(|c| c.id.clone());
                self.state.pending_draft = Some(draft);
            }
            DashboardCommand::SelectConsultant { consultant_id } => {
                if !self.state.can_edit() {
                    log::warn!("select_consultant without edit rights, ignoring");
                    return Ok(());
                }
                self.state.selected_consultant_id = consultant_id;
            }
            DashboardCommand::ConfirmSale => {
                if !self.state.can_edit() {
                    log::warn!("confirm_sale without edit rights, ignoring");
                    return Ok(());
                }
                self.confirm_pending(today());
            }
            DashboardCommand::CancelDraft => {
                if !self.state.can_edit() {
                    log::warn!("cancel_draft without edit rights, ignoring");
                    return Ok(());
                }
                self.state.pending_draft = None;
                self.state.selected_consultant_id = None;
            }
            DashboardCommand::DeleteSale { sale_id, confirmed } => {
                if !self.state.can_edit() {
                    log::warn!("delete_sale without edit rights, ignoring");
                    return Ok(());
                }
                if !confirmed {
                    log::debug!("delete of sale {sale_id} not confirmed, ignoring");
                    return Ok(());
                }
                if !admission::remove_sale(&mut self.state.sales, &sale_id) {
                    log::warn!("delete of unknown sale {sale_id}, ignoring");
                }
            }
        }
        Ok(())
    }

    /// Admit the pending draft, crediting the selected consultant. Keeps
    /// the draft staged when the selection is missing or unknown.
    fn confirm_pending(&mut self, today: NaiveDate) {
        let consultant = self
            .state
            .selected_consultant_id
            .as_deref()
            .and_then(|id| self.config.consultant(id))
            .cloned();
        match consultant {
            Some(consultant) if self.state.pending_draft.is_some() => {
                if let Some(draft) = self.state.pending_draft.take() {
                    let sale = admission::admit(draft, &consultant, today);
                    log::debug!("admitted sale {} credited to {}", sale.id, consultant.name);
                    self.state.sales.insert(0, sale);
                    self.state.selected_consultant_id = None;
                }
            }
            _ => log::debug!("confirm_sale without a draft and known consultant, ignoring"),
        }
    }

    // ── Service calls ─────────────────────────────

    /// Run the motivational analysis over the current board. The text
    /// lands in the session state and is also returned. Only a locked
    /// or busy session errors; a failed service call yields the
    /// fallback line.
    pub fn run_analysis(&mut self, client: &GeminiClient) -> RaceResult<String> {
        if !self.state.is_authenticated {
            return Err(RaceError::NotAuthenticated);
        }
        if self.state.is_analyzing {
            return Err(RaceError::Busy {
                operation: "analysis".into(),
            });
        }
        self.state.is_analyzing = true;
        let rows = self.leaderboard();
        let text = client.analyze_race(&rows, self.state.filters.manager, self.state.language);
        self.state.is_analyzing = false;
        self.state.analysis = Some(text.clone());
        Ok(text)
    }

    /// Scan a quote document and stage the extracted draft, selecting
    /// the first roster consultant for credit.
    pub fn scan_document(
        &mut self,
        client: &GeminiClient,
        document: &[u8],
        mime_type: &str,
    ) -> RaceResult<SaleDraft> {
        if !self.state.can_edit() {
            return Err(RaceError::EditLocked);
        }
        if self.state.is_scanning {
            return Err(RaceError::Busy {
                operation: "scan".into(),
            });
        }
        self.state.is_scanning = true;
        let result = client.extract_sale(document, mime_type);
        self.state.is_scanning = false;
        let draft = admission::draft_from_quote(result?);
        self.state.pending_draft = Some(draft.clone());
        self.state.selected_consultant_id = self.config.consultants.first().map(|c| c.id.clone());
        Ok(draft)
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
