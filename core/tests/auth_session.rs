//! Login gate and session lifecycle tests.

use salesrace_core::auth;
use salesrace_core::command::DashboardCommand;
use salesrace_core::dashboard::Dashboard;
use salesrace_core::error::RaceError;
use salesrace_core::gemini::GeminiClient;
use salesrace_core::model::{City, Language, Manager, ViewMode};

fn login(dashboard: &mut Dashboard, view: ViewMode) {
    dashboard
        .apply(DashboardCommand::SelectView { view: Some(view) })
        .unwrap();
    dashboard
        .apply(DashboardCommand::Login {
            username: "admin".into(),
            password: "seda2026".into(),
        })
        .unwrap();
}

/// Only the shared desk credentials pass the gate.
#[test]
fn gate_accepts_only_the_desk_credentials() {
    assert!(auth::verify("admin", "seda2026"));
    assert!(!auth::verify("admin", "wrong"));
    assert!(!auth::verify("root", "seda2026"));
    assert!(!auth::verify("", ""));
}

/// The two editor profiles sit behind the gate; the read-only one does not.
#[test]
fn only_editor_views_require_login() {
    assert!(auth::view_requires_login(ViewMode::Gestor));
    assert!(auth::view_requires_login(ViewMode::Gerentes));
    assert!(!auth::view_requires_login(ViewMode::Consultores));
}

/// A failed login is an error and leaves the session locked.
#[test]
fn failed_login_errors_and_stays_locked() {
    let mut dashboard = Dashboard::build_test();
    dashboard
        .apply(DashboardCommand::SelectView {
            view: Some(ViewMode::Gestor),
        })
        .unwrap();

    let err = dashboard
        .apply(DashboardCommand::Login {
            username: "admin".into(),
            password: "guess".into(),
        })
        .unwrap_err();
    assert!(matches!(err, RaceError::AuthFailed), "got {err:?}");
    assert!(!dashboard.state.is_authenticated);
    assert!(!dashboard.state.can_edit());
}

/// Editing needs an editor view AND a passed gate, in any order.
#[test]
fn can_edit_requires_view_and_authentication() {
    let mut dashboard = Dashboard::build_test();
    assert!(!dashboard.state.can_edit(), "fresh session is locked");

    dashboard
        .apply(DashboardCommand::SelectView {
            view: Some(ViewMode::Gestor),
        })
        .unwrap();
    assert!(!dashboard.state.can_edit(), "view alone is not enough");

    dashboard
        .apply(DashboardCommand::Login {
            username: "admin".into(),
            password: "seda2026".into(),
        })
        .unwrap();
    assert!(dashboard.state.can_edit());

    dashboard
        .apply(DashboardCommand::SelectView {
            view: Some(ViewMode::Gerentes),
        })
        .unwrap();
    assert!(dashboard.state.can_edit(), "both editor profiles can edit");

    dashboard
        .apply(DashboardCommand::SelectView {
            view: Some(ViewMode::Consultores),
        })
        .unwrap();
    assert!(!dashboard.state.can_edit(), "read-only profile never edits");
}

/// Logout returns to the gate and drops the manager filter, keeping the
/// other filters as they were.
#[test]
fn logout_resets_view_and_manager_filter() {
    let mut dashboard = Dashboard::build_test();
    login(&mut dashboard, ViewMode::Gerentes);
    dashboard
        .apply(DashboardCommand::SetManagerFilter {
            manager: Some(Manager::Mario),
        })
        .unwrap();
    dashboard
        .apply(DashboardCommand::SetCityFilter {
            city: Some(City::Dublin),
        })
        .unwrap();
    dashboard
        .apply(DashboardCommand::SetConsultantFilter {
            consultant_id: Some("M1".into()),
        })
        .unwrap();

    dashboard.apply(DashboardCommand::Logout).unwrap();

    assert!(dashboard.state.active_view.is_none(), "back to the gate");
    assert!(!dashboard.state.is_authenticated);
    assert!(dashboard.state.filters.manager.is_none(), "manager filter dropped");
    assert_eq!(dashboard.state.filters.city, Some(City::Dublin));
    assert_eq!(dashboard.state.filters.consultant_id.as_deref(), Some("M1"));
}

/// The language toggle applies immediately.
#[test]
fn language_toggle_applies() {
    let mut dashboard = Dashboard::build_test();
    assert_eq!(dashboard.state.language, Language::Pt, "Portuguese by default");
    dashboard
        .apply(DashboardCommand::SetLanguage {
            language: Language::En,
        })
        .unwrap();
    assert_eq!(dashboard.state.language, Language::En);
}

/// Analysis sits behind the login gate.
#[test]
fn analysis_requires_authentication() {
    let mut dashboard = Dashboard::build_test();
    let client = GeminiClient::new("test-key".into());
    let err = dashboard.run_analysis(&client).unwrap_err();
    assert!(matches!(err, RaceError::NotAuthenticated), "got {err:?}");
    assert!(dashboard.state.analysis.is_none(), "nothing lands in state");
}

/// A session already analyzing rejects a second analysis.
#[test]
fn analysis_rejected_while_busy() {
    let mut dashboard = Dashboard::build_test();
    login(&mut dashboard, ViewMode::Gestor);
    dashboard.state.is_analyzing = true;

    let client = GeminiClient::new("test-key".into());
    let err = dashboard.run_analysis(&client).unwrap_err();
    assert!(
        matches!(err, RaceError::Busy { ref operation } if operation == "analysis"),
        "got {err:?}"
    );
}

/// Scanning is an edit and stays locked without rights.
#[test]
fn scan_locked_without_rights() {
    let mut dashboard = Dashboard::build_test();
    let client = GeminiClient::new("test-key".into());
    let err = dashboard
        .scan_document(&client, b"%PDF-1.4", "application/pdf")
        .unwrap_err();
    assert!(matches!(err, RaceError::EditLocked), "got {err:?}");
}

/// A session already scanning rejects a second scan.
#[test]
fn scan_rejected_while_busy() {
    let mut dashboard = Dashboard::build_test();
    login(&mut dashboard, ViewMode::Gestor);
    dashboard.state.is_scanning = true;

    let client = GeminiClient::new("test-key".into());
    let err = dashboard
        .scan_document(&client, b"%PDF-1.4", "application/pdf")
        .unwrap_err();
    assert!(
        matches!(err, RaceError::Busy { ref operation } if operation == "scan"),
        "got {err:?}"
    );
}
