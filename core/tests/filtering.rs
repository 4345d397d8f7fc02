//! Leaderboard filter tests.

use chrono::NaiveDate;
use salesrace_core::command::DashboardCommand;
use salesrace_core::dashboard::Dashboard;
use salesrace_core::model::{City, CourseModality, Manager, PaymentMethod, Sale, Shift};

fn sale(id: &str, consultant_id: &str, city: City) -> Sale {
    Sale {
        id: id.into(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        consultant_id: consultant_id.into(),
        consultant_name: consultant_id.into(),
        client_name: "Test Student".into(),
        quote_number: "QT-2024-900".into(),
        city,
        shift: Shift::Manha,
        modality: CourseModality::Standard,
        is_renewal: false,
        package_total_value: 2420.0,
        services_amount: 420.0,
        accommodation_amount: 0.0,
        tuition_amount: 2000.0,
        payment_method: PaymentMethod::Cartao,
        is_eligible: true,
        points: 100.0,
        bonus_euro: 0.0,
    }
}

/// With every filter off the whole board is visible.
#[test]
fn no_filters_shows_every_sale() {
    let dashboard = Dashboard::build_test();
    assert_eq!(dashboard.filtered_sales().len(), 3, "all seed sales visible");
}

/// The manager filter matches through the roster: Ana's team owns only
/// the first seed sale, Letícia's the other two.
#[test]
fn manager_filter_follows_roster() {
    let mut dashboard = Dashboard::build_test();
    dashboard
        .apply(DashboardCommand::SetManagerFilter {
            manager: Some(Manager::Ana),
        })
        .unwrap();
    let visible: Vec<&str> = dashboard.filtered_sales().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(visible, ["s1"], "Ana's team has one seed sale");

    dashboard
        .apply(DashboardCommand::SetManagerFilter {
            manager: Some(Manager::Leticia),
        })
        .unwrap();
    let visible: Vec<&str> = dashboard.filtered_sales().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(visible, ["s2", "s3"], "Letícia's team has two seed sales");
}

/// The city filter matches the sale record, not the consultant's home.
#[test]
fn city_filter_matches_sale_city() {
    let mut dashboard = Dashboard::build_test();
    dashboard
        .apply(DashboardCommand::SetCityFilter {
            city: Some(City::Cork),
        })
        .unwrap();
    assert!(
        dashboard.filtered_sales().is_empty(),
        "all seed sales were closed in Dublin"
    );

    // A Dublin consultant closing in Cork shows under the Cork filter.
    dashboard.state.sales.insert(0, sale("x1", "A1", City::Cork));
    let visible: Vec<&str> = dashboard.filtered_sales().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(visible, ["x1"], "sale city decides, not the roster city");
}

/// The consultant filter matches exactly one id.
#[test]
fn consultant_filter_is_exact() {
    let mut dashboard = Dashboard::build_test();
    dashboard
        .apply(DashboardCommand::SetConsultantFilter {
            consultant_id: Some("L9".into()),
        })
        .unwrap();
    let visible: Vec<&str> = dashboard.filtered_sales().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(visible, ["s3"]);
}

/// Filters AND together: a sale must pass all three.
#[test]
fn filters_and_together() {
    let mut dashboard = Dashboard::build_test();
    dashboard
        .apply(DashboardCommand::SetManagerFilter {
            manager: Some(Manager::Ana),
        })
        .unwrap();
    dashboard
        .apply(DashboardCommand::SetConsultantFilter {
            consultant_id: Some("L9".into()),
        })
        .unwrap();
    assert!(
        dashboard.filtered_sales().is_empty(),
        "L9 is not on Ana's team, so the AND of both filters is empty"
    );
}

/// A sale credited to an id missing from the roster passes when the
/// manager filter is off and fails any active manager filter.
#[test]
fn manager_filter_drops_unrostered_sale() {
    let mut dashboard = Dashboard::build_test();
    dashboard.state.sales.insert(0, sale("x2", "ZZ", City::Dublin));

    assert_eq!(
        dashboard.filtered_sales().len(),
        4,
        "unrostered sale visible with no manager filter"
    );

    for manager in Manager::ALL {
        dashboard
            .apply(DashboardCommand::SetManagerFilter {
                manager: Some(manager),
            })
            .unwrap();
        let visible = dashboard.filtered_sales();
        assert!(
            visible.iter().all(|s| s.id != "x2"),
            "unrostered sale must fail the {manager} filter"
        );
    }
}

/// Clearing a filter restores the full board.
#[test]
fn clearing_filters_restores_the_board() {
    let mut dashboard = Dashboard::build_test();
    dashboard
        .apply(DashboardCommand::SetCityFilter {
            city: Some(City::Cork),
        })
        .unwrap();
    assert!(dashboard.filtered_sales().is_empty());

    dashboard
        .apply(DashboardCommand::SetCityFilter { city: None })
        .unwrap();
    assert_eq!(dashboard.filtered_sales().len(), 3);
}
