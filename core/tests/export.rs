//! CSV export tests: headers, row rendering, quoting, file naming.

use chrono::NaiveDate;
use salesrace_core::command::DashboardCommand;
use salesrace_core::dashboard::Dashboard;
use salesrace_core::export;
use salesrace_core::model::Language;

/// Headers track the display language, except the date column which is
/// always "Date".
#[test]
fn headers_follow_language_except_date() {
    let dashboard = Dashboard::build_test();
    let visible = dashboard.filtered_sales();

    let pt = export::render_csv(&visible, Language::Pt);
    let en = export::render_csv(&visible, Language::En);

    assert!(pt.starts_with(
        "Consultor,Nome do Aluno,Modalidade,Valor do Pacote,Tuition,Pontos,Bônus,Cidade,Date\n"
    ));
    assert!(en.starts_with(
        "Consultant,Student Name,Modality,Package Value,Tuition,Points,Bonus,City,Date\n"
    ));
}

/// The seed board renders exactly: text quoted, points with two decimals,
/// the other numbers bare.
#[test]
fn seed_board_renders_exactly() {
    let dashboard = Dashboard::build_test();
    let visible = dashboard.filtered_sales();

    let expected = [
        "Consultor,Nome do Aluno,Modalidade,Valor do Pacote,Tuition,Pontos,Bônus,Cidade,Date",
        "\"Rafael Felix\",\"João Goulart\",\"Elite\",4820,3200,177.77,65,\"Dublin\",2024-05-10",
        "\"Felipe Frade\",\"Maria Alice\",\"Premium\",3120,2700,24.00,0,\"Dublin\",2024-05-11",
        "\"Naiara da Fonseca\",\"Carlos Eduardo\",\"Elite\",4240,3000,166.66,70,\"Dublin\",2024-05-12",
    ]
    .join("\n");
    assert_eq!(export::render_csv(&visible, Language::Pt), expected);
}

/// Quotes inside a field are doubled, CSV style.
#[test]
fn embedded_quotes_are_doubled() {
    let mut dashboard = Dashboard::build_test();
    dashboard.state.sales[0].client_name = "Joana \"Jo\" Silva".into();

    let visible = dashboard.filtered_sales();
    let csv = export::render_csv(&visible, Language::En);
    assert!(
        csv.contains("\"Joana \"\"Jo\"\" Silva\""),
        "quoted field missing in:\n{csv}"
    );
}

/// The export covers exactly the visible sales.
#[test]
fn export_respects_the_active_filters() {
    let mut dashboard = Dashboard::build_test();
    dashboard
        .apply(DashboardCommand::SetConsultantFilter {
            consultant_id: Some("L9".into()),
        })
        .unwrap();

    let visible = dashboard.filtered_sales();
    let csv = export::render_csv(&visible, Language::Pt);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2, "header plus one row");
    assert!(lines[1].contains("\"Naiara da Fonseca\""));
}

/// An empty board still exports the header line.
#[test]
fn empty_board_exports_headers_only() {
    let mut dashboard = Dashboard::build_test();
    dashboard.state.sales.clear();

    let visible = dashboard.filtered_sales();
    let csv = export::render_csv(&visible, Language::En);
    assert_eq!(
        csv,
        "Consultant,Student Name,Modality,Package Value,Tuition,Points,Bonus,City,Date"
    );
}

/// The report file name carries the day it was generated.
#[test]
fn filename_stamps_the_day() {
    let day = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
    assert_eq!(
        export::export_filename(day),
        "seda_sales_report_2024-06-05.csv"
    );
}
