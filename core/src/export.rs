//! CSV export of the visible sales.
//!
//! Column order is fixed. Headers follow the display language except the
//! final date column, which is always "Date". Text columns are quoted,
//! points print with two decimals, the other numbers print bare.

use crate::model::{Language, Sale};
use chrono::NaiveDate;

fn headers(language: Language) -> [&'static str; 9] {
    match language {
        Language::Pt => [
            "Consultor",
            "Nome do Aluno",
            "Modalidade",
            "Valor do Pacote",
            "Tuition",
            "Pontos",
            "Bônus",
            "Cidade",
            "Date",
        ],
        Language::En => [
            "Consultant",
            "Student Name",
            "Modality",
            "Package Value",
            "Tuition",
            "Points",
            "Bonus",
            "City",
            "Date",
        ],
    }
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Render the visible sales as CSV, one row per sale in board order.
pub fn render_csv(sales: &[&Sale], language: Language) -> String {
    let mut lines = vec![headers(language).join(",")];
    for sale in sales {
        let row = [
            quoted(&sale.consultant_name),
            quoted(&sale.client_name),
            quoted(sale.modality.label()),
            sale.package_total_value.to_string(),
            sale.tuition_amount.to_string(),
            format!("{:.2}", sale.points),
            sale.bonus_euro.to_string(),
            quoted(sale.city.label()),
            sale.date.to_string(),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Report file name for the given day.
pub fn export_filename(today: NaiveDate) -> String {
    format!("seda_sales_report_{}.csv", today.format("%Y-%m-%d"))
}
