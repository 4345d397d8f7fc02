//! race-runner: headless dashboard runner for the SEDA Sales Race.
//!
//! Usage:
//!   race-runner --data-dir ./data
//!   race-runner --data-dir ./data --lang en
//!   race-runner --ipc-mode

use anyhow::Result;
use salesrace_core::{
    admission::SaleDraft,
    command::DashboardCommand,
    dashboard::Dashboard,
    error::{RaceError, RaceResult},
    export,
    gemini::GeminiClient,
    leaderboard::{ConsultantPerformance, GlobalStats, ModalitySlice},
    model::{Language, ViewMode},
    state::FilterSelection,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Command {
        command: DashboardCommand,
    },
    Analyze,
    Scan {
        path: String,
        #[serde(default)]
        mime: Option<String>,
    },
    ExportCsv,
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    language: Language,
    active_view: Option<ViewMode>,
    is_authenticated: bool,
    can_edit: bool,
    filters: FilterSelection,
    stats: GlobalStats,
    leaderboard: Vec<ConsultantPerformance>,
    modality_mix: Vec<ModalitySlice>,
    visible_sales: usize,
    pending_draft: Option<SaleDraft>,
    selected_consultant_id: Option<String>,
    analysis: Option<String>,
    is_analyzing: bool,
    is_scanning: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");
    let lang = args
        .windows(2)
        .find(|w| w[0] == "--lang")
        .map(|w| w[1].as_str())
        .unwrap_or("pt");

    if !ipc_mode {
        println!("SEDA Sales Race - race-runner");
        println!("  data_dir: {data_dir}");
        println!("  lang:     {lang}");
        println!();
    }

    let config = salesrace_core::config::RaceConfig::load(data_dir)?;
    log::debug!(
        "loaded {} consultants and {} seed sales from {data_dir}",
        config.consultants.len(),
        config.seed_sales.len()
    );
    let mut dashboard = Dashboard::build(config);
    if lang == "en" {
        dashboard.apply(DashboardCommand::SetLanguage {
            language: Language::En,
        })?;
    }

    if ipc_mode {
        run_ipc_loop(&mut dashboard)?;
    } else {
        print_summary(&dashboard);
    }

    Ok(())
}

fn run_ipc_loop(dashboard: &mut Dashboard) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    let mut client: Option<GeminiClient> = None;

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {
                write_state(&mut stdout, dashboard)?;
            }
            IpcCommand::Command { command } => match dashboard.apply(command) {
                Ok(()) => write_state(&mut stdout, dashboard)?,
                Err(e) => write_error(&mut stdout, &e.to_string())?,
            },
            IpcCommand::Analyze => {
                let outcome = ensure_client(&mut client).and_then(|c| dashboard.run_analysis(c));
                match outcome {
                    Ok(_) => write_state(&mut stdout, dashboard)?,
                    Err(e) => write_error(&mut stdout, &e.to_string())?,
                }
            }
            IpcCommand::Scan { path, mime } => {
                let document = match std::fs::read(&path) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        write_error(&mut stdout, &format!("Cannot read {path}: {e}"))?;
                        continue;
                    }
                };
                let mime_type = mime.unwrap_or_else(|| guess_mime(&path).to_string());
                let outcome = ensure_client(&mut client)
                    .and_then(|c| dashboard.scan_document(c, &document, &mime_type));
                match outcome {
                    Ok(_) => write_state(&mut stdout, dashboard)?,
                    Err(e) => write_error(&mut stdout, &e.to_string())?,
                }
            }
            IpcCommand::ExportCsv => {
                let csv =
                    export::render_csv(&dashboard.filtered_sales(), dashboard.state.language);
                let filename = export::export_filename(chrono::Local::now().date_naive());
                match std::fs::write(&filename, &csv) {
                    Ok(()) => {
                        writeln!(
                            stdout,
                            "{}",
                            serde_json::json!({ "filename": filename, "csv": csv })
                        )?;
                        stdout.flush()?;
                    }
                    Err(e) => {
                        write_error(&mut stdout, &format!("Cannot write {filename}: {e}"))?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Build the Gemini client on first use so sessions that never analyze
/// or scan do not need the key.
fn ensure_client(slot: &mut Option<GeminiClient>) -> RaceResult<&GeminiClient> {
    if slot.is_none() {
        *slot = Some(GeminiClient::from_env()?);
    }
    match slot.as_ref() {
        Some(client) => Ok(client),
        None => Err(RaceError::MissingApiKey),
    }
}

fn write_state(stdout: &mut io::Stdout, dashboard: &Dashboard) -> Result<()> {
    let state = build_ui_state(dashboard);
    writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
    stdout.flush()?;
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    writeln!(stdout, "{}", serde_json::json!({ "error": message }))?;
    stdout.flush()?;
    Ok(())
}

fn build_ui_state(dashboard: &Dashboard) -> UiState {
    let filtered = dashboard.filtered_sales();
    let leaderboard = dashboard.leaderboard();
    let stats = dashboard.stats();
    let modality_mix = dashboard.modality_mix();

    UiState {
        language: dashboard.state.language,
        active_view: dashboard.state.active_view,
        is_authenticated: dashboard.state.is_authenticated,
        can_edit: dashboard.state.can_edit(),
        filters: dashboard.state.filters.clone(),
        stats,
        leaderboard,
        modality_mix,
        visible_sales: filtered.len(),
        pending_draft: dashboard.state.pending_draft.clone(),
        selected_consultant_id: dashboard.state.selected_consultant_id.clone(),
        analysis: dashboard.state.analysis.clone(),
        is_analyzing: dashboard.state.is_analyzing,
        is_scanning: dashboard.state.is_scanning,
    }
}

fn print_summary(dashboard: &Dashboard) {
    let rows = dashboard.leaderboard();
    let stats = dashboard.stats();
    let mix = dashboard.modality_mix();

    println!("=== LEADERBOARD ===");
    println!(
        "  {:<4} {:<22} {:<8} {:<7} {:>8} {:>7} {:>6}  {}",
        "#", "Consultant", "Manager", "City", "Points", "Bonus", "Sales", "Last sale"
    );
    for (i, row) in rows.iter().enumerate() {
        let last = row
            .last_sale_date
            .map_or_else(|| "N/A".to_string(), |d| d.to_string());
        println!(
            "  {:<4} {:<22} {:<8} {:<7} {:>8.2} {:>7.0} {:>6}  {last}",
            i + 1,
            row.name,
            row.manager.label(),
            row.city.label(),
            row.total_points,
            row.total_bonus,
            row.sale_count
        );
    }

    println!();
    println!("=== RACE TOTALS ===");
    println!("  points:     {:.2}", stats.total_points);
    println!("  bonus:      {:.2}", stats.total_bonus);
    println!("  sales:      {}", stats.total_sales);
    println!("  tuition:    {:.2}", stats.total_tuition);
    println!("  avg ticket: {:.2}", stats.avg_ticket);

    println!();
    println!("=== MODALITY MIX ===");
    if mix.is_empty() {
        println!("  (no visible sales)");
    }
    for slice in &mix {
        println!("  {:<10} {}", slice.modality.label(), slice.count);
    }
}

fn guess_mime(path: &str) -> &'static str {
    let lower = path.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}
