//! Gemini client for race analysis and quote extraction.
//!
//! Direct HTTP via reqwest against the generateContent endpoint, one
//! attempt per call. The two callers differ in failure posture: the
//! analysis degrades to a canned line in the display language, while
//! extraction surfaces its error so the operator can retry with a
//! better scan.

use crate::admission::ExtractedQuote;
use crate::error::{RaceError, RaceResult};
use crate::leaderboard::ConsultantPerformance;
use crate::model::{City, CourseModality, Language, Manager};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const EXTRACTION_PROMPT: &str = r#"Analyze this SEDA College quote document and extract the following information in JSON format.

CRITICAL EXTRACTION RULES:
1. CONSULTANT: You must look for the phrase "International Marketing". The name IMMEDIATELY ABOVE this phrase is the consultant's name. Example: if "Naiara" appears and below "International Marketing", the consultant is Naiara. Ignore director or reception names at the top of the document.
2. VALUES:
   - The TOTAL package value is in black and bold at the end of the price table.
   - SERVICES: Always consider 420€ as a fixed deduction.
   - ACCOMMODATION: Extract the "Accommodation" value if present, otherwise use 0.
3. CITIES: Dublin or Cork.

Return the JSON following this schema:
- sellerName (Name extracted above International Marketing)
- clientName (Student name)
- quoteNumber (Ex: QT-XXXX)
- date (YYYY-MM-DD)
- city (Dublin or Cork)
- modality (Standard, Premium, Elite or Barganha)
- isRenewal (boolean)
- packageTotalValue (Number)
- servicesAmount (420)
- accommodationAmount (Number)"#;

/// Canned analysis line shown when the service call fails.
pub fn analysis_fallback(language: Language) -> &'static str {
    match language {
        Language::Pt => "Desculpe, não conseguimos gerar a análise agora.",
        Language::En => "Sorry, we couldn't generate the analysis right now.",
    }
}

pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Build a client keyed from the GEMINI_API_KEY environment variable.
    pub fn from_env() -> RaceResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| RaceError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_key,
            model: GEMINI_MODEL.to_string(),
        }
    }

    /// Motivational analysis over the ranked board. Any failure degrades
    /// to the fallback line; the board itself never depends on this.
    pub fn analyze_race(
        &self,
        rows: &[ConsultantPerformance],
        active_manager: Option<Manager>,
        language: Language,
    ) -> String {
        let prompt = analysis_prompt(rows, active_manager, language);
        match self.generate(&analysis_request(&prompt)) {
            Ok(response) => match first_text(&response) {
                Some(text) => text,
                None => {
                    log::warn!("analysis returned no text");
                    analysis_fallback(language).to_string()
                }
            },
            Err(e) => {
                log::warn!("analysis call failed: {e}");
                analysis_fallback(language).to_string()
            }
        }
    }

    /// Extract a quote from a scanned document (PDF or image bytes).
    pub fn extract_sale(&self, document: &[u8], mime_type: &str) -> RaceResult<ExtractedQuote> {
        use base64::Engine;
        let data = base64::engine::general_purpose::STANDARD.encode(document);
        log::debug!(
            "extracting quote from {} bytes of {mime_type}",
            document.len()
        );
        let response = self.generate(&extraction_request(&data, mime_type))?;
        let text = first_text(&response).ok_or_else(|| RaceError::ExtractionFailed {
            reason: "model returned no text".into(),
        })?;
        let payload: ExtractionPayload = serde_json::from_str(&text)?;
        quote_from_payload(payload)
    }

    fn generate(&self, body: &serde_json::Value) -> RaceResult<GenerateResponse> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().unwrap_or_default();
            return Err(RaceError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json()?)
    }
}

/// One line per ranked row, the shape the analysis prompt promises.
pub fn sellers_block(rows: &[ConsultantPerformance]) -> String {
    rows.iter()
        .map(|r| {
            format!(
                "{} ({}): {} points, {} sales",
                r.name, r.manager, r.total_points, r.sale_count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn analysis_prompt(
    rows: &[ConsultantPerformance],
    active_manager: Option<Manager>,
    language: Language,
) -> String {
    let scope = active_manager.map_or_else(|| "Global".to_string(), |m| m.to_string());
    let target = match language {
        Language::Pt => "Portuguese",
        Language::En => "English",
    };
    let mut prompt = String::new();
    prompt.push_str("Act as a sales performance analyst for SEDA College.\n");
    prompt.push_str("We are in the middle of a \"Sales Race\".\n");
    prompt.push_str("Below are the sellers data:\n");
    prompt.push_str(&sellers_block(rows));
    prompt.push_str("\n\n");
    prompt.push_str(&format!(
        "The manager currently viewing this dashboard is: {scope}.\n\n"
    ));
    prompt.push_str(&format!(
        "Please provide a quick motivational analysis (max 3 paragraphs) in {target}:\n"
    ));
    prompt.push_str("1. Who is leading and why.\n");
    prompt.push_str(&format!(
        "2. How the current manager's team ({scope}) is performing.\n"
    ));
    prompt.push_str(
        "3. A strategic tip to increase the Average Tuition ticket (currently focused on the race).",
    );
    prompt
}

fn analysis_request(prompt: &str) -> serde_json::Value {
    json!({
        "contents": [ { "parts": [ { "text": prompt } ] } ]
    })
}

fn extraction_request(data: &str, mime_type: &str) -> serde_json::Value {
    json!({
        "contents": [ { "parts": [
            { "inlineData": { "mimeType": mime_type, "data": data } },
            { "text": EXTRACTION_PROMPT },
        ] } ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": extraction_schema(),
        }
    })
}

fn extraction_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sellerName": { "type": "STRING" },
            "clientName": { "type": "STRING" },
            "quoteNumber": { "type": "STRING" },
            "date": { "type": "STRING" },
            "city": { "type": "STRING" },
            "modality": { "type": "STRING" },
            "isRenewal": { "type": "BOOLEAN" },
            "packageTotalValue": { "type": "NUMBER" },
            "servicesAmount": { "type": "NUMBER" },
            "accommodationAmount": { "type": "NUMBER" },
        },
        "required": ["sellerName", "clientName", "packageTotalValue"]
    })
}

/// Raw extraction payload as the model writes it. Everything is optional
/// on the wire; the boundary check below decides what is fatal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionPayload {
    pub seller_name: Option<String>,
    pub client_name: Option<String>,
    pub quote_number: Option<String>,
    pub date: Option<String>,
    pub city: Option<String>,
    pub modality: Option<String>,
    pub is_renewal: Option<bool>,
    pub package_total_value: Option<f64>,
    pub services_amount: Option<f64>,
    pub accommodation_amount: Option<f64>,
}

/// Check and type an extraction payload.
///
/// Seller, client, and package value are required; the rest soften:
/// unknown city or unparseable date become `None` for admission to fill,
/// unknown modality reads as Standard, missing amounts read as zero.
/// The document's servicesAmount is ignored; the deduction is fixed.
pub fn quote_from_payload(payload: ExtractionPayload) -> RaceResult<ExtractedQuote> {
    let seller_name = required_text(payload.seller_name, "sellerName")?;
    let client_name = required_text(payload.client_name, "clientName")?;
    let package_total_value = payload
        .package_total_value
        .ok_or_else(|| missing("packageTotalValue"))?;

    let date = payload
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok());
    let city = payload.city.as_deref().and_then(City::from_label);
    let modality = payload
        .modality
        .as_deref()
        .and_then(CourseModality::from_label)
        .unwrap_or(CourseModality::Standard);

    Ok(ExtractedQuote {
        seller_name,
        client_name,
        quote_number: payload.quote_number.unwrap_or_default(),
        date,
        city,
        modality,
        is_renewal: payload.is_renewal.unwrap_or(false),
        package_total_value,
        accommodation_amount: payload.accommodation_amount.unwrap_or(0.0),
    })
}

fn required_text(value: Option<String>, field: &str) -> RaceResult<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(missing(field)),
    }
}

fn missing(field: &str) -> RaceError {
    RaceError::ExtractionFailed {
        reason: format!("document is missing {field}"),
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Concatenated text parts of the first candidate, if any.
fn first_text(response: &GenerateResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text: String = candidate
        .content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
