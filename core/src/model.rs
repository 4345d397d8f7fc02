//! Domain model: closed enumerations and the two record types.
//!
//! Serde labels match the exact spellings the college uses on quotes and
//! in the roster (accents included), so data files and wire payloads
//! round-trip without a mapping layer.

use crate::types::{ConsultantId, SaleId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three fixed team leads. Consultants are grouped under exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Manager {
    Ana,
    #[serde(rename = "Mário")]
    Mario,
    #[serde(rename = "Letícia")]
    Leticia,
}

impl Manager {
    pub const ALL: [Manager; 3] = [Manager::Ana, Manager::Mario, Manager::Leticia];

    pub fn label(&self) -> &'static str {
        match self {
            Manager::Ana => "Ana",
            Manager::Mario => "Mário",
            Manager::Leticia => "Letícia",
        }
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Campus cities. Every consultant and every sale belongs to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum City {
    Dublin,
    Cork,
}

impl City {
    /// Boundary parse for extracted documents. Unknown spellings map to
    /// `None` so admission can fall back to the consultant's home city.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Dublin" => Some(City::Dublin),
            "Cork" => Some(City::Cork),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            City::Dublin => "Dublin",
            City::Cork => "Cork",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Course tiers. Elite and Premium carry a flat bonus on non-renewals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseModality {
    Standard,
    Premium,
    Elite,
    Barganha,
}

impl CourseModality {
    /// Boundary parse for extracted documents.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Standard" => Some(CourseModality::Standard),
            "Premium" => Some(CourseModality::Premium),
            "Elite" => Some(CourseModality::Elite),
            "Barganha" => Some(CourseModality::Barganha),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourseModality::Standard => "Standard",
            CourseModality::Premium => "Premium",
            CourseModality::Elite => "Elite",
            CourseModality::Barganha => "Barganha",
        }
    }
}

impl fmt::Display for CourseModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Cartão")]
    Cartao,
    Financiamento,
    #[serde(rename = "Transferência")]
    Transferencia,
    Boleto,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cartao => "Cartão",
            PaymentMethod::Financiamento => "Financiamento",
            PaymentMethod::Transferencia => "Transferência",
            PaymentMethod::Boleto => "Boleto",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    #[serde(rename = "Manhã")]
    Manha,
    Tarde,
}

impl Shift {
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Manha => "Manhã",
            Shift::Tarde => "Tarde",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dashboard display language. Affects the analysis call and CSV headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pt,
    En,
}

/// The three access profiles. Gestor and Gerentes require the login gate;
/// Consultores is read-only and open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Gestor,
    Gerentes,
    Consultores,
}

/// A salesperson on the static roster. Read-only for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultant {
    pub id: ConsultantId,
    pub name: String,
    pub manager: Manager,
    pub city: City,
}

/// One admitted sale. Immutable once created; the session list supports
/// append (prepend) and delete only. Tuition, points, and bonus are
/// computed at admission and never re-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub date: NaiveDate,
    pub consultant_id: ConsultantId,
    pub consultant_name: String,
    pub client_name: String,
    pub quote_number: String,
    pub city: City,
    pub shift: Shift,
    pub modality: CourseModality,
    pub is_renewal: bool,
    pub package_total_value: f64,
    pub services_amount: f64,
    pub accommodation_amount: f64,
    pub tuition_amount: f64,
    pub payment_method: PaymentMethod,
    pub is_eligible: bool,
    pub points: f64,
    pub bonus_euro: f64,
}
