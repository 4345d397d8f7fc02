use crate::model::{City, Consultant, CourseModality, Manager, PaymentMethod, Sale, Shift};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct RosterFile {
    consultants: Vec<Consultant>,
}

#[derive(Debug, Clone, Deserialize)]
struct SeedSalesFile {
    sales: Vec<Sale>,
}

/// Static inputs of a race: the consultant roster and the sales already
/// on the board when the dashboard starts.
#[derive(Debug, Clone)]
pub struct RaceConfig {
    pub consultants: Vec<Consultant>,
    pub seed_sales: Vec<Sale>,
}

impl RaceConfig {
    /// Load from the data/ directory.
    /// In tests, use RaceConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let roster_path = format!("{data_dir}/roster/consultants.json");
        let roster_content = std::fs::read_to_string(&roster_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {roster_path}: {e}"))?;
        let roster_file: RosterFile = serde_json::from_str(&roster_content)?;

        let sales_path = format!("{data_dir}/sales/seed_sales.json");
        let sales_content = std::fs::read_to_string(&sales_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {sales_path}: {e}"))?;
        let sales_file: SeedSalesFile = serde_json::from_str(&sales_content)?;

        Ok(Self {
            consultants: roster_file.consultants,
            seed_sales: sales_file.sales,
        })
    }

    /// Config with a hardcoded roster and seed sales for use in unit tests.
    /// Seed points and bonuses are carried as entered on the historical
    /// board, not recomputed.
    pub fn default_test() -> Self {
        let consultants = vec![
            consultant("L2", "Felipe Frade", Manager::Leticia, City::Dublin),
            consultant("L6", "Amanda Bezerra", Manager::Leticia, City::Cork),
            consultant("L9", "Naiara da Fonseca", Manager::Leticia, City::Dublin),
            consultant("A1", "Rafael Felix", Manager::Ana, City::Dublin),
            consultant("A2", "Barbara Raskovisch", Manager::Ana, City::Dublin),
            consultant("M1", "Felippe Teixeira", Manager::Mario, City::Dublin),
        ];

        let seed_sales = vec![
            Sale {
                id: "s1".into(),
                date: date(2024, 5, 10),
                consultant_id: "A1".into(),
                consultant_name: "Rafael Felix".into(),
                client_name: "João Goulart".into(),
                quote_number: "QT-2024-001".into(),
                city: City::Dublin,
                shift: Shift::Manha,
                modality: CourseModality::Elite,
                is_renewal: false,
                package_total_value: 4820.0,
                services_amount: 420.0,
                accommodation_amount: 1200.0,
                tuition_amount: 3200.0,
                payment_method: PaymentMethod::Transferencia,
                is_eligible: true,
                points: 177.77,
                bonus_euro: 65.0,
            },
            Sale {
                id: "s2".into(),
                date: date(2024, 5, 11),
                consultant_id: "L2".into(),
                consultant_name: "Felipe Frade".into(),
                client_name: "Maria Alice".into(),
                quote_number: "QT-2024-042".into(),
                city: City::Dublin,
                shift: Shift::Tarde,
                modality: CourseModality::Premium,
                is_renewal: true,
                package_total_value: 3120.0,
                services_amount: 420.0,
                accommodation_amount: 0.0,
                tuition_amount: 2700.0,
                payment_method: PaymentMethod::Boleto,
                is_eligible: true,
                points: 24.0,
                bonus_euro: 0.0,
            },
            Sale {
                id: "s3".into(),
                date: date(2024, 5, 12),
                consultant_id: "L9".into(),
                consultant_name: "Naiara da Fonseca".into(),
                client_name: "Carlos Eduardo".into(),
                quote_number: "QT-2024-088".into(),
                city: City::Dublin,
                shift: Shift::Manha,
                modality: CourseModality::Elite,
                is_renewal: false,
                package_total_value: 4240.0,
                services_amount: 420.0,
                accommodation_amount: 820.0,
                tuition_amount: 3000.0,
                payment_method: PaymentMethod::Cartao,
                is_eligible: true,
                points: 166.66,
                bonus_euro: 70.0,
            },
        ];

        Self {
            consultants,
            seed_sales,
        }
    }

    /// Look up a roster entry by consultant id.
    pub fn consultant(&self, id: &str) -> Option<&Consultant> {
        self.consultants.iter().find(|c| c.id == id)
    }
}

fn consultant(id: &str, name: &str, manager: Manager, city: City) -> Consultant {
    Consultant {
        id: id.into(),
        name: name.into(),
        manager,
        city,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("literal calendar date")
}
