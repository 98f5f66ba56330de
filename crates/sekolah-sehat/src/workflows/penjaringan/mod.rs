//! Yearly school screening ("penjaringan kesehatan") sheet import.
//!
//! The sheet is a CSV with Indonesian headers as exported from the field
//! spreadsheets; measurements tolerate a decimal comma. Rows that cannot be
//! scored are skipped and reported with their line number, never silently
//! dropped and never aborting the batch.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::scoring::{
    birth_weight_category, classify_nutrition, nutrition_severity, BirthWeightCategory,
    NutritionAssessment, NutritionStatus, ScoringConfig,
};

#[derive(Debug, thiserror::Error)]
pub enum PenjaringanImportError {
    #[error("failed to read penjaringan sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid penjaringan CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// One child scored from the sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenedChild {
    pub name: String,
    pub class: String,
    pub assessment: NutritionAssessment,
    pub birth_weight: Option<BirthWeightCategory>,
    pub nutrition_severity: u8,
    pub flagged: bool,
}

/// Why a data row was left out of the cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "value")]
pub enum SkipReason {
    BlankName,
    InvalidHeight(String),
    InvalidWeight(String),
    InvalidBirthWeight(String),
    UnscorableMeasurement(String),
}

impl SkipReason {
    pub fn describe(&self) -> String {
        match self {
            SkipReason::BlankName => "name is blank".to_string(),
            SkipReason::InvalidHeight(raw) => format!("height '{raw}' is not a number"),
            SkipReason::InvalidWeight(raw) => format!("weight '{raw}' is not a number"),
            SkipReason::InvalidBirthWeight(raw) => {
                format!("birth weight '{raw}' is not a positive number")
            }
            SkipReason::UnscorableMeasurement(detail) => detail.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line in the sheet, counting the header as line 1.
    pub line: u64,
    pub name: Option<String>,
    pub reason: SkipReason,
}

/// The scored cohort plus everything that was skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortScreening {
    pub screened: Vec<ScreenedChild>,
    pub skipped: Vec<SkippedRow>,
}

impl CohortScreening {
    /// Per-school nutrition summary: counts and shares per status plus the
    /// number of flagged children.
    pub fn summary(&self) -> CohortSummary {
        let mut status_counts: BTreeMap<NutritionStatus, usize> = BTreeMap::new();
        for status in NutritionStatus::ordered() {
            status_counts.insert(status, 0);
        }
        let mut flagged = 0;
        for child in &self.screened {
            *status_counts.entry(child.assessment.status).or_insert(0) += 1;
            if child.flagged {
                flagged += 1;
            }
        }

        let screened = self.screened.len();
        let statuses = NutritionStatus::ordered()
            .into_iter()
            .map(|status| {
                let count = status_counts.get(&status).copied().unwrap_or(0);
                StatusCount {
                    status,
                    label: status.label(),
                    count,
                    share: if screened == 0 {
                        0.0
                    } else {
                        count as f64 / screened as f64
                    },
                }
            })
            .collect();

        CohortSummary {
            total_rows: screened + self.skipped.len(),
            screened,
            skipped: self.skipped.len(),
            flagged,
            statuses,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: NutritionStatus,
    pub label: &'static str,
    pub count: usize,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSummary {
    pub total_rows: usize,
    pub screened: usize,
    pub skipped: usize,
    pub flagged: usize,
    pub statuses: Vec<StatusCount>,
}

pub struct PenjaringanImporter;

impl PenjaringanImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        config: &ScoringConfig,
    ) -> Result<CohortScreening, PenjaringanImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, config)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        config: &ScoringConfig,
    ) -> Result<CohortScreening, PenjaringanImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut screened = Vec::new();
        let mut skipped = Vec::new();

        for (index, record) in csv_reader.deserialize::<PenjaringanRow>().enumerate() {
            // Header occupies line 1, the first data row line 2.
            let line = index as u64 + 2;
            let row = record?;

            match score_row(&row, config) {
                Ok(child) => screened.push(child),
                Err(reason) => skipped.push(SkippedRow {
                    line,
                    name: row.name().map(str::to_string),
                    reason,
                }),
            }
        }

        Ok(CohortScreening { screened, skipped })
    }
}

#[derive(Debug, Deserialize)]
struct PenjaringanRow {
    #[serde(rename = "Nama")]
    nama: String,
    #[serde(rename = "Kelas", default)]
    kelas: String,
    #[serde(rename = "Tinggi (cm)")]
    tinggi: String,
    #[serde(rename = "Berat (kg)")]
    berat: String,
    #[serde(
        rename = "Berat Lahir (kg)",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    berat_lahir: Option<String>,
}

impl PenjaringanRow {
    fn name(&self) -> Option<&str> {
        let trimmed = self.nama.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

fn score_row(row: &PenjaringanRow, config: &ScoringConfig) -> Result<ScreenedChild, SkipReason> {
    let name = row.name().ok_or(SkipReason::BlankName)?;

    let height_cm = parse_measurement(&row.tinggi)
        .ok_or_else(|| SkipReason::InvalidHeight(row.tinggi.clone()))?;
    let weight_kg = parse_measurement(&row.berat)
        .ok_or_else(|| SkipReason::InvalidWeight(row.berat.clone()))?;

    let assessment = classify_nutrition(&config.bmi, height_cm, weight_kg)
        .map_err(|err| SkipReason::UnscorableMeasurement(err.to_string()))?;

    let birth_weight = match &row.berat_lahir {
        Some(raw) => {
            let kg = parse_measurement(raw)
                .ok_or_else(|| SkipReason::InvalidBirthWeight(raw.clone()))?;
            let category = birth_weight_category(kg)
                .map_err(|_| SkipReason::InvalidBirthWeight(raw.clone()))?;
            Some(category)
        }
        None => None,
    };

    let severity = nutrition_severity(assessment.status);

    Ok(ScreenedChild {
        name: name.to_string(),
        class: row.kelas.trim().to_string(),
        assessment,
        birth_weight,
        nutrition_severity: severity,
        flagged: severity >= config.risk.elevated_nutrition_severity,
    })
}

/// Field sheets use a decimal comma as often as a decimal point.
fn parse_measurement(value: &str) -> Option<f64> {
    let normalized = value.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Nama,Kelas,Tinggi (cm),Berat (kg),Berat Lahir (kg)\n";

    fn import(rows: &str) -> CohortScreening {
        let csv = format!("{HEADER}{rows}");
        PenjaringanImporter::from_reader(Cursor::new(csv), &ScoringConfig::default())
            .expect("sheet parses")
    }

    #[test]
    fn parses_decimal_comma_measurements() {
        let cohort = import("Siti,4A,\"128,5\",\"26,4\",\"3,2\"\n");
        assert_eq!(cohort.screened.len(), 1);
        let child = &cohort.screened[0];
        assert_eq!(child.name, "Siti");
        assert!((child.assessment.bmi - 26.4 / (1.285 * 1.285)).abs() < 1e-9);
        assert_eq!(child.birth_weight, Some(BirthWeightCategory::Typical));
    }

    #[test]
    fn skips_bad_rows_with_line_numbers_without_aborting() {
        let cohort = import(concat!(
            "Siti,4A,128,26,3.2\n",
            ",4A,130,28,\n",
            "Joko,4B,tinggi,30,\n",
            "Rina,4B,135,0,\n",
            "Andi,4A,140,33,4.6\n",
        ));

        assert_eq!(cohort.screened.len(), 2);
        assert_eq!(cohort.skipped.len(), 3);

        assert_eq!(cohort.skipped[0].line, 3);
        assert_eq!(cohort.skipped[0].reason, SkipReason::BlankName);
        assert_eq!(cohort.skipped[1].line, 4);
        assert!(matches!(cohort.skipped[1].reason, SkipReason::InvalidHeight(_)));
        assert_eq!(cohort.skipped[1].name.as_deref(), Some("Joko"));
        assert_eq!(cohort.skipped[2].line, 5);
        assert!(matches!(
            cohort.skipped[2].reason,
            SkipReason::UnscorableMeasurement(_)
        ));

        // Macrosomia is recorded on the surviving row.
        assert_eq!(
            cohort.screened[1].birth_weight,
            Some(BirthWeightCategory::Macrosomia)
        );
    }

    #[test]
    fn no_row_is_lost() {
        let cohort = import(concat!(
            "Siti,4A,128,26,\n",
            ",4A,130,28,\n",
            "Andi,4A,140,33,\n",
        ));
        let summary = cohort.summary();
        assert_eq!(summary.total_rows, 3);
        assert_eq!(summary.screened + summary.skipped, summary.total_rows);
    }

    #[test]
    fn summary_counts_statuses_and_flags() {
        // 170/70 is normal; the children land severely thin under the
        // adult bands.
        let cohort = import(concat!(
            "Budi,6A,170,70,\n",
            "Siti,4A,128,26,\n",
            "Andi,4A,130,27,\n",
        ));
        let summary = cohort.summary();
        assert_eq!(summary.screened, 3);
        assert_eq!(summary.flagged, 2);

        let normal = summary
            .statuses
            .iter()
            .find(|entry| entry.status == NutritionStatus::Normal)
            .expect("status row present");
        assert_eq!(normal.count, 1);
        assert!((normal.share - 1.0 / 3.0).abs() < 1e-9);

        let severely_thin = summary
            .statuses
            .iter()
            .find(|entry| entry.status == NutritionStatus::SeverelyThin)
            .expect("status row present");
        assert_eq!(severely_thin.count, 2);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = PenjaringanImporter::from_path("./does-not-exist.csv", &ScoringConfig::default())
            .expect_err("expected io error");
        assert!(matches!(err, PenjaringanImportError::Io(_)));
    }
}
