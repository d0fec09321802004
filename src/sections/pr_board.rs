use serde::Serialize;

use super::{EmptyState, PLACEHOLDER, text_or_placeholder};
use crate::models::{PrRecord, Sex};

const NO_RECORDS: EmptyState = EmptyState {
    title: "PR Board Is Active",
    message: "Records will appear here once lifter PRs are published.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Division {
    #[default]
    #[serde(rename = "all")]
    All,
    M,
    W,
}

impl Division {
    /// Parses the `division` query value; anything unrecognised shows everyone.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("M") | Some("m") => Division::M,
            Some("W") | Some("w") => Division::W,
            _ => Division::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::All => "all",
            Division::M => "M",
            Division::W => "W",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Division::All => "All",
            Division::M => "Men",
            Division::W => "Women",
        }
    }

    pub fn admits(&self, record: &PrRecord) -> bool {
        match self {
            Division::All => true,
            Division::M => record.sex == Some(Sex::M),
            Division::W => record.sex == Some(Sex::W),
        }
    }
}

/// Records in `division`, keeping their relative order.
pub fn filter_division(records: &[PrRecord], division: Division) -> Vec<&PrRecord> {
    records.iter().filter(|r| division.admits(r)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisionTab {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrRow {
    pub id: String,
    pub leader: bool,
    pub lifter: String,
    pub division: String,
    pub weight_class: String,
    pub squat: String,
    pub bench: String,
    pub deadlift: String,
    pub total: String,
    pub dots: String,
    pub competition: String,
    pub set_at: String,
}

impl PrRow {
    fn from_record(record: &PrRecord, leader: bool) -> Self {
        Self {
            id: record.id.clone(),
            leader,
            lifter: record.lifter_name.clone(),
            division: match record.sex {
                Some(Sex::M) => Division::M.label().to_string(),
                Some(Sex::W) => Division::W.label().to_string(),
                None => PLACEHOLDER.to_string(),
            },
            weight_class: text_or_placeholder(record.weight_class.as_deref()),
            squat: format_kg(record.squat),
            bench: format_kg(record.bench),
            deadlift: format_kg(record.deadlift),
            total: format_kg(record.total),
            dots: format_dots(record.dots),
            competition: text_or_placeholder(record.competition.as_deref()),
            set_at: record
                .set_at
                .map(|date| date.format("%b %-d, %Y").to_string())
                .unwrap_or(PLACEHOLDER.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrBoardSection {
    pub division: Division,
    pub tabs: Vec<DivisionTab>,
    pub rows: Vec<PrRow>,
    pub empty: Option<EmptyState>,
}

impl PrBoardSection {
    /// Filters the full record list locally; changing division never refetches.
    pub fn build(records: &[PrRecord], division: Division) -> Self {
        let rows: Vec<PrRow> = filter_division(records, division)
            .into_iter()
            .enumerate()
            .map(|(i, record)| PrRow::from_record(record, i == 0 && division != Division::All))
            .collect();

        let tabs = [Division::All, Division::M, Division::W]
            .into_iter()
            .map(|d| DivisionTab {
                value: d.as_str(),
                label: d.label(),
                active: d == division,
            })
            .collect();

        Self {
            division,
            tabs,
            empty: rows.is_empty().then_some(NO_RECORDS),
            rows,
        }
    }
}

/// Whole kilos print without decimals, fractional ones as entered. Zero is a
/// real value and prints as `0`.
pub fn format_kg(value: Option<f64>) -> String {
    match value {
        Some(kg) if kg.fract() == 0.0 => format!("{}", kg as i64),
        Some(kg) => format!("{}", kg),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_dots(value: Option<f64>) -> String {
    value
        .map(|dots| format!("{:.1}", dots))
        .unwrap_or(PLACEHOLDER.to_string())
}
