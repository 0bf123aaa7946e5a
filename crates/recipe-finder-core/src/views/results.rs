use crate::api::{RecipeSummary, SearchResponse};
use crate::config::{MISSING_PREVIEW_LIMIT, TRUNCATION_MARKER};

/// Contents of the results panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPanel {
    Found {
        /// Total matches the backend found; may exceed `rows.len()`.
        total_found: u64,
        rows: Vec<ResultRow>,
    },
    /// Search succeeded but nothing matched. Offers a way into category browsing.
    Empty,
    /// The search request or its decoding failed.
    Failed,
}

impl ResultsPanel {
    /// Builds the panel for a non-direct search response.
    pub fn from_response(response: &SearchResponse) -> Self {
        if response.recipes.is_empty() {
            return ResultsPanel::Empty;
        }

        let rows: Vec<ResultRow> = response.recipes.iter().map(ResultRow::from).collect();
        ResultsPanel::Found {
            total_found: response.total_found.unwrap_or(rows.len() as u64),
            rows,
        }
    }

    /// "Found N recipes! Showing top M matches." or `None` when nothing was found.
    pub fn summary(&self) -> Option<String> {
        match self {
            ResultsPanel::Found { total_found, rows } => Some(format!(
                "Found {} recipes! Showing top {} matches.",
                total_found,
                rows.len()
            )),
            ResultsPanel::Empty | ResultsPanel::Failed => None,
        }
    }
}

/// One recipe card in the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub name: String,
    pub match_count: u32,
    /// Match percentage rounded to the nearest integer.
    pub match_percent: i64,
    pub missing: MissingPreview,
}

impl ResultRow {
    pub fn match_line(&self) -> String {
        format!(
            "{} ingredients match ({}%)",
            self.match_count, self.match_percent
        )
    }
}

impl From<&RecipeSummary> for ResultRow {
    fn from(summary: &RecipeSummary) -> Self {
        Self {
            name: summary.name.clone(),
            match_count: summary.match_count,
            match_percent: round_half_up(summary.match_percentage),
            missing: MissingPreview::from_missing(&summary.missing),
        }
    }
}

/// What a result card says about ingredients the user lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingPreview {
    /// Nothing missing: show the "complete" badge.
    Complete,
    Needs {
        /// At most [`MISSING_PREVIEW_LIMIT`] items, in backend order.
        shown: Vec<String>,
        /// More items exist beyond `shown`.
        truncated: bool,
    },
}

impl MissingPreview {
    pub fn from_missing(missing: &[String]) -> Self {
        if missing.is_empty() {
            return MissingPreview::Complete;
        }

        MissingPreview::Needs {
            shown: missing.iter().take(MISSING_PREVIEW_LIMIT).cloned().collect(),
            truncated: missing.len() > MISSING_PREVIEW_LIMIT,
        }
    }

    /// Display text: "Need: a, b, c, d..." or the complete badge text.
    pub fn text(&self) -> String {
        match self {
            MissingPreview::Complete => "✅ You have all ingredients!".to_string(),
            MissingPreview::Needs { shown, truncated } => {
                let marker = if *truncated { TRUNCATION_MARKER } else { "" };
                format!("Need: {}{}", shown.join(", "), marker)
            }
        }
    }
}

/// Rounds halves toward positive infinity (12.5 -> 13).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
