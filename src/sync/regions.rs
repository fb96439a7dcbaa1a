//! Display regions
//!
//! The five regions the dashboard keeps in step with the latest snapshot
//! (summary, supports, resistances, strike table, status), plus the derived
//! open interest overview. Both the TUI and the console modes render from this
//! model; neither touches a snapshot directly.

use crate::api::{AnalyticsSnapshot, StrikeRow};
use crate::consts::cli_consts::PLACEHOLDER;
use crate::events::{CycleOutcome, Event};
use std::fmt::{self, Display};

/// Contents of the status region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusLine {
    #[default]
    Idle,
    Loading,
    Updated,
    /// Full status text, `Error: <reason>`.
    Failed(String),
}

impl StatusLine {
    pub fn text(&self) -> &str {
        match self {
            StatusLine::Idle => "",
            StatusLine::Loading => "Loading...",
            StatusLine::Updated => "Updated",
            StatusLine::Failed(text) => text,
        }
    }
}

/// Labeled values of the summary line, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub symbol: String,
    pub expiry: String,
    pub underlying: String,
    pub pcr: String,
    pub recommendation: String,
}

impl SummaryLine {
    fn from_snapshot(snapshot: &AnalyticsSnapshot) -> Self {
        Self {
            symbol: clean(&snapshot.symbol),
            expiry: clean_or_placeholder(snapshot.expiry.as_deref()),
            underlying: clean_or_placeholder(snapshot.underlying.as_deref()),
            pcr: snapshot.pcr.to_string(),
            recommendation: clean(&snapshot.recommendation),
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Symbol", self.symbol.as_str()),
            ("Expiry", self.expiry.as_str()),
            ("Underlying", self.underlying.as_str()),
            ("PCR", self.pcr.as_str()),
            ("Recommendation", self.recommendation.as_str()),
        ]
    }
}

impl Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields()
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        write!(f, "{}", parts.join("  "))
    }
}

/// One strike table row, formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrikeCells {
    pub strike: String,
    pub call_oi: String,
    pub put_oi: String,
}

impl From<&StrikeRow> for StrikeCells {
    fn from(row: &StrikeRow) -> Self {
        Self {
            strike: row.strike.to_string(),
            call_oi: row.call_oi.to_string(),
            put_oi: row.put_oi.to_string(),
        }
    }
}

/// Aggregate call/put open interest across the strike window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OiOverview {
    pub total_call_oi: f64,
    pub total_put_oi: f64,
    /// Strike with the highest call open interest.
    pub call_wall: Option<f64>,
    /// Strike with the highest put open interest.
    pub put_wall: Option<f64>,
}

impl OiOverview {
    pub fn from_rows(rows: &[StrikeRow]) -> Self {
        Self {
            total_call_oi: rows.iter().map(|r| r.call_oi).sum(),
            total_put_oi: rows.iter().map(|r| r.put_oi).sum(),
            call_wall: max_strike_by(rows, |r| r.call_oi),
            put_wall: max_strike_by(rows, |r| r.put_oi),
        }
    }

    /// Put/call ratio implied by the window totals.
    pub fn window_pcr(&self) -> Option<f64> {
        (self.total_call_oi > 0.0).then(|| self.total_put_oi / self.total_call_oi)
    }
}

/// First strike holding the maximum of `key`.
fn max_strike_by(rows: &[StrikeRow], key: impl Fn(&StrikeRow) -> f64) -> Option<f64> {
    rows.iter()
        .fold(None::<&StrikeRow>, |best, row| match best {
            Some(b) if key(b) >= key(row) => Some(b),
            _ => Some(row),
        })
        .map(|row| row.strike)
}

/// Whether a completion was rendered or dropped as stale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Applied {
    Rendered,
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardRegions {
    pub summary: Option<SummaryLine>,
    pub supports: Vec<String>,
    pub resistances: Vec<String>,
    pub strikes: Vec<StrikeCells>,
    pub overview: Option<OiOverview>,
    pub status: StatusLine,
    /// Highest cycle id whose completion has been rendered.
    last_applied_cycle: u64,
}

impl DashboardRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_applied_cycle(&self) -> u64 {
        self.last_applied_cycle
    }

    /// Marks a cycle as in flight. Only the status region changes.
    pub fn begin_cycle(&mut self) {
        self.status = StatusLine::Loading;
    }

    /// Applies a completion event, unless a newer cycle has already been rendered.
    ///
    /// Start events are ignored here; callers use [`begin_cycle`](Self::begin_cycle).
    pub fn apply(&mut self, event: &Event) -> Applied {
        let Some(outcome) = &event.outcome else {
            return Applied::Stale;
        };
        if event.cycle < self.last_applied_cycle {
            return Applied::Stale;
        }
        self.last_applied_cycle = event.cycle;

        match outcome {
            CycleOutcome::Updated(snapshot) => self.apply_snapshot(snapshot),
            CycleOutcome::Failed(status_text) => self.apply_failure(status_text.clone()),
        }
        Applied::Rendered
    }

    /// Replaces every region with the snapshot's contents.
    pub fn apply_snapshot(&mut self, snapshot: &AnalyticsSnapshot) {
        self.summary = Some(SummaryLine::from_snapshot(snapshot));

        self.supports.clear();
        self.supports.extend(ranked("S", &snapshot.supports));
        self.resistances.clear();
        self.resistances.extend(ranked("R", &snapshot.resistances));

        self.strikes.clear();
        self.strikes
            .extend(snapshot.strikes_window.iter().map(StrikeCells::from));
        self.overview = Some(OiOverview::from_rows(&snapshot.strikes_window));

        self.status = StatusLine::Updated;
    }

    /// Records a failed cycle. Every region except status keeps its contents.
    pub fn apply_failure(&mut self, status_text: String) {
        self.status = StatusLine::Failed(clean(&status_text));
    }
}

/// `S1: 100`, `S2: 105`, ...
fn ranked(prefix: &str, levels: &[f64]) -> impl Iterator<Item = String> {
    levels
        .iter()
        .enumerate()
        .map(move |(i, level)| format!("{}{}: {}", prefix, i + 1, level))
}

/// Strips control characters so server text cannot drive the terminal.
pub fn clean(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

fn clean_or_placeholder(text: Option<&str>) -> String {
    match text.map(clean) {
        Some(text) if !text.is_empty() => text,
        _ => PLACEHOLDER.to_string(),
    }
}

impl Display for DashboardRegions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.summary {
            Some(summary) => writeln!(f, "{}", summary)?,
            None => writeln!(f, "No data yet")?,
        }
        writeln!(f, "Supports: {}", self.supports.join(", "))?;
        writeln!(f, "Resistances: {}", self.resistances.join(", "))?;
        writeln!(f, "{:>10} {:>12} {:>12}", "Strike", "Call OI", "Put OI")?;
        for row in &self.strikes {
            writeln!(f, "{:>10} {:>12} {:>12}", row.strike, row.call_oi, row.put_oi)?;
        }
        if let Some(overview) = &self.overview {
            writeln!(
                f,
                "Total OI: call {} / put {}",
                overview.total_call_oi, overview.total_put_oi
            )?;
        }
        write!(f, "Status: {}", self.status.text())
    }
}
