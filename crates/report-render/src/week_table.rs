//! Fixed-width weekly table for the energy report.
//!
//! Renders one [`WeekSection`]: a title, a two-line column legend, a dash
//! rule and one row per date in ascending order. Column widths are fixed so
//! that sections from different weeks line up when concatenated.

use report_core::formatting;
use report_core::models::{DailyTotals, DailyTotalsByDate, WeekSection, PHASE_COUNT};
use report_core::time_utils::{format_date, weekday_name_of};

/// Width of the dash rule under the legend.
pub const RULE_WIDTH: usize = 75;

const LEGEND_TITLES: &str =
    "Day        Date         Consumption [kWh]            Production [kWh]";
const LEGEND_PHASES: &str =
    "                         v1      v2      v3           v1     v2     v3";

// Minimum widths; values that do not fit are never truncated.
const WEEKDAY_WIDTH: usize = 10;
const DATE_WIDTH: usize = 12;
const CONSUMPTION_WIDTH: usize = 6;
const PRODUCTION_WIDTH: usize = 5;

/// Formatted cell values for one body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRowData {
    /// English weekday name, e.g. `"Monday"`.
    pub weekday: &'static str,
    /// Date as `dd.mm.yyyy`.
    pub date: String,
    /// Consumption per phase, kWh with decimal comma.
    pub consumption: [String; PHASE_COUNT],
    /// Production per phase, kWh with decimal comma.
    pub production: [String; PHASE_COUNT],
}

impl From<&DailyTotals> for WeekRowData {
    fn from(totals: &DailyTotals) -> Self {
        WeekRowData {
            weekday: weekday_name_of(totals.date),
            date: format_date(totals.date),
            consumption: totals.consumption.map(formatting::format_wh_as_kwh),
            production: totals.production.map(formatting::format_wh_as_kwh),
        }
    }
}

impl WeekRowData {
    /// Lay the row out at the fixed column widths.
    pub fn render(&self) -> String {
        let [c1, c2, c3] = &self.consumption;
        let [p1, p2, p3] = &self.production;
        format!(
            "{:<wd$} {:<dd$} {:>cw$}  {:>cw$}  {:>cw$}      {:>pw$}  {:>pw$}  {:>pw$}",
            self.weekday,
            self.date,
            c1,
            c2,
            c3,
            p1,
            p2,
            p3,
            wd = WEEKDAY_WIDTH,
            dd = DATE_WIDTH,
            cw = CONSUMPTION_WIDTH,
            pw = PRODUCTION_WIDTH,
        )
    }
}

/// Title line for week `week`.
pub fn title_line(week: u32) -> String {
    format!(
        "Week {} electricity consumption and production (kWh, by phase)",
        week
    )
}

/// Render the section for `week` from its daily totals.
///
/// Rows are emitted in ascending date order. An empty mapping yields the
/// header and rule with no body rows. The text always ends with a blank line
/// so sections can be joined back to back.
pub fn render_week_section(week: u32, days: &DailyTotalsByDate) -> WeekSection {
    let mut lines: Vec<String> = Vec::with_capacity(days.len() + 6);

    lines.push(title_line(week));
    lines.push(String::new());
    lines.push(LEGEND_TITLES.to_string());
    lines.push(LEGEND_PHASES.to_string());
    lines.push("-".repeat(RULE_WIDTH));

    // BTreeMap iteration is already ascending by date.
    lines.extend(days.values().map(|totals| WeekRowData::from(totals).render()));

    lines.push("\n".to_string());

    WeekSection {
        week,
        text: lines.join("\n"),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
