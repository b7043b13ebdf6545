//! Daily activity chart ("ritmo de juego").
//!
//! The API returns a sparse list of `(fecha, cantidad)` pairs. The chart
//! shows one bar per calendar day of the selected window, ending today,
//! with zero for the days the API left out.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Headroom applied above the tallest bar.
pub const ACTIVITY_HEADROOM: f64 = 1.25;

/// Scale used instead of the maximum when every count is zero.
pub const EMPTY_SCALE_FALLBACK: f64 = 10.0;

/// Selectable chart windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityWindow {
    #[default]
    Week,
    Month,
}

impl ActivityWindow {
    pub fn days(&self) -> u32 {
        match self {
            ActivityWindow::Week => 7,
            ActivityWindow::Month => 30,
        }
    }
}

impl TryFrom<u32> for ActivityWindow {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(ActivityWindow::Week),
            30 => Ok(ActivityWindow::Month),
            other => Err(format!("activity window must be 7 or 30 days, got {other}")),
        }
    }
}

/// One `(fecha, cantidad)` pair from `/api/dashboard/ritmo-juego`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub fecha: String,
    pub cantidad: u64,
}

/// One bar of the padded chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityBar {
    pub date: NaiveDate,
    pub count: u64,
    pub is_today: bool,
}

impl ActivityBar {
    /// `dd/mm` axis label.
    pub fn label(&self) -> String {
        self.date.format("%d/%m").to_string()
    }
}

/// Expand `points` into one bar per day of `window`, oldest first, ending
/// at `today`. Days absent from `points` get a zero count. If a date
/// appears more than once the first occurrence wins; dates that do not
/// parse as `YYYY-MM-DD` (optionally followed by a time) are ignored.
pub fn pad_activity(points: &[DailyCount], window: ActivityWindow, today: NaiveDate) -> Vec<ActivityBar> {
    let parsed: Vec<(NaiveDate, u64)> = points
        .iter()
        .filter_map(|p| parse_day(&p.fecha).map(|d| (d, p.cantidad)))
        .collect();

    let days = i64::from(window.days());
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let count = parsed
                .iter()
                .find(|(d, _)| *d == date)
                .map(|(_, c)| *c)
                .unwrap_or(0);
            ActivityBar {
                date,
                count,
                is_today: offset == 0,
            }
        })
        .collect()
}

fn parse_day(fecha: &str) -> Option<NaiveDate> {
    let day = fecha.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Denominator for bar heights: the tallest bar plus headroom, or a fixed
/// fallback when every bar is zero.
pub fn scale_denominator(bars: &[ActivityBar]) -> f64 {
    let max = bars.iter().map(|b| b.count).max().unwrap_or(0);
    let base = if max == 0 {
        EMPTY_SCALE_FALLBACK
    } else {
        max as f64
    };
    base * ACTIVITY_HEADROOM
}

/// Height of a bar as a percentage of the chart area.
pub fn bar_height_percent(count: u64, denominator: f64) -> f64 {
    count as f64 / denominator * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn point(fecha: &str, cantidad: u64) -> DailyCount {
        DailyCount {
            fecha: fecha.to_string(),
            cantidad,
        }
    }

    #[test]
    fn pads_seven_day_window() {
        let points = vec![point("2026-01-01", 3), point("2026-01-05", 2)];
        let bars = pad_activity(&points, ActivityWindow::Week, day("2026-01-07"));

        assert_eq!(bars.len(), 7);
        assert_eq!(bars[0].date, day("2026-01-01"));
        assert_eq!(bars[6].date, day("2026-01-07"));
        let counts: Vec<u64> = bars.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![3, 0, 0, 0, 2, 0, 0]);
        assert!(bars[6].is_today);
        assert!(bars[..6].iter().all(|b| !b.is_today));
    }

    #[test]
    fn pads_thirty_day_window_across_month_boundary() {
        let points = vec![point("2026-02-28", 4), point("2026-03-01", 1)];
        let bars = pad_activity(&points, ActivityWindow::Month, day("2026-03-10"));

        assert_eq!(bars.len(), 30);
        assert_eq!(bars[0].date, day("2026-02-09"));
        assert_eq!(bars[29].date, day("2026-03-10"));
        assert_eq!(bars.iter().map(|b| b.count).sum::<u64>(), 5);
        let feb_28 = bars.iter().find(|b| b.date == day("2026-02-28")).unwrap();
        assert_eq!(feb_28.count, 4);
    }

    #[test]
    fn points_outside_window_are_dropped() {
        let points = vec![point("2025-12-01", 9)];
        let bars = pad_activity(&points, ActivityWindow::Week, day("2026-01-07"));
        assert!(bars.iter().all(|b| b.count == 0));
    }

    #[test]
    fn timestamps_and_duplicates() {
        let points = vec![
            point("2026-01-07T13:45:00", 5),
            point("2026-01-07", 8),
            point("garbage", 99),
        ];
        let bars = pad_activity(&points, ActivityWindow::Week, day("2026-01-07"));
        assert_eq!(bars[6].count, 5);
    }

    #[test]
    fn scale_has_headroom() {
        let points = vec![point("2026-01-07", 8)];
        let bars = pad_activity(&points, ActivityWindow::Week, day("2026-01-07"));
        assert_eq!(scale_denominator(&bars), 10.0);
        assert_eq!(bar_height_percent(8, 10.0), 80.0);
    }

    #[test]
    fn all_zero_uses_fallback_scale() {
        let bars = pad_activity(&[], ActivityWindow::Week, day("2026-01-07"));
        assert_eq!(scale_denominator(&bars), 12.5);
        assert_eq!(bar_height_percent(0, scale_denominator(&bars)), 0.0);
    }

    #[test]
    fn window_from_days() {
        assert_eq!(ActivityWindow::try_from(30), Ok(ActivityWindow::Month));
        assert!(ActivityWindow::try_from(14).is_err());
    }

    #[test]
    fn bar_label_is_day_month() {
        let bar = ActivityBar {
            date: day("2026-01-05"),
            count: 0,
            is_today: false,
        };
        assert_eq!(bar.label(), "05/01");
    }
}
