//! Payloads handed to an external chart renderer.
//!
//! Drawing real charts is not this crate's job. These types carry exactly
//! what a renderer needs: a Gantt chart per discipline and one
//! waiting-vs-turnaround comparison across disciplines. A plain-text Gantt
//! strip is provided for terminals.

use serde::{Deserialize, Serialize};

use crate::metrics::MetricsTable;
use crate::models::Timeline;

/// Title of the comparison plot.
pub const COMPARISON_TITLE: &str = "Waiting Time vs Turnaround Time for Scheduling Algorithms";

/// One horizontal bar on a Gantt chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttBar {
    /// Process ID shown on the bar.
    pub label: String,
    /// Left edge on the time axis.
    pub start: i64,
    /// Bar length in ticks.
    pub duration: i64,
}

/// A single-row Gantt chart for one discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttChart {
    /// Discipline title.
    pub title: String,
    /// Bars in timeline order.
    pub bars: Vec<GanttBar>,
    /// Upper bound of the time axis: `max(start + duration)`.
    pub horizon: i64,
}

impl GanttChart {
    /// Builds a chart from a timeline, titled after its discipline.
    pub fn from_timeline(timeline: &Timeline) -> Self {
        Self {
            title: timeline.discipline.title().to_string(),
            bars: timeline
                .segments
                .iter()
                .map(|s| GanttBar {
                    label: s.process_id.clone(),
                    start: s.start,
                    duration: s.burst,
                })
                .collect(),
            horizon: timeline.end(),
        }
    }

    /// Renders the chart as a fixed-width text strip.
    ///
    /// Each bar opens with `|` followed by as much of its label as fits,
    /// padded with `=`; idle time is `.`. A second line marks 0 and the
    /// horizon.
    pub fn render_text(&self, width: usize) -> String {
        let width = width.max(1);
        let horizon = self.horizon.max(1);
        let col = |t: i64| ((t.max(0) as u128 * width as u128) / horizon as u128) as usize;

        let mut strip = vec!['.'; width];
        for bar in &self.bars {
            let a = col(bar.start).min(width - 1);
            let b = col(bar.start + bar.duration).clamp(a + 1, width);
            strip[a..b].fill('=');
            strip[a] = '|';
            for (c, ch) in (a + 1..b).zip(bar.label.chars()) {
                strip[c] = ch;
            }
        }

        let end = self.horizon.to_string();
        let pad = width.saturating_sub(1 + end.len());
        format!(
            "{}\n{}\n0{}{}",
            self.title,
            strip.into_iter().collect::<String>(),
            " ".repeat(pad),
            end
        )
    }
}

/// One (waiting, turnaround) point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    /// Process the point belongs to.
    pub process_id: String,
    /// X coordinate.
    pub waiting: i64,
    /// Y coordinate.
    pub turnaround: i64,
}

/// One line on the comparison plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSeries {
    /// Legend label (discipline title).
    pub label: String,
    /// Points in the metrics table's order.
    pub points: Vec<ComparisonPoint>,
}

/// Waiting-vs-turnaround plot across disciplines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Always [`COMPARISON_TITLE`].
    pub title: String,
    /// One series per discipline.
    pub series: Vec<ComparisonSeries>,
}

impl Comparison {
    /// Builds one series per `(label, metrics)` pair.
    pub fn from_runs<'a>(runs: impl IntoIterator<Item = (&'a str, &'a MetricsTable)>) -> Self {
        let series = runs
            .into_iter()
            .map(|(label, metrics)| ComparisonSeries {
                label: label.to_string(),
                points: metrics
                    .iter()
                    .map(|e| ComparisonPoint {
                        process_id: e.process_id.clone(),
                        waiting: e.waiting,
                        turnaround: e.turnaround,
                    })
                    .collect(),
            })
            .collect();
        Self {
            title: COMPARISON_TITLE.to_string(),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Discipline, Segment};

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new(Discipline::Fcfs);
        t.push(Segment::new("P1", 0, 5));
        t.push(Segment::new("P2", 5, 3));
        t
    }

    #[test]
    fn test_gantt_from_timeline() {
        let chart = GanttChart::from_timeline(&sample_timeline());
        assert_eq!(chart.title, "FCFS");
        assert_eq!(chart.horizon, 8);
        assert_eq!(chart.bars[1].label, "P2");
        assert_eq!(chart.bars[1].start, 5);
        assert_eq!(chart.bars[1].duration, 3);
    }

    #[test]
    fn test_render_text_one_column_per_tick() {
        let chart = GanttChart::from_timeline(&sample_timeline());
        let text = chart.render_text(8);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "FCFS");
        assert_eq!(lines[1], "|P1==|P2");
        assert_eq!(lines[2], "0      8");
    }

    #[test]
    fn test_render_text_idle_gap() {
        let mut t = Timeline::new(Discipline::Sjf);
        t.push(Segment::new("A", 2, 2));
        let text = GanttChart::from_timeline(&t).render_text(4);
        assert_eq!(text.lines().nth(1), Some("..|A"));
    }

    #[test]
    fn test_render_text_short_bars_still_visible() {
        let mut t = Timeline::new(Discipline::RoundRobin);
        t.push(Segment::new("P1", 0, 1));
        t.push(Segment::new("P2", 1, 99));
        let text = GanttChart::from_timeline(&t).render_text(10);
        assert!(text.lines().nth(1).unwrap().starts_with('|'));
    }

    #[test]
    fn test_comparison_from_runs() {
        let mut a = MetricsTable::new();
        a.upsert("P1", 0, 5);
        a.upsert("P2", 4, 7);
        let mut b = MetricsTable::new();
        b.upsert("P1", 1, 2);

        let cmp = Comparison::from_runs([("FCFS", &a), ("SJF", &b)]);
        assert_eq!(cmp.title, COMPARISON_TITLE);
        assert_eq!(cmp.series.len(), 2);
        assert_eq!(cmp.series[0].label, "FCFS");
        assert_eq!(cmp.series[0].points[1].waiting, 4);
        assert_eq!(cmp.series[1].points[0].turnaround, 2);
    }
}
