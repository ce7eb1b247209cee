//! Output formatting module for Ganttline
//!
//! Provides table formatting and the text Gantt chart for CLI output.

use ganttline_core::{
    ALL_ITEMS_LABEL, Bucket, RowLayout, TimeSpan, Timeline, ZoomLevel, marker_fraction,
};

/// Smallest total chart width that still leaves room for bars
pub const MIN_CHART_WIDTH: u16 = 20;

/// Maximum width for the label area of the chart
const MAX_LABEL_WIDTH: usize = 30;

/// Maximum width for the label column of tables before truncation
const MAX_TITLE_WIDTH: usize = 30;

/// Message shown when there is nothing to lay out
const EMPTY_MESSAGE: &str = "No items to display.";

const BAR_CHAR: char = '\u{2588}';
const TODAY_CHAR: char = '|';

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Format rows into an aligned table with a dashed separator under the header.
fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .max()
                .unwrap_or(0)
                .max(h.len())
        })
        .collect();

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render(headers.iter().map(|h| h.to_string()).collect()));
    lines.push(render(widths.iter().map(|w| "-".repeat(*w)).collect()));
    for row in rows {
        lines.push(render(row.clone()));
    }
    lines.join("\n")
}

fn format_span_line(span: &TimeSpan, zoom: ZoomLevel, bucket_count: usize) -> String {
    format!(
        "Span: {} .. {} ({} days), zoom: {}, {} buckets",
        span.min,
        span.max,
        span.days(),
        zoom,
        bucket_count
    )
}

/// Format buckets as a numbered table.
///
/// Produces output in the format:
/// ```text
/// Span: 2024-02-01 .. 2024-02-20 (19 days), zoom: week, 3 buckets
///
/// #  Label  Start
/// -  -----  ----------
/// 1  1/2    2024-02-01
/// ```
pub fn format_bucket_table(span: &TimeSpan, zoom: ZoomLevel, buckets: &[Bucket]) -> String {
    let rows: Vec<Vec<String>> = buckets
        .iter()
        .enumerate()
        .map(|(i, b)| vec![(i + 1).to_string(), b.label.clone(), b.start.to_string()])
        .collect();

    format!(
        "{}\n\n{}",
        format_span_line(span, zoom, buckets.len()),
        format_table(&["#", "Label", "Start"], &rows)
    )
}

/// Format a timeline as one table per group.
///
/// Left and width are fractions of the span, printed to three decimals.
pub fn format_layout_table(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut sections = vec![format_span_line(
        &timeline.span,
        timeline.zoom,
        timeline.buckets.len(),
    )];
    if let Some(marker) = timeline.today_marker {
        sections.push(format!("Today: {:.3}", marker));
    }

    for group in &timeline.groups {
        let rows: Vec<Vec<String>> = group
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.item.id.clone(),
                    truncate(&row.item.label, MAX_TITLE_WIDTH),
                    row.item.start_date.to_string(),
                    row.item.end_date.to_string(),
                    format!("{:.3}", row.position.left),
                    format!("{:.3}", row.position.width),
                ]
            })
            .collect();

        sections.push(format!(
            "\n{} ({})\n{}",
            group.label,
            group.rows.len(),
            format_table(&["ID", "Label", "Start", "End", "Left", "Width"], &rows)
        ));
    }

    sections.join("\n")
}

/// Column geometry of the text chart.
struct ChartGeometry {
    /// Width of the label area on the left
    label_width: usize,
    /// Width available for the bars
    bar_width: usize,
}

impl ChartGeometry {
    fn new(width: u16) -> Self {
        let width = width as usize;
        let label_width = MAX_LABEL_WIDTH.min(width / 3);
        let bar_width = width.saturating_sub(label_width).saturating_sub(1);
        Self {
            label_width,
            bar_width,
        }
    }

    /// Column of a fraction along the bar area.
    fn column(&self, fraction: f64) -> usize {
        ((fraction * self.bar_width as f64).round() as usize).min(self.bar_width)
    }
}

/// A bucket's column range in the chart header.
struct BucketColumn<'a> {
    label: &'a str,
    start: usize,
    end: usize,
}

fn bucket_columns<'a>(timeline: &'a Timeline, geo: &ChartGeometry) -> Vec<BucketColumn<'a>> {
    let starts: Vec<usize> = timeline
        .buckets
        .iter()
        .map(|b| geo.column(marker_fraction(b.start, &timeline.span).unwrap_or(0.0)))
        .collect();

    timeline
        .buckets
        .iter()
        .enumerate()
        .filter_map(|(i, bucket)| {
            let start = starts[i];
            let end = starts.get(i + 1).copied().unwrap_or(geo.bar_width);
            (end > start).then_some(BucketColumn {
                label: &bucket.label,
                start,
                end,
            })
        })
        .collect()
}

/// Header line with bucket labels centered in their columns.
fn build_date_header(columns: &[BucketColumn<'_>], geo: &ChartGeometry) -> String {
    let mut header_chars = vec![' '; geo.bar_width];

    for col in columns {
        let col_width = col.end - col.start;
        let label_len = col.label.chars().count();

        if col_width >= label_len {
            let padding = (col_width - label_len) / 2;
            for (i, c) in col.label.chars().enumerate() {
                header_chars[col.start + padding + i] = c;
            }
        } else {
            // Column too narrow: show as much of the label as fits
            for (i, c) in col.label.chars().take(col_width).enumerate() {
                header_chars[col.start + i] = c;
            }
        }
    }

    format!(
        "{}{}",
        " ".repeat(geo.label_width),
        header_chars.iter().collect::<String>()
    )
}

/// Separator line with grid markers at bucket boundaries.
fn build_separator(columns: &[BucketColumn<'_>], geo: &ChartGeometry) -> String {
    let mut sep_chars = vec!['\u{2500}'; geo.bar_width];

    for col in columns {
        if col.start > 0 && col.start < geo.bar_width {
            sep_chars[col.start] = '\u{253C}';
        }
    }
    if let Some(first) = sep_chars.first_mut() {
        *first = '\u{251C}';
    }
    if geo.bar_width > 1 {
        sep_chars[geo.bar_width - 1] = '\u{2524}';
    }

    format!(
        "{}{}",
        " ".repeat(geo.label_width),
        sep_chars.iter().collect::<String>()
    )
}

/// One item: short id and label, then its bar.
fn build_item_line(row: &RowLayout, today_col: Option<usize>, geo: &ChartGeometry) -> String {
    let short_id: String = row.item.id.chars().take(6).collect();
    let label = truncate(
        &format!("{} {}", short_id, row.item.label),
        geo.label_width.saturating_sub(1),
    );

    let mut bar_chars = vec![' '; geo.bar_width];
    if let Some(col) = today_col {
        bar_chars[col] = TODAY_CHAR;
    }
    let (start, end) = row.position.to_columns(geo.bar_width as u16);
    for c in &mut bar_chars[start as usize..end as usize] {
        *c = BAR_CHAR;
    }

    format!(
        "{:<width$}{}",
        label,
        bar_chars.iter().collect::<String>(),
        width = geo.label_width
    )
}

/// Draw a timeline as a text Gantt chart `width` columns wide.
///
/// Layout:
/// ```text
///             1/2    8/2  15/2
///           ├──────┼──────┼────┤
/// A Alpha   █████████  |
/// B Beta        ███████████████
/// ```
///
/// Groups other than the implicit "All Items" group get a heading line.
/// A `|` marks today when it falls inside the span.
pub fn format_chart(timeline: &Timeline, width: u16) -> String {
    if timeline.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let geo = ChartGeometry::new(width);
    let columns = bucket_columns(timeline, &geo);
    let today_col = timeline
        .today_marker
        .filter(|_| geo.bar_width > 0)
        .map(|m| geo.column(m).min(geo.bar_width - 1));

    let mut lines = vec![
        build_date_header(&columns, &geo),
        build_separator(&columns, &geo),
    ];

    let show_headings = !(timeline.groups.len() == 1 && timeline.groups[0].label == ALL_ITEMS_LABEL);
    for group in &timeline.groups {
        if show_headings {
            lines.push(format!("{} ({})", group.label, group.rows.len()));
        }
        for row in &group.rows {
            lines.push(build_item_line(row, today_col, &geo));
        }
    }

    if today_col.is_some() {
        lines.push(format!("{}{} today", " ".repeat(geo.label_width), TODAY_CHAR));
    }

    lines.join("\n")
}
