use super::model::{NumericColumn, TrackTable};

/// Arithmetic mean of `column` over the rows of `table`.
///
/// Missing cells are skipped. Returns `None` when there is nothing to
/// average: an empty table or a column with no values.
pub fn mean(table: &TrackTable, column: NumericColumn) -> Option<f64> {
    let (sum, count) = table
        .iter()
        .filter_map(|row| column.value(row))
        .fold((0.0_f64, 0usize), |(sum, n), v| (sum + v, n + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Mean engagement figures for a row subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub tracks: usize,
    pub stream: Option<f64>,
    pub views: Option<f64>,
    pub likes: Option<f64>,
}

/// Summarise a non-empty subset; `None` for an empty one.
pub fn summarize(table: &TrackTable) -> Option<Summary> {
    if table.is_empty() {
        return None;
    }
    Some(Summary {
        tracks: table.len(),
        stream: mean(table, NumericColumn::Stream),
        views: mean(table, NumericColumn::Views),
        likes: mean(table, NumericColumn::Likes),
    })
}

/// Format a metric with thousands separators and two decimals,
/// e.g. `1234567.891` → `"1,234,567.89"`.
pub fn format_metric(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}
