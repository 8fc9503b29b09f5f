//! Render department statistics as text, delimited CSV or JSON.
//!
//! Rendering is pure; [`write_stats_csv`] is the only function that touches
//! the filesystem, and it renders the whole report before creating the file.

use std::path::{Path, PathBuf};

use crate::error::{ExportError, ExportResult};
use crate::models::DepartmentStats;

/// Human-readable statistics, one block per department.
///
/// All salary figures use two decimals.
pub fn render_stats_text(stats: &[DepartmentStats]) -> String {
    stats
        .iter()
        .map(|s| {
            format!(
                "{}\n\tEmployee count: {}\n\tMean salary: {:.2} (min={:.2}, max={:.2})",
                s.department, s.employee_count, s.mean_salary, s.min_salary, s.max_salary
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn delimiter_byte(delimiter: char) -> u8 {
    if delimiter.is_ascii() {
        delimiter as u8
    } else {
        b';'
    }
}

/// Delimited statistics with a header row.
///
/// Fields are written as they are, never quoted; department names come from
/// delimiter-split roster rows, so they cannot contain the delimiter.
///
/// ```
/// use roster::models::DepartmentStats;
/// use roster::report::render_stats_csv;
///
/// let stats = vec![DepartmentStats {
///     department: "IT".into(),
///     employee_count: 2,
///     min_salary: 1000.0,
///     max_salary: 3000.0,
///     mean_salary: 2000.0,
/// }];
///
/// assert_eq!(
///     render_stats_csv(&stats, ';').unwrap(),
///     "dep_name;employee_cnt;min_salary;max_salary;mean_salary\nIT;2;1000.0;3000.0;2000.0\n"
/// );
/// ```
pub fn render_stats_csv(stats: &[DepartmentStats], delimiter: char) -> ExportResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_byte(delimiter))
        .quote_style(csv::QuoteStyle::Never)
        .has_headers(false)
        .from_writer(Vec::new());

    // Written explicitly so an empty report still has its header row.
    writer.write_record(crate::models::STATS_HEADERS)?;
    for row in stats {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::Io {
        path: PathBuf::from("<memory>"),
        source: e.into_error(),
    })?;
    String::from_utf8(bytes).map_err(|_| ExportError::Encoding)
}

/// Read an exported statistics report back.
pub fn parse_stats_csv(content: &str, delimiter: char) -> ExportResult<Vec<DepartmentStats>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(delimiter))
        .quoting(false)
        .from_reader(content.as_bytes());

    reader
        .deserialize()
        .collect::<Result<Vec<DepartmentStats>, csv::Error>>()
        .map_err(ExportError::from)
}

/// Pretty-printed JSON array of statistics.
pub fn render_stats_json(stats: &[DepartmentStats]) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

/// Write the delimited report to `path`, returning the written path.
pub fn write_stats_csv(
    path: &Path,
    stats: &[DepartmentStats],
    delimiter: char,
) -> ExportResult<PathBuf> {
    let content = render_stats_csv(stats, delimiter)?;
    std::fs::write(path, content).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}
