//! Result export: the three-column CSV artifact and a plain-text table.
//!
//! Columns are `Keyword`, `Blog URL` and `Organic Rank`, where the rank
//! renders as `#<position>`, `Not Found` or `Error`.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{RankError, Result};
use crate::rank::RankResult;

/// CSV header row.
pub const CSV_HEADERS: [&str; 3] = ["Keyword", "Blog URL", "Organic Rank"];

/// Default file name for the exported CSV.
pub const DEFAULT_CSV_FILENAME: &str = "keyword_rankings.csv";

/// Render results as CSV: a header row, then one row per result in order.
///
/// Fields containing a comma, double quote, CR or LF are quoted, with
/// embedded quotes doubled. Lines end with `\n`.
pub fn to_csv(results: &[RankResult]) -> String {
    let mut out = String::new();
    push_row(&mut out, &CSV_HEADERS);
    for result in results {
        let rank = result.rank.to_string();
        push_row(&mut out, &[&result.keyword, &result.url, &rank]);
    }
    out
}

/// Write the CSV export to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`RankError::Io`] if the directory or file cannot be written.
pub fn write_csv(path: &Path, results: &[RankResult]) -> Result<()> {
    create_parent_dir(path)?;
    std::fs::write(path, to_csv(results))?;
    tracing::info!(path = %path.display(), rows = results.len(), "CSV written");
    Ok(())
}

/// Write [`to_json`] output to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`RankError::Io`] if the directory or file cannot be written, or
/// [`RankError::Export`] if serialisation fails.
pub fn write_json(path: &Path, results: &[RankResult]) -> Result<()> {
    let json = to_json(results)?;
    create_parent_dir(path)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), rows = results.len(), "JSON written");
    Ok(())
}

/// Write the CSV to `csv_path` and, if given, the JSON to `json_path`.
///
/// An empty result list still produces a header-only CSV (and `[]` JSON).
///
/// # Errors
///
/// Propagates the first failure from [`write_csv`] or [`write_json`].
pub fn write_outputs(
    csv_path: &Path,
    json_path: Option<&Path>,
    results: &[RankResult],
) -> Result<()> {
    write_csv(csv_path, results)?;
    if let Some(json_path) = json_path {
        write_json(json_path, results)?;
    }
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Serialise results as pretty JSON, including lookup error messages.
///
/// # Errors
///
/// Returns [`RankError::Export`] if serialisation fails.
pub fn to_json(results: &[RankResult]) -> Result<String> {
    serde_json::to_string_pretty(results).map_err(|e| RankError::Export(e.to_string()))
}

/// Render results as an aligned plain-text table with a 1-based index column.
pub fn render_table(results: &[RankResult]) -> String {
    let ranks: Vec<String> = results.iter().map(|r| r.rank.to_string()).collect();

    let idx_w = results.len().to_string().len().max(1);
    let kw_w = column_width(CSV_HEADERS[0], results.iter().map(|r| r.keyword.as_str()));
    let url_w = column_width(CSV_HEADERS[1], results.iter().map(|r| r.url.as_str()));
    let rank_w = column_width(CSV_HEADERS[2], ranks.iter().map(String::as_str));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>idx_w$}  {:<kw_w$}  {:<url_w$}  {:<rank_w$}",
        "#", CSV_HEADERS[0], CSV_HEADERS[1], CSV_HEADERS[2]
    );
    let _ = writeln!(
        out,
        "{}  {}  {}  {}",
        "-".repeat(idx_w),
        "-".repeat(kw_w),
        "-".repeat(url_w),
        "-".repeat(rank_w)
    );
    for (i, (result, rank)) in results.iter().zip(&ranks).enumerate() {
        let _ = writeln!(
            out,
            "{:>idx_w$}  {:<kw_w$}  {:<url_w$}  {:<rank_w$}",
            i + 1,
            result.keyword,
            result.url,
            rank
        );
    }
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
