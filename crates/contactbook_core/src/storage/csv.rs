//! CSV import and export of the whole roster.
//!
//! # Responsibility
//! - Read a header-led CSV file into raw contact records.
//! - Write the roster as CSV with the same columns.
//!
//! # Invariants
//! - Columns are matched by header name; unknown or repeated columns are
//!   structural errors.
//! - An absent required column yields a missing-field error; an empty cell
//!   yields that field's constraint error.
//! - Import goes through `assemble_roster`, so one bad row rejects the file.

use crate::model::roster::Roster;
use crate::storage::codec::{assemble_roster, LoadError};
use crate::storage::record::{RawContactRecord, RawScore};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub const CSV_COLUMNS: [&str; 9] = [
    "name",
    "phone",
    "email",
    "address",
    "telegram",
    "github",
    "tags",
    "assignment",
    "score",
];
const TAG_SEPARATOR: &str = ";";

/// Failure to move the roster to or from a CSV file.
#[derive(Debug)]
pub enum TransferError {
    Io { path: PathBuf, source: io::Error },
    Load { path: PathBuf, source: LoadError },
}

impl TransferError {
    /// Load failure behind an import error, if any.
    pub fn load_error(&self) -> Option<&LoadError> {
        match self {
            Self::Load { source, .. } => Some(source),
            Self::Io { .. } => None,
        }
    }
}

impl Display for TransferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not access `{}`: {source}", path.display())
            }
            Self::Load { path, source } => match source {
                LoadError::Record { position, .. } => write!(
                    f,
                    "could not import `{}` (row {}): {source}",
                    path.display(),
                    position + 1
                ),
                _ => write!(f, "could not import `{}`: {source}", path.display()),
            },
        }
    }
}

impl Error for TransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Load { source, .. } => Some(source),
        }
    }
}

/// Reads and validates a CSV file into a new roster.
pub fn import_roster_file(path: &Path) -> Result<Roster, TransferError> {
    let text = std::fs::read_to_string(path).map_err(|source| TransferError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = import_roster(&text).map_err(|source| TransferError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "event=csv_import module=storage status=ok count={}",
        roster.len()
    );
    Ok(roster)
}

/// Writes the roster to a CSV file, creating parent directories.
pub fn export_roster_file(roster: &Roster, path: &Path) -> Result<(), TransferError> {
    let to_io_error = |source| TransferError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_io_error)?;
    }
    std::fs::write(path, export_roster(roster)).map_err(to_io_error)?;
    info!(
        "event=csv_export module=storage status=ok count={}",
        roster.len()
    );
    Ok(())
}

/// Parses CSV text and validates it into a roster.
pub fn import_roster(text: &str) -> Result<Roster, LoadError> {
    let records = records_from_csv(text)?;
    assemble_roster(&records)
}

/// Parses CSV text into raw records without validating field values.
///
/// A leading byte-order mark is ignored.
pub fn records_from_csv(text: &str) -> Result<Vec<RawContactRecord>, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = parse_rows(text)?.into_iter();
    let Some(header) = rows.next() else {
        return Err(LoadError::Structural("CSV file has no header row".to_string()));
    };
    let columns = map_header(&header)?;

    rows.enumerate()
        .map(|(row, cells)| {
            if cells.len() != columns.len() {
                warn!(
                    "event=csv_import module=storage status=error kind=structural row={}",
                    row + 1
                );
                return Err(LoadError::Structural(format!(
                    "row {} has {} fields, expected {}",
                    row + 1,
                    cells.len(),
                    columns.len()
                )));
            }
            Ok(record_from_cells(&columns, cells))
        })
        .collect()
}

/// Renders the roster as CSV with a header row.
pub fn export_roster(roster: &Roster) -> String {
    let mut csv = CSV_COLUMNS.join(",");
    csv.push('\n');

    for contact in roster.iter() {
        let record = RawContactRecord::from_contact(contact);
        let tags = record.tags.join(TAG_SEPARATOR);
        let score = record
            .score
            .map(|score| match score {
                RawScore::Number(value) => value.to_string(),
                RawScore::Text(value) => value,
            })
            .unwrap_or_default();
        let cells = [
            record.name.unwrap_or_default(),
            record.phone.unwrap_or_default(),
            record.email.unwrap_or_default(),
            record.address.unwrap_or_default(),
            record.telegram.unwrap_or_default(),
            record.github.unwrap_or_default(),
            tags,
            record.assignment.unwrap_or_default(),
            score,
        ];
        let line = cells
            .iter()
            .map(|cell| escape_csv_field(cell))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }

    csv
}

fn map_header(header: &[String]) -> Result<Vec<&'static str>, LoadError> {
    let mut columns: Vec<&'static str> = Vec::with_capacity(header.len());
    for raw in header {
        let name = raw.trim().to_ascii_lowercase();
        let column = CSV_COLUMNS
            .iter()
            .copied()
            .find(|known| *known == name)
            .ok_or_else(|| LoadError::Structural(format!("unknown CSV column `{}`", raw.trim())))?;
        if columns.contains(&column) {
            return Err(LoadError::Structural(format!(
                "CSV column `{column}` appears more than once"
            )));
        }
        columns.push(column);
    }
    Ok(columns)
}

fn record_from_cells(columns: &[&'static str], cells: Vec<String>) -> RawContactRecord {
    let mut record = RawContactRecord::default();
    for (column, cell) in columns.iter().zip(cells) {
        match *column {
            "name" => record.name = Some(cell),
            "phone" => record.phone = Some(cell),
            "email" => record.email = Some(cell),
            "address" => record.address = Some(cell),
            "telegram" => record.telegram = Some(cell),
            "github" => record.github = Some(cell),
            "tags" => {
                record.tags = cell
                    .split(TAG_SEPARATOR)
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "assignment" => record.assignment = non_blank(cell),
            "score" => record.score = non_blank(cell).map(RawScore::Text),
            _ => {}
        }
    }
    record
}

fn non_blank(cell: String) -> Option<String> {
    if cell.trim().is_empty() {
        None
    } else {
        Some(cell)
    }
}

/// Splits CSV text into rows of cells.
///
/// Supports double-quoted fields with `""` escapes and embedded separators or
/// line breaks. Blank lines are skipped.
fn parse_rows(text: &str) -> Result<Vec<Vec<String>>, LoadError> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut cell_started = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                other => cell.push(other),
            }
            continue;
        }

        match c {
            '"' if !cell_started => {
                in_quotes = true;
                cell_started = true;
            }
            ',' => {
                row.push(std::mem::take(&mut cell));
                cell_started = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                finish_row(&mut rows, &mut row, &mut cell);
                cell_started = false;
            }
            other => {
                cell.push(other);
                cell_started = true;
            }
        }
    }

    if in_quotes {
        return Err(LoadError::Structural(
            "CSV file ends inside a quoted field".to_string(),
        ));
    }
    finish_row(&mut rows, &mut row, &mut cell);
    Ok(rows)
}

fn finish_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, cell: &mut String) {
    if row.is_empty() && cell.trim().is_empty() {
        cell.clear();
        return;
    }
    row.push(std::mem::take(cell));
    rows.push(std::mem::take(row));
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
