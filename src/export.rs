use std::io::Write;

use clap::ValueEnum;

use crate::clients::{ResultRow, errors::Result};

const CSV_HEADERS: [&str; 4] = ["search_term", "artist_name", "artist_id", "followers_count"];

/// Output format for exported rows
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Comma separated values with a header row
    #[default]
    Csv,
    /// Pretty printed JSON array
    Json,
}

impl Format {
    /// Write `rows` to `writer` in this format
    pub fn write<W: Write>(self, rows: &[ResultRow], writer: W) -> Result<()> {
        match self {
            Format::Csv => write_csv(rows, writer),
            Format::Json => write_json(rows, writer),
        }
    }
}

/// Write rows as CSV. Absent fields become empty cells. The header row is
/// written even when there are no rows.
pub fn write_csv<W: Write>(rows: &[ResultRow], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write rows as a JSON array. Absent fields become `null`.
pub fn write_json<W: Write>(rows: &[ResultRow], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ResultRow> {
        vec![
            ResultRow {
                search_term: "Drake".to_string(),
                artist_name: Some("Drake".to_string()),
                artist_id: Some(130),
                followers_count: Some(500_000),
            },
            ResultRow::empty("xyzzyunknown123"),
        ]
    }

    #[test]
    fn csv_has_header_and_empty_cells() {
        let mut out = Vec::new();
        write_csv(&rows(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "search_term,artist_name,artist_id,followers_count\n\
             Drake,Drake,130,500000\n\
             xyzzyunknown123,,,\n"
        );
    }

    #[test]
    fn csv_quotes_terms_with_commas() {
        let mut out = Vec::new();
        write_csv(&[ResultRow::empty("Crosby, Stills & Nash")], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().nth(1), Some("\"Crosby, Stills & Nash\",,,"));
    }

    #[test]
    fn csv_without_rows_still_has_header() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "search_term,artist_name,artist_id,followers_count\n"
        );
    }

    #[test]
    fn json_uses_null_for_absent_fields() {
        let mut out = Vec::new();
        Format::Json.write(&rows(), &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                {"search_term": "Drake", "artist_name": "Drake", "artist_id": 130, "followers_count": 500_000},
                {"search_term": "xyzzyunknown123", "artist_name": null, "artist_id": null, "followers_count": null}
            ])
        );
    }
}
