// src/csv.rs
use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::config::options::ExportFormat;
use crate::error::ExportError;
use crate::table::{HEADERS, LinesTable};

/* ---------------- Writing ---------------- */

/// Write the lines table to any writer. Quoting only where needed.
pub fn write_table<W: Write>(
    w: W,
    table: &LinesTable,
    format: ExportFormat,
    include_headers: bool,
) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(format.delim())
        .quote_style(QuoteStyle::Necessary)
        .from_writer(w);

    if include_headers {
        wtr.write_record(HEADERS)?;
    }
    for row in &table.rows {
        wtr.write_record(row.cells())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Same as [`write_table`], into a `String`.
#[cfg(test)]
fn to_export_string(
    table: &LinesTable,
    format: ExportFormat,
    include_headers: bool,
) -> Result<String, ExportError> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, table, format, include_headers)?;
    Ok(String::from_utf8(buf).expect("csv output is built from &str cells"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::NormalizedRow;

    fn table() -> LinesTable {
        let row = |game, a: &str, al: &str, h: &str, hl: &str| NormalizedRow {
            game,
            date: None,
            time: s!(),
            away_team: s!(a),
            away_line: s!(al),
            home_team: s!(h),
            home_line: s!(hl),
        };
        LinesTable {
            rows: vec![row(0, "DEN", "-110", "NYJ", "+120"), row(1, "KC", "-200", "LV", "+170")],
            incomplete: Vec::new(),
        }
    }

    #[test]
    fn csv_with_header() {
        let s = to_export_string(&table(), ExportFormat::Csv, true).unwrap();
        assert_eq!(
            s,
            "Away Team,Money Line Away,Home Team,Money Line Home\nDEN,-110,NYJ,+120\nKC,-200,LV,+170\n"
        );
    }

    #[test]
    fn tsv_without_header() {
        let s = to_export_string(&table(), ExportFormat::Tsv, false).unwrap();
        assert_eq!(s, "DEN\t-110\tNYJ\t+120\nKC\t-200\tLV\t+170\n");
    }

    #[test]
    fn quotes_cells_containing_the_delimiter() {
        let mut t = table();
        t.rows.truncate(1);
        t.rows[0].away_line = s!("-110,EVEN");
        let s = to_export_string(&t, ExportFormat::Csv, false).unwrap();
        assert_eq!(s, "DEN,\"-110,EVEN\",NYJ,+120\n");
    }

    #[test]
    fn empty_table_still_has_header() {
        let s = to_export_string(&LinesTable::default(), ExportFormat::Csv, true).unwrap();
        assert_eq!(s, "Away Team,Money Line Away,Home Team,Money Line Home\n");
    }
}
