//! Plain-text rendering for the terminal.

use std::io::{self, Write};

use crate::report::EdaReport;
use crate::report::format::thousands;
use crate::report::sections::TableView;

const RULE_WIDTH: usize = 70;

fn write_table<W: Write>(out: &mut W, table: &TableView) -> io::Result<()> {
    if let Some(caption) = &table.caption {
        writeln!(out, "{caption}")?;
    }
    if table.rows.is_empty() {
        writeln!(out, "  (no rows)")?;
        return Ok(());
    }

    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |values: Vec<&str>| {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| {
                let pad = w.saturating_sub(v.chars().count());
                format!("{v}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(out, "  {}", line(table.headers.clone()))?;
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    writeln!(out, "  {:-<total$}", "")?;
    for row in &table.rows {
        writeln!(out, "  {}", line(row.iter().map(String::as_str).collect()))?;
    }
    Ok(())
}

pub fn render_console<W: Write>(report: &EdaReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Anime EDA Report")?;
    writeln!(out, "{:=<RULE_WIDTH$}", "")?;
    writeln!(out, "Source:    {}", report.source)?;
    writeln!(out, "Generated: {}", report.generated_at)?;
    writeln!(
        out,
        "Rows:      {}",
        thousands(i64::try_from(report.total_rows).unwrap_or(i64::MAX))
    )?;

    for section in report.sections() {
        writeln!(out)?;
        writeln!(out, "{}", section.title)?;
        writeln!(out, "{:-<RULE_WIDTH$}", "")?;
        for (i, table) in section.tables.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write_table(out, table)?;
        }
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_alignment() {
        let table = TableView {
            caption: Some("Types".to_string()),
            headers: vec!["Type", "Count"],
            rows: vec![
                vec!["TV".to_string(), "3,787".to_string()],
                vec!["Movie".to_string(), "2,348".to_string()],
            ],
            highlight: None,
        };

        let mut buf = Vec::new();
        write_table(&mut buf, &table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Types");
        assert_eq!(lines[1], "  Type   Count");
        assert_eq!(lines[2], "  ------------");
        assert_eq!(lines[3], "  TV     3,787");
        assert_eq!(lines[4], "  Movie  2,348");
    }

    #[test]
    fn test_empty_table() {
        let table = TableView {
            caption: None,
            headers: vec!["Name"],
            rows: Vec::new(),
            highlight: None,
        };
        let mut buf = Vec::new();
        write_table(&mut buf, &table).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "  (no rows)\n");
    }

    #[test]
    fn test_long_cells_are_printed_whole() {
        let long = "Kono Subarashii Sekai ni Shukufuku wo! Kurenai Densetsu".to_string();
        let table = TableView {
            caption: None,
            headers: vec!["Name"],
            rows: vec![vec![long.clone()]],
            highlight: None,
        };

        let mut buf = Vec::new();
        write_table(&mut buf, &table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().last(), Some(format!("  {long}").as_str()));
    }
}
