use crate::table::Table;
use std::io::Write;

/// Serialize a table as CSV: header row, then one record per row.
/// NULL cells become empty fields; there is no index column.
pub fn encode<W>(table: &Table, writer: W) -> csv::Result<()>
where
    W: Write,
{
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);
    csv.write_record(table.columns())?;
    for row in table.rows() {
        csv.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    csv.flush()?;
    Ok(())
}
