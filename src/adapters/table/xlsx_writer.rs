//! XLSX Result Writer - Implementation of ResultWriter for `.xlsx` workbooks.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::domain::analysis::RankedTable;
use crate::ports::{DatasetError, ResultWriter, TableFormat};

/// Writes the ranked table to a single worksheet.
///
/// The label column stays text. Criteria cells that parse as finite numbers
/// are stored as numbers, as are the score and rank.
#[derive(Debug, Clone, Default)]
pub struct XlsxResultWriter;

impl XlsxResultWriter {
    /// Creates a new XLSX writer.
    pub fn new() -> Self {
        Self
    }

    fn fill(sheet: &mut Worksheet, table: &RankedTable) -> Result<(), XlsxError> {
        for (col, header) in table.headers.iter().enumerate() {
            sheet.write_string(0, column(col)?, header)?;
        }

        for (i, row) in table.rows.iter().enumerate() {
            let r = u32::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col, field) in row.fields.iter().enumerate() {
                match field.trim().parse::<f64>() {
                    Ok(n) if col > 0 && n.is_finite() => sheet.write_number(r, column(col)?, n)?,
                    _ => sheet.write_string(r, column(col)?, field)?,
                };
            }
            let next = row.fields.len();
            sheet.write_number(r, column(next)?, row.score)?;
            sheet.write_number(r, column(next + 1)?, row.rank as f64)?;
        }
        Ok(())
    }
}

fn column(index: usize) -> Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

impl ResultWriter for XlsxResultWriter {
    fn write(&self, path: &Path, table: &RankedTable) -> Result<(), DatasetError> {
        let mut workbook = Workbook::new();
        Self::fill(workbook.add_worksheet(), table)
            .map_err(|e| DatasetError::io(path, e.to_string()))?;
        workbook
            .save(path)
            .map_err(|e| DatasetError::io(path, e.to_string()))
    }

    fn format(&self) -> TableFormat {
        TableFormat::Xlsx
    }
}
