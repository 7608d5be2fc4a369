//! Spreadsheet export of the filtered titles.
//!
//! The row set is built here and handed to a [`TableExporter`]. The default
//! exporter writes a single-sheet workbook:
//!
//! ```text
//! Sheet1
//!   A1  Title
//!   A2  bank crisis today
//!   A3  economy news
//! ```
//!
//! There is no index column. The file is overwritten on every run.

use crate::error::{Error, Result};
use crate::utils::ensure_parent_dir;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

pub const TITLE_HEADER: &str = "Title";
pub const DEFAULT_EXPORT_PATH: &str = "article_titles.xlsx";

/// Single-column table: a header and one row per title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTable {
    pub header: &'static str,
    pub rows: Vec<String>,
}

/// Build the export rows, preserving title order.
pub fn build_title_table(titles: &[String]) -> TitleTable {
    TitleTable {
        header: TITLE_HEADER,
        rows: titles.to_vec(),
    }
}

/// Writes a [`TitleTable`] somewhere.
pub trait TableExporter {
    fn export(&self, table: &TitleTable) -> Result<()>;
}

/// Writes the table to an `.xlsx` workbook at `path`.
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    path: PathBuf,
}

impl XlsxExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_workbook(&self, table: &TitleTable) -> std::result::Result<(), XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Sheet1")?;
        worksheet.write_string_with_format(0, 0, table.header, &header_format)?;
        for (row, title) in (1u32..).zip(&table.rows) {
            worksheet.write_string(row, 0, title)?;
        }
        worksheet.set_column_width(0, 80)?;

        workbook.save(&self.path)
    }
}

impl TableExporter for XlsxExporter {
    #[instrument(level = "info", skip_all, fields(path = %self.path.display(), rows = table.rows.len()))]
    fn export(&self, table: &TitleTable) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        self.write_workbook(table).map_err(|source| Error::Export {
            path: self.path.display().to_string(),
            source,
        })?;
        info!("Wrote title workbook");
        Ok(())
    }
}
