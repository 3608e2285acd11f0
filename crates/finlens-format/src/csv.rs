//! CSV output format.

use std::io::Write;

use finlens_types::{ChartKind, Series};

use crate::{ChartRow, FormatError, Formatter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a label if it contains the delimiter or a quote.
    fn field(&self, value: &str) -> String {
        if value.contains(self.delimiter) || value.contains('"') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &Series,
        chart: ChartKind,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            if chart.needs_ohlc() {
                writeln!(writer, "timestamp{d}label{d}open{d}high{d}low{d}close{d}volume")?;
            } else {
                writeln!(writer, "timestamp{d}label{d}close{d}volume")?;
            }
        }

        for row in ChartRow::rows(series, chart) {
            let timestamp = row.timestamp.format(TIMESTAMP_FORMAT);
            let label = self.field(row.label);
            match (row.open, row.high, row.low) {
                (Some(open), Some(high), Some(low)) => writeln!(
                    writer,
                    "{timestamp}{d}{label}{d}{open}{d}{high}{d}{low}{d}{}{d}{}",
                    row.close, row.volume
                )?,
                _ => writeln!(
                    writer,
                    "{timestamp}{d}{label}{d}{}{d}{}",
                    row.close, row.volume
                )?,
            }
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
