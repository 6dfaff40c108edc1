use std::io::Write;
use std::path::Path;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::error::Error;
use super::record::{substring, RecordFields};

/// Human-readable report for one selected CNAB row.
///
/// Keeps the row together with the positions used to slice it so the rendered
/// output can show the slice highlighted in place.
#[derive(Debug)]
pub struct Report<'a> {
    row: &'a str,
    from: usize,
    to: usize,
    fields: RecordFields,
}

impl<'a> Report<'a> {
    /// Build a report for `row` using a 1-based `from` and exclusive `to`.
    pub fn new(row: &'a str, from: usize, to: usize) -> Self {
        let fields = RecordFields::extract(row, from, to);
        Self {
            row,
            from,
            to,
            fields,
        }
    }

    pub fn fields(&self) -> &RecordFields {
        &self.fields
    }

    /// Write the report block to any sink (stdout, a buffer, a file).
    ///
    /// Highlighted values use inverse video via `colored`, which honors
    /// `NO_COLOR` and can be forced off with `colored::control`.
    pub fn render<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let segment = self
            .fields
            .segment_char()
            .map(String::from)
            .unwrap_or_default();

        let start = self.from.saturating_sub(1);
        let prefix = substring(self.row, 0, start);
        // An empty slice (to < from-1) must not re-print the to..from-1 range
        let suffix = substring(self.row, self.to.max(start), usize::MAX);

        writeln!(writer, "----- CNAB linha do segmento {segment} -----")?;
        writeln!(writer)?;
        writeln!(writer, "  Posição inicial: {}", self.from.to_string().reversed())?;
        writeln!(writer)?;
        writeln!(writer, "  Posição final: {}", self.to.to_string().reversed())?;
        writeln!(writer)?;
        writeln!(writer, "  Item isolado: {}", self.fields.slice().reversed())?;
        writeln!(writer)?;
        writeln!(writer, "  Conteúdo dentro da linha {segment}:")?;
        writeln!(
            writer,
            "  {prefix}{}{suffix}",
            self.fields.slice().reversed()
        )?;
        writeln!(writer)?;
        writeln!(
            writer,
            "  Nome da empresa: {}",
            self.fields.company_name().reversed()
        )?;
        writeln!(writer)?;
        writeln!(
            writer,
            "  Endereço da empresa: {}",
            self.fields.company_address().reversed()
        )?;
        writeln!(writer)?;
        writeln!(writer, "  ----- FIM ------")?;
        Ok(())
    }
}

/// JSON document persisted after each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    pub company_name: String,
    pub company_address: String,
}

impl OutputDocument {
    pub fn from_fields(fields: &RecordFields) -> Self {
        Self {
            company_name: fields.company_name().to_string(),
            company_address: fields.company_address().to_string(),
        }
    }

    /// Persist as UTF-8 2-space pretty JSON, overwriting `path`.
    ///
    /// The write completes before returning; failures propagate to the caller
    /// instead of being swallowed.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let mut file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        file.flush()?;
        log::trace!("Wrote output document to {}", path.display());
        Ok(())
    }
}
