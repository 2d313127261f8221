use crate::core::format::{FormattedBlock, RenderOptions};
use crate::core::io::traits::{MalformedLinePolicy, RelationFile};
use crate::core::models::record::RawRecord;
use csv::{ByteRecord, ReaderBuilder, Trim};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum RelationFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
}

impl RelationFileError {
    /// `true` when the failure came from the underlying reader or writer rather than
    /// from the content of the input.
    pub fn is_io(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::Csv(e) => e.is_io_error(),
            Self::Parse { .. } => false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Line has no protein id")]
    MissingProteinId,
    #[error("Invalid unsigned integer in field {field} (value: '{value}')")]
    InvalidInteger { field: usize, value: String },
    #[error("Field {field} is not valid UTF-8")]
    InvalidUtf8 { field: usize },
}

/// The comma-separated relation format: one protein per line, id first.
pub struct CsvRelationFile;

fn parse_field(record: &ByteRecord, field: usize) -> Result<u32, ParseErrorKind> {
    let bytes = record.get(field).unwrap_or_default();
    let value = std::str::from_utf8(bytes)
        .map_err(|_| ParseErrorKind::InvalidUtf8 { field: field + 1 })?;
    if field == 0 && value.is_empty() {
        return Err(ParseErrorKind::MissingProteinId);
    }
    value.parse().map_err(|_| ParseErrorKind::InvalidInteger {
        field: field + 1,
        value: value.to_string(),
    })
}

fn parse_record(record: &ByteRecord, line: usize) -> Result<RawRecord, ParseErrorKind> {
    let id = parse_field(record, 0)?;
    let chemicals = (1..record.len())
        .map(|field| parse_field(record, field))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RawRecord::new(id, chemicals, line))
}

fn is_blank(record: &ByteRecord) -> bool {
    record.iter().all(<[u8]>::is_empty)
}

impl RelationFile for CsvRelationFile {
    type Error = RelationFileError;

    fn read_from(
        reader: &mut impl BufRead,
        policy: MalformedLinePolicy,
    ) -> Result<Vec<RawRecord>, Self::Error> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        let mut skipped = 0usize;
        let mut row = ByteRecord::new();

        while csv_reader.read_byte_record(&mut row)? {
            let line = row.position().map_or(0, |p| p.line() as usize);
            if is_blank(&row) {
                continue;
            }
            match parse_record(&row, line) {
                Ok(record) => records.push(record),
                Err(kind) => match policy {
                    MalformedLinePolicy::Abort => {
                        return Err(RelationFileError::Parse { line, kind });
                    }
                    MalformedLinePolicy::Skip => {
                        warn!(line, "Skipping malformed input line: {}", kind);
                        skipped += 1;
                    }
                },
            }
        }

        debug!(
            records = records.len(),
            skipped, "Finished reading relation input."
        );
        Ok(records)
    }

    fn write_to(
        blocks: &[FormattedBlock],
        options: &RenderOptions,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let mut current_weight = None;
        for block in blocks {
            if options.weight_headers && current_weight != Some(block.weight) {
                writeln!(writer, "# weight {}", block.weight)?;
                current_weight = Some(block.weight);
            }
            writeln!(writer, "{}", block)?;
        }
        Ok(())
    }
}
