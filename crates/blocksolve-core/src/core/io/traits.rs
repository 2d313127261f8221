use crate::core::format::{FormattedBlock, RenderOptions};
use crate::core::models::record::RawRecord;
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// What a reader does with a line it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedLinePolicy {
    /// Stop at the first malformed line and report it.
    #[default]
    Abort,
    /// Log a warning naming the line and continue with the next one.
    Skip,
}

/// Defines the interface for reading a protein→chemical relation and writing the
/// discovered blocks.
pub trait RelationFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads raw protein records from a buffered reader, in input order.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure, or on the first malformed line when `policy` is
    /// [`MalformedLinePolicy::Abort`].
    fn read_from(
        reader: &mut impl BufRead,
        policy: MalformedLinePolicy,
    ) -> Result<Vec<RawRecord>, Self::Error>;

    /// Writes formatted blocks, one per line, in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        blocks: &[FormattedBlock],
        options: &RenderOptions,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads raw protein records from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        policy: MalformedLinePolicy,
    ) -> Result<Vec<RawRecord>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, policy)
    }

    /// Writes formatted blocks to a file path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        blocks: &[FormattedBlock],
        options: &RenderOptions,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(blocks, options, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
