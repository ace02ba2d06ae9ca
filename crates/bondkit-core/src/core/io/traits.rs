use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing coordinate file formats.
///
/// A coordinate file holds one or more frames of particle positions.
/// Implementors handle format-specific parsing and serialization.
pub trait CoordinateFile {
    /// The frame type produced by the format.
    type Frame;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads every frame from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Self::Frame>, Self::Error>;

    /// Writes frames to a writer in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(frames: &[Self::Frame], writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads every frame from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self::Frame>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes frames to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(frames: &[Self::Frame], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(frames, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
