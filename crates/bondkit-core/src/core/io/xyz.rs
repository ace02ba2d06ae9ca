use super::traits::CoordinateFile;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub comment: String,
    pub symbols: Vec<String>,
    pub positions: Vec<Point3<f64>>,
}

impl Frame {
    pub fn num_particles(&self) -> usize {
        self.positions.len()
    }
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid particle count on line {line}: '{value}'")]
    InvalidCount { line: usize, value: String },
    #[error("Unexpected end of file: frame declared {expected} particles but only {found} were read")]
    UnexpectedEof { expected: usize, found: usize },
    #[error("Invalid particle record on line {line}: {message}")]
    InvalidAtomLine { line: usize, message: String },
    #[error("Frame {frame} has {found} particles, expected {expected} like the first frame")]
    InconsistentFrameSize {
        frame: usize,
        expected: usize,
        found: usize,
    },
}

/// Multi-frame XYZ coordinates.
///
/// Each frame is a particle count line, a free-form comment line, and one
/// `<symbol> <x> <y> <z>` line per particle. All frames must hold the same
/// number of particles.
pub struct XyzFile;

impl XyzFile {
    fn parse_atom_line(line_num: usize, line: &str) -> Result<(String, Point3<f64>), XyzError> {
        let mut fields = line.split_whitespace();
        let symbol = fields.next().ok_or_else(|| XyzError::InvalidAtomLine {
            line: line_num,
            message: "empty line".to_string(),
        })?;

        let mut coords = [0.0f64; 3];
        for (axis, slot) in ["x", "y", "z"].iter().zip(coords.iter_mut()) {
            let raw = fields.next().ok_or_else(|| XyzError::InvalidAtomLine {
                line: line_num,
                message: format!("missing {} coordinate", axis),
            })?;
            *slot = raw.parse().map_err(|_| XyzError::InvalidAtomLine {
                line: line_num,
                message: format!("invalid {} coordinate '{}'", axis, raw),
            })?;
        }

        Ok((
            symbol.to_string(),
            Point3::new(coords[0], coords[1], coords[2]),
        ))
    }
}

impl CoordinateFile for XyzFile {
    type Frame = Frame;
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Frame>, XyzError> {
        let mut frames: Vec<Frame> = Vec::new();
        let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

        loop {
            let mut count_line = None;
            for (line_num, line) in lines.by_ref() {
                let line = line?;
                if !line.trim().is_empty() {
                    count_line = Some((line_num, line));
                    break;
                }
            }
            let Some((line_num, count_line)) = count_line else {
                break;
            };

            let count: usize = count_line.trim().parse().map_err(|_| XyzError::InvalidCount {
                line: line_num,
                value: count_line.trim().to_string(),
            })?;

            let comment = match lines.next() {
                Some((_, line)) => line?,
                None => {
                    return Err(XyzError::UnexpectedEof {
                        expected: count,
                        found: 0,
                    });
                }
            };

            let mut frame = Frame {
                comment: comment.trim().to_string(),
                symbols: Vec::with_capacity(count),
                positions: Vec::with_capacity(count),
            };
            for found in 0..count {
                let (line_num, line) = lines.next().ok_or(XyzError::UnexpectedEof {
                    expected: count,
                    found,
                })?;
                let (symbol, position) = Self::parse_atom_line(line_num, &line?)?;
                frame.symbols.push(symbol);
                frame.positions.push(position);
            }

            if let Some(first) = frames.first() {
                if first.num_particles() != count {
                    return Err(XyzError::InconsistentFrameSize {
                        frame: frames.len(),
                        expected: first.num_particles(),
                        found: count,
                    });
                }
            }
            frames.push(frame);
        }

        Ok(frames)
    }

    fn write_to(frames: &[Frame], writer: &mut impl Write) -> Result<(), XyzError> {
        for frame in frames {
            writeln!(writer, "{}", frame.num_particles())?;
            writeln!(writer, "{}", frame.comment)?;
            for (i, pos) in frame.positions.iter().enumerate() {
                let symbol = frame.symbols.get(i).map(String::as_str).unwrap_or("X");
                writeln!(
                    writer,
                    "{:<4} {:>14.8} {:>14.8} {:>14.8}",
                    symbol, pos.x, pos.y, pos.z
                )?;
            }
        }
        Ok(())
    }
}
