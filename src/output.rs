//! Buffered output for merged regions.
//!
//! Uses itoa for integer formatting to avoid allocation per line.

use crate::bed::BedError;
use crate::interval::MergedInterval;
use std::io::{BufWriter, Write};

/// Buffer size for MergedWriter (256KB).
const DEFAULT_BUFFER_SIZE: usize = 256 * 1024;

/// Tab-separated writer for `chrom start end label` lines.
pub struct MergedWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> MergedWriter<W> {
    /// Create a new MergedWriter with the default buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, output)
    }

    /// Create a new MergedWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write one line from its parts.
    #[inline]
    pub fn write_fields(
        &mut self,
        chrom: &str,
        start: u64,
        end: u64,
        label: &str,
    ) -> Result<(), BedError> {
        self.writer.write_all(chrom.as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer
            .write_all(self.itoa_buf.format(start).as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer.write_all(self.itoa_buf.format(end).as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer.write_all(label.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write a merged region as-is.
    #[inline]
    pub fn write_region(&mut self, region: &MergedInterval) -> Result<(), BedError> {
        self.write_fields(region.chrom(), region.start(), region.end(), &region.label)
    }

    /// Flush the buffer.
    pub fn flush(&mut self) -> Result<(), BedError> {
        self.writer.flush()?;
        Ok(())
    }
}
