//! Line-oriented address output.

use std::io::Write;

use lospell_expand::contract::{AddressRecordV1, AddressSink};

/// Writes one dotted-decimal address per line, flushing after each so
/// output streams as it is produced.
pub struct LineSink<W: Write> {
    writer: W,
    lines: u64,
}

impl<W: Write> LineSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Number of lines written.
    #[must_use]
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AddressSink for LineSink<W> {
    fn emit(&mut self, record: &AddressRecordV1) -> std::io::Result<()> {
        writeln!(self.writer, "{}", record.address)?;
        self.writer.flush()?;
        self.lines += 1;
        Ok(())
    }
}
