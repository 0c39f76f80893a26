//! CSV table builder shared by every tabular target.
//!
//! Rows are written through one `csv::Writer` with minimal quoting and `\r\n`
//! record terminators. The writer is not flexible, so a row with a different
//! column count than the header is an error instead of a malformed file.

use crate::Error;

pub(crate) struct CsvTable {
    writer: csv::Writer<Vec<u8>>,
}

impl CsvTable {
    pub(crate) fn new(headers: &[&str]) -> Result<Self, Error> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());
        writer.write_record(headers)?;
        Ok(Self { writer })
    }

    pub(crate) fn row<I, T>(&mut self, fields: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(fields)?;
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<String, Error> {
        let bytes = self
            .writer
            .into_inner()
            .map_err(|e| Error::Csv(e.into_error().into()))?;
        Ok(String::from_utf8(bytes)?)
    }
}
