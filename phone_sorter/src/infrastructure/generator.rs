use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use phone_sort_model::PhoneNumberGenerator;

use crate::application::ports::DatasetGenerator;

/// An adapter that implements the `DatasetGenerator` port.
///
/// Draws unique, valid phone numbers by rejection sampling and writes
/// them to the input file, one encoded record per line, in draw order.
/// The writer is flushed and closed before control returns, so the
/// sort phase always sees the complete file.
pub struct RandomDatasetGenerator;

impl DatasetGenerator for RandomDatasetGenerator {
    fn generate(&self, count: usize, output: &Path) -> Result<()> {
        let file = File::create(output)
            .with_context(|| format!("Failed to create input file: {:?}", output))?;
        let mut writer = BufWriter::new(file);

        for number in PhoneNumberGenerator::new().take(count) {
            writeln!(writer, "{number}")?;
        }

        writer.flush()?;
        Ok(())
    }
}
