use std::time::Instant;

use super::ports::{DatasetGenerator, Sorter};
use crate::config::AppConfig;

/// The main application service that orchestrates the two phases.
/// It is generic over the DatasetGenerator and Sorter traits, allowing
/// for dependency injection.
pub struct PhoneSorterService<G: DatasetGenerator, S: Sorter> {
    generator: G,
    sorter: S,
}

impl<G: DatasetGenerator, S: Sorter> PhoneSorterService<G, S> {
    /// Creates a new service with concrete implementations of the ports.
    pub fn new(generator: G, sorter: S) -> Self {
        Self { generator, sorter }
    }

    /// Executes the whole pipeline: generate the input file, then sort it.
    ///
    /// The phases run strictly one after the other; the input file is
    /// flushed and closed before the sorter opens it.
    pub fn run(&self, config: &AppConfig) -> anyhow::Result<()> {
        tracing::info!("Creating input file...");
        let timer = Instant::now();
        self.generator.generate(config.count, &config.input_path)?;
        tracing::info!(
            "Done. Generated {} records in {:.3} s",
            config.count,
            timer.elapsed().as_secs_f64()
        );

        tracing::info!("Sorting with the {} method...", config.method);
        let timer = Instant::now();
        self.sorter.sort(&config.input_path, &config.output_path)?;
        tracing::info!("Done. Sorted in {:.3} s", timer.elapsed().as_secs_f64());

        Ok(())
    }
}
