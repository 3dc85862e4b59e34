use std::path::Path;

/// A contract for a service that performs the first phase:
/// producing the randomized, newline-delimited input file.
pub trait DatasetGenerator {
    fn generate(&self, count: usize, output: &Path) -> anyhow::Result<()>;
}

/// A contract for a service that performs the second phase:
/// turning an input file of records into a sorted output file.
pub trait Sorter {
    fn sort(&self, input: &Path, output: &Path) -> anyhow::Result<()>;
}
