use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use phone_sort_model::{BitSet, PhoneNumber};

use crate::application::ports::Sorter;

// --- Comparison sort ---

/// An adapter that implements the `Sorter` port with an ordered set.
///
/// Every record is parsed (which enforces the numbering plan), then its
/// canonical text goes into a `BTreeSet<String>`. Because the encoding
/// is fixed-width and zero-padded, lexicographic order over the set
/// equals numeric order, and emitting the set in iteration order yields
/// the sorted output. Duplicate records collapse via set semantics.
pub struct TreeSetSorter;

impl Sorter for TreeSetSorter {
    fn sort(&self, input: &Path, output: &Path) -> Result<()> {
        let mut records = BTreeSet::new();
        for line in open_input(input)?.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let number: PhoneNumber = line
                .parse()
                .with_context(|| format!("Invalid record in {:?}", input))?;
            records.insert(number.to_string());
        }

        let mut writer = create_output(output)?;
        for record in &records {
            writeln!(writer, "{record}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

// --- Bitmap sort ---

/// An adapter that implements the `Sorter` port with an existence array.
///
/// One bit per possible number in the domain: marking a record sets bit
/// `value`, and a scan of the array in increasing (word, offset) order
/// recovers the records in ascending numeric order without a single
/// comparison. The array costs a fixed ~1.2 MB regardless of how many
/// records the input holds. Duplicate records collapse onto one bit.
pub struct BitmapSorter;

impl Sorter for BitmapSorter {
    fn sort(&self, input: &Path, output: &Path) -> Result<()> {
        let mut present = BitSet::new(PhoneNumber::DOMAIN_SIZE as usize);
        for line in open_input(input)?.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let number: PhoneNumber = line
                .parse()
                .with_context(|| format!("Invalid record in {:?}", input))?;
            present.insert(number.value() as usize);
        }

        let mut writer = create_output(output)?;
        for value in present.ones() {
            let number = PhoneNumber::new(value as u32)?;
            writeln!(writer, "{number}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

// --- Shared file plumbing ---

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open input file: {:?}", path))?;
    Ok(BufReader::new(file))
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    Ok(BufWriter::new(file))
}
