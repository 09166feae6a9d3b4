use std::io;
use std::io::Write;
use std::path::PathBuf;

use crate::data_file;
use crate::error::DemoError;
use crate::search;
use crate::timing::Transcript;

/// How the array script looks for its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// `slice::binary_search`; only meaningful once the array is sorted.
    Binary,
    /// First matching position, front to back.
    Linear,
}

/// The array half of every character demonstrator: find, min/max, sort,
/// find and min/max again, then save the sorted array.
pub struct ArrayScript {
    values: Vec<char>,
    target: char,
    search: SearchStrategy,
    snapshot_path: Option<PathBuf>,
}

impl ArrayScript {
    pub fn new(values: Vec<char>, target: char, search: SearchStrategy) -> ArrayScript {
        return ArrayScript {
            values,
            target,
            search,
            snapshot_path: None,
        };
    }

    /// Save the sorted array to `path` at the end of the script.
    pub fn with_snapshot(mut self, path: Option<PathBuf>) -> ArrayScript {
        self.snapshot_path = path;
        return self;
    }

    pub fn values(&self) -> &[char] {
        return &self.values;
    }

    pub fn run<W: Write>(&mut self, out: &mut Transcript<W>) -> Result<(), DemoError> {
        self.find(out)?;
        self.min_max(out)?;

        self.sort(out)?;

        self.find(out)?;
        self.min_max(out)?;

        if let Some(path) = &self.snapshot_path {
            data_file::save(path, &self.values)?;
            out.line(format_args!("Sorted array saved to {}", path.display()))?;
        }
        return Ok(());
    }

    /// Look for the target, reporting its position.
    pub fn find<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<Option<usize>> {
        let position = match self.search {
            SearchStrategy::Binary => out.timed("binary search in array", || {
                self.values.binary_search(&self.target).ok()
            })?,
            SearchStrategy::Linear => out.timed("linear search in array", || {
                search::linear_position(&self.values, &self.target)
            })?,
        };

        match position {
            Some(index) => out.line(format_args!(
                "Element '{}' found in array at position: {}",
                self.target, index
            ))?,
            None => out.line(format_args!("Element '{}' is absent from the array.", self.target))?,
        }
        return Ok(position);
    }

    pub fn min_max<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<Option<(char, char)>> {
        if self.values.is_empty() {
            out.line("Array is empty.")?;
            return Ok(None);
        }

        let bounds = out.timed("min and max in array", || {
            search::min_max(self.values.iter().copied())
        })?;
        if let Some((min, max)) = bounds {
            out.line(format_args!("Smallest value in array: {}", min))?;
            out.line(format_args!("Largest value in array: {}", max))?;
        }
        return Ok(bounds);
    }

    pub fn sort<W: Write>(&mut self, out: &mut Transcript<W>) -> io::Result<()> {
        let values = &mut self.values;
        return out.timed("sort array", || values.sort());
    }
}
