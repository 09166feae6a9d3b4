use std::io;
use std::io::Write;
use std::path::PathBuf;

use rustc_hash::FxHashSet;

use crate::demo::ArrayScript;
use crate::demo::Demonstrator;
use crate::demo::SearchStrategy;
use crate::error::DemoError;
use crate::search;
use crate::timing::Transcript;

/// Hash set of characters, alongside the array it was built from.
pub struct SetDemo {
    set: FxHashSet<char>,
    target: char,
    array: ArrayScript,
}

/// How the array and the set compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub array_len: usize,
    pub set_len: usize,
    pub all_present: bool,
}

impl SetDemo {
    pub fn new(target: char, values: Vec<char>, snapshot_path: Option<PathBuf>) -> SetDemo {
        return SetDemo {
            set: values.iter().copied().collect(),
            target,
            array: ArrayScript::new(values, target, SearchStrategy::Linear).with_snapshot(snapshot_path),
        };
    }

    pub fn set(&self) -> &FxHashSet<char> {
        return &self.set;
    }

    pub fn array(&self) -> &ArrayScript {
        return &self.array;
    }

    /// Membership by scanning every element.
    pub fn find_in_set<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<bool> {
        let exists = out.timed("search in HashSet", || self.set.iter().any(|&c| c == self.target))?;
        if exists {
            out.line(format_args!("Element '{}' found in HashSet.", self.target))?;
        } else {
            out.line(format_args!("Element '{}' is absent from the HashSet.", self.target))?;
        }
        return Ok(exists);
    }

    pub fn min_max_in_set<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<Option<(char, char)>> {
        if self.set.is_empty() {
            out.line("HashSet is empty.")?;
            return Ok(None);
        }

        let bounds = out.timed("min and max in HashSet", || search::min_max(self.set.iter().copied()))?;
        if let Some((min, max)) = bounds {
            out.line(format_args!("Smallest value in HashSet: {}", min))?;
            out.line(format_args!("Largest value in HashSet: {}", max))?;
        }
        return Ok(bounds);
    }

    /// Compare sizes and check every array element made it into the set.
    pub fn compare_with_array<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<Coverage> {
        let values = self.array.values();
        let coverage = Coverage {
            array_len: values.len(),
            set_len: self.set.len(),
            all_present: values.iter().all(|c| self.set.contains(c)),
        };

        out.line(format_args!("Elements in array: {}", coverage.array_len))?;
        out.line(format_args!("Elements in HashSet: {}", coverage.set_len))?;
        if coverage.all_present {
            out.line("Every array element is present in the HashSet.")?;
        } else {
            out.line("Some array elements are missing from the HashSet.")?;
        }
        return Ok(coverage);
    }
}

impl Demonstrator for SetDemo {
    fn name(&self) -> &'static str {
        return "HashSet operations";
    }

    fn run<W: Write>(&mut self, out: &mut Transcript<W>) -> Result<(), DemoError> {
        self.find_in_set(out)?;
        self.min_max_in_set(out)?;
        self.compare_with_array(out)?;

        return self.array.run(out);
    }
}
