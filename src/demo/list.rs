use std::collections::LinkedList;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use crate::demo::ArrayScript;
use crate::demo::Demonstrator;
use crate::demo::SearchStrategy;
use crate::error::DemoError;
use crate::search;
use crate::timing::Transcript;

/// Sequential list of characters.
pub struct ListDemo {
    list: LinkedList<char>,
    target: char,
    array: ArrayScript,
}

impl ListDemo {
    pub fn new(target: char, values: Vec<char>, snapshot_path: Option<PathBuf>) -> ListDemo {
        return ListDemo {
            list: values.iter().copied().collect(),
            target,
            array: ArrayScript::new(values, target, SearchStrategy::Binary).with_snapshot(snapshot_path),
        };
    }

    pub fn list(&self) -> &LinkedList<char> {
        return &self.list;
    }

    pub fn array(&self) -> &ArrayScript {
        return &self.array;
    }

    pub fn find_in_list<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<Option<usize>> {
        let found = out.timed("binary search in LinkedList", || {
            search::binary_search_list(&self.list, &self.target).ok()
        })?;

        match found {
            Some(index) => out.line(format_args!(
                "Element '{}' found in LinkedList at position: {}",
                self.target, index
            ))?,
            None => out.line(format_args!("Element '{}' is absent from the LinkedList.", self.target))?,
        }
        return Ok(found);
    }

    pub fn min_max_in_list<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<Option<(char, char)>> {
        if self.list.is_empty() {
            out.line("LinkedList is empty.")?;
            return Ok(None);
        }

        let bounds = out.timed("min and max in LinkedList", || {
            search::min_max(self.list.iter().copied())
        })?;
        if let Some((min, max)) = bounds {
            out.line(format_args!("Smallest value in LinkedList: {}", min))?;
            out.line(format_args!("Largest value in LinkedList: {}", max))?;
        }
        return Ok(bounds);
    }

    pub fn sort_list<W: Write>(&mut self, out: &mut Transcript<W>) -> io::Result<()> {
        let list = &mut self.list;
        return out.timed("sort LinkedList", || search::sort_list(list));
    }
}

impl Demonstrator for ListDemo {
    fn name(&self) -> &'static str {
        return "LinkedList operations";
    }

    fn run<W: Write>(&mut self, out: &mut Transcript<W>) -> Result<(), DemoError> {
        self.find_in_list(out)?;
        self.min_max_in_list(out)?;

        self.sort_list(out)?;

        self.find_in_list(out)?;
        self.min_max_in_list(out)?;

        return self.array.run(out);
    }
}
