use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use crate::demo::ArrayScript;
use crate::demo::Demonstrator;
use crate::demo::SearchStrategy;
use crate::error::DemoError;
use crate::search;
use crate::timing::Transcript;

/// Min-priority queue of characters: the smallest character is the head.
pub struct QueueDemo {
    queue: BinaryHeap<Reverse<char>>,
    target: char,
    array: ArrayScript,
}

/// What peek, poll, peek observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadChange {
    pub head: char,
    pub polled: char,
    pub new_head: Option<char>,
}

impl QueueDemo {
    pub fn new(target: char, values: Vec<char>, snapshot_path: Option<PathBuf>) -> QueueDemo {
        return QueueDemo {
            queue: values.iter().copied().map(Reverse).collect(),
            target,
            array: ArrayScript::new(values, target, SearchStrategy::Binary).with_snapshot(snapshot_path),
        };
    }

    pub fn len(&self) -> usize {
        return self.queue.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.queue.is_empty();
    }

    pub fn array(&self) -> &ArrayScript {
        return &self.array;
    }

    fn items(&self) -> impl Iterator<Item = char> + '_ {
        return self.queue.iter().map(|Reverse(c)| *c);
    }

    pub fn find_in_queue<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<bool> {
        let exists = out.timed("search in queue", || self.items().any(|c| c == self.target))?;
        if exists {
            out.line(format_args!("Element '{}' found in queue.", self.target))?;
        } else {
            out.line(format_args!("Element '{}' is absent from the queue.", self.target))?;
        }
        return Ok(exists);
    }

    pub fn min_max_in_queue<W: Write>(&self, out: &mut Transcript<W>) -> io::Result<Option<(char, char)>> {
        if self.queue.is_empty() {
            out.line("Queue is empty.")?;
            return Ok(None);
        }

        let bounds = out.timed("min and max in queue", || search::min_max(self.items()))?;
        if let Some((min, max)) = bounds {
            out.line(format_args!("Smallest value in queue: {}", min))?;
            out.line(format_args!("Largest value in queue: {}", max))?;
        }
        return Ok(bounds);
    }

    /// Peek at the head, poll it off, and peek at the new head.
    pub fn cycle_head<W: Write>(&mut self, out: &mut Transcript<W>) -> io::Result<Option<HeadChange>> {
        let Some(&Reverse(head)) = self.queue.peek() else {
            out.line("Queue is empty.")?;
            return Ok(None);
        };
        out.line(format_args!("Head of queue (peek): {}", head))?;

        let Some(Reverse(polled)) = self.queue.pop() else {
            return Ok(None);
        };
        out.line(format_args!("Removed head of queue (poll): {}", polled))?;

        let new_head = self.queue.peek().map(|Reverse(c)| *c);
        match new_head {
            Some(c) => out.line(format_args!("New head of queue: {}", c))?,
            None => out.line("New head of queue: none, queue is now empty")?,
        }

        return Ok(Some(HeadChange { head, polled, new_head }));
    }
}

impl Demonstrator for QueueDemo {
    fn name(&self) -> &'static str {
        return "PriorityQueue operations";
    }

    fn run<W: Write>(&mut self, out: &mut Transcript<W>) -> Result<(), DemoError> {
        self.find_in_queue(out)?;
        self.min_max_in_queue(out)?;
        self.cycle_head(out)?;

        return self.array.run(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_is_smallest_and_poll_removes_it() {
        let mut demo = QueueDemo::new('q', vec!['q', 'd', 'w', 'a', 'k'], None);
        let mut out = Transcript::new(io::sink());
        let change = demo.cycle_head(&mut out).unwrap().unwrap();

        assert_eq!(change, HeadChange { head: 'a', polled: 'a', new_head: Some('d') });
        assert_eq!(demo.len(), 4);
    }

    #[test]
    fn single_element_queue_empties() {
        let mut demo = QueueDemo::new('z', vec!['z'], None);
        let mut out = Transcript::new(Vec::new());
        let change = demo.cycle_head(&mut out).unwrap().unwrap();

        assert_eq!(change.new_head, None);
        assert!(demo.is_empty());
        assert!(String::from_utf8(out.into_inner()).unwrap().contains("queue is now empty"));
    }

    #[test]
    fn run_reports_membership_and_bounds() {
        let mut demo = QueueDemo::new('w', vec!['q', 'd', 'w', 'a', 'k'], None);
        let mut out = Transcript::new(Vec::new());
        demo.run(&mut out).unwrap();

        assert_eq!(demo.array().values(), &['a', 'd', 'k', 'q', 'w']);
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("Element 'w' found in queue."), "{}", text);
        assert!(text.contains("Smallest value in queue: a"));
        assert!(text.contains("Largest value in queue: w"));
        assert!(text.contains("Element 'w' found in array at position: 4"));
    }

    #[test]
    fn empty_queue_is_reported() {
        let mut demo = QueueDemo::new('a', Vec::new(), None);
        let mut out = Transcript::new(Vec::new());
        demo.run(&mut out).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text.matches("Queue is empty.").count(), 2);
    }
}
