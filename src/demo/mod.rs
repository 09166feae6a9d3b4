//! Collection demonstrators.
//!
//! Each demonstrator owns one collection and walks it through a fixed
//! script of searches, min/max scans, sorts and mutations, writing results
//! and timings to a [`Transcript`]. The character demonstrators finish with
//! the shared [`ArrayScript`] over their backing array; both map kinds run
//! the same [`MapDemo`] script.
//!
//! | Demonstrator | Collection | Array search |
//! |--------------|------------|--------------|
//! | `ListDemo` | `LinkedList<char>` | binary |
//! | `QueueDemo` | `BinaryHeap<Reverse<char>>` | binary |
//! | `SetDemo` | `FxHashSet<char>` | linear |
//! | `MapDemo<FxHashMap<..>>` | `FxHashMap<Record, String>` | - |
//! | `MapDemo<LinkedMap<..>>` | `LinkedMap<Record, String>` | - |

use std::io::Write;

use crate::error::DemoError;
use crate::timing::Transcript;

mod array;
mod list;
mod map;
mod queue;
mod set;

pub use array::ArrayScript;
pub use array::SearchStrategy;
pub use list::ListDemo;
pub use map::MapDemo;
pub use map::RecordMap;
pub use queue::HeadChange;
pub use queue::QueueDemo;
pub use set::Coverage;
pub use set::SetDemo;

/// Runs a fixed script over one collection.
pub trait Demonstrator {
    /// Heading used in the transcript and in logs.
    fn name(&self) -> &'static str;

    /// Run every operation of the script, in order.
    fn run<W: Write>(&mut self, out: &mut Transcript<W>) -> Result<(), DemoError>;
}

/// Run a demonstrator under a heading.
pub fn run_demo<D: Demonstrator, W: Write>(
    demo: &mut D,
    out: &mut Transcript<W>,
) -> Result<(), DemoError> {
    let name = demo.name();
    let before = out.timings().len();
    tracing::info!(demo = %name, "starting");

    out.line(format_args!("\n========= {} =========", name))?;
    demo.run(out)?;

    tracing::info!(demo = %name, ops = out.timings().len() - before, "finished");
    return Ok(());
}
