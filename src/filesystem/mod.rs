//! In-memory description of a project skeleton.
//!
//! A [`TreeNode`] is either a directory of named children or a list of
//! file names. Walking it depth-first yields the ordered [`PlanStep`]s the
//! materializer carries out.

mod tree;

pub use tree::{DIRECT_FILES_KEY, EntryKind, PlanStep, TreeNode};
