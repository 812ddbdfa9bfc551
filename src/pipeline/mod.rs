// Pipeline orchestration: the two stages and what passes between them.
//
// Stage 1 (`extract`) turns a directory of PDFs into candidate sentences.
// Stage 2 (`cluster`) filters those down to limitation sentences and groups
// them into research gaps. The hand-off is an ordered list of sentences,
// optionally persisted one per line for inspection or a later `cluster` run.

pub mod cluster;
pub mod extract;

pub use cluster::{analyze, discover_gaps, GapAnalysis, GapPath};
pub use extract::{extract_papers, read_limitations, write_limitations};
