// loopx: research gap discovery from PDF papers
//
// This is the library root. Each module corresponds to one stage of the
// limitation-mining pipeline; `pipeline` wires them together.

pub mod clustering;
pub mod config;
pub mod embeddings;
pub mod gaps;
pub mod limitations;
pub mod output;
pub mod papers;
pub mod pipeline;
pub mod status;
