// Limitation mining: sentence repair, cue vocabulary, and the validity filter.

pub mod filter;
pub mod repair;
pub mod vocabulary;

pub use filter::{is_valid_limitation, load_sentences};
pub use repair::repair_sentence;
