pub mod matching_loop;

pub use matching_loop::{LoopStats, MatchingLoop};
