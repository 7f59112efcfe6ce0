pub mod coin_change;

// Re-export greedy algorithms with descriptive names
pub use coin_change::{make_greedy, make_greedy_exact};
