pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::make_minimal;
