pub mod change;
pub mod dynamic;
pub mod greedy;

// Re-export the change-making entry points
pub use change::{compare, time_strategy, Breakdown, Coin, Comparison, Strategy, TimingConfig};
pub use dynamic::make_minimal;
pub use greedy::{make_greedy, make_greedy_exact};
