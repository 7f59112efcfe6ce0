pub mod cs;
pub mod error;

pub use cs::{change, dynamic, greedy};
pub use error::{ChangeError, Result};
