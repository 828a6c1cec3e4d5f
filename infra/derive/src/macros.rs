pub mod args;
pub mod closed;
pub mod error;
pub mod slice;
