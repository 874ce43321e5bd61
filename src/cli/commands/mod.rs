//! CLI command implementations
//!
//! Each command follows a consistent pattern with dedicated Args and
//! Command structs, executed against a shared [`CommandContext`].
//!
//! [`CommandContext`]: crate::cli::CommandContext

pub mod all_in;
pub mod price;
pub mod session;
pub mod show;
