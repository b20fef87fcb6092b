// Export all items from the submodules
mod expander;
mod helpers;
mod walker;

// Re-export the expander and the pattern parser
pub use expander::{Expansion, GlobExpander};
pub use helpers::parse_patterns;
