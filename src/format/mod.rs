//! Human-readable formatting for counters and memory figures.
//!
//! The status line renders two kinds of numbers:
//! - counts, grouped with thousands separators ([`format_count`]);
//! - byte amounts, scaled to a binary unit with one decimal
//!   ([`format_memory`]).
//!
//! Both are pure functions with no locale handling; the grouping character
//! and unit ladder are fixed.

mod decimal;
mod memory;

pub use decimal::format_count;
pub use memory::format_memory;
