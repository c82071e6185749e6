pub mod builtin;
pub mod entry;
pub mod filter;
pub mod store;

pub use entry::{ColorEntry, is_valid_hex, normalize_hex};
pub use filter::filter_entries;
pub use store::{AddError, ColorStore};
