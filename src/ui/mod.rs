//! Terminal output helpers for the CLI.

pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, status, success, warn};
pub use table::{bindings_table, stats_table};
pub use theme::{Theme, theme};
