mod cache;
mod constraint;
mod day;
mod error;
mod filter;
mod horizon;
mod picker;
mod rank;
mod source;

pub mod sqlite;

pub use cache::*;
pub use constraint::*;
pub use day::*;
pub use error::*;
pub use filter::*;
pub use horizon::*;
pub use picker::*;
pub use rank::*;
pub use source::*;
