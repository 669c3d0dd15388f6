mod catalog;
mod import;
mod store;

pub use catalog::*;
pub use import::*;
pub use store::*;
