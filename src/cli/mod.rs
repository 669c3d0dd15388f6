pub mod import;
pub mod plan;
pub mod server;
