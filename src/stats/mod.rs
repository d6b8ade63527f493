pub mod functions;
pub mod types;
