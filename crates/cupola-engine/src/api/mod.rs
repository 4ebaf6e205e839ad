pub mod descriptor;
pub mod engine;
pub mod types;
