pub mod error;
pub mod expand;
pub mod input;
pub mod render;
pub mod solver;
pub mod types;
