pub mod input;
pub mod runner;
