pub mod cli;
pub mod errors;
pub mod generator;
pub mod orders;
pub mod writer;
