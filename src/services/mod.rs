pub mod analyzer;
pub mod color;
pub mod generator;
pub mod styling;
pub mod suggest;
