pub mod lending;
pub mod seed;
