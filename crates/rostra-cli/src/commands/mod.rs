pub mod audit;
pub mod parse;
pub mod windows;
