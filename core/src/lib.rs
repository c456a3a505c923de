pub mod analysis;
pub mod classify;
pub mod parser;
pub mod scanner;
pub mod score;
