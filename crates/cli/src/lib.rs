pub mod config;
pub mod organize;
pub mod scanner;
