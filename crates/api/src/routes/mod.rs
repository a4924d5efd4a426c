pub mod function;
pub mod service;
pub mod transcript;
