pub mod domain;
pub mod environment;
pub mod errors;
pub mod generator;
pub mod models;
pub mod template;
