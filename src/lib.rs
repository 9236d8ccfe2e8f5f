pub mod error;
pub mod validation;
pub mod model;
pub mod db;
pub mod ops;
pub mod queries;
pub mod directory;
pub mod migrate;
pub mod config;
pub mod cli;
