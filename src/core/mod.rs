pub mod builder;
pub mod check;
pub mod closure;
pub mod config;
pub mod diagnostics;
pub mod graph;
pub mod links;
pub mod node;
pub mod query;
pub mod resolve;
pub mod types;
