pub mod diag;

pub mod browser;
pub mod command;
pub mod config;
pub mod editor;
pub mod link;
pub mod output;
pub mod repo;
