pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod gateway;
pub mod logic;
pub mod models;
