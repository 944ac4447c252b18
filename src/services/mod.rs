// src/services/mod.rs
pub mod chart;
pub mod covid_api;
pub mod csv_store;
pub mod pipeline;
pub mod quickchart;
