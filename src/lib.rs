pub mod cli;
pub mod commands;
pub mod configuration;
pub mod console;
pub mod db_interaction;
pub mod domain;
pub mod gateway;
pub mod models;
pub mod routes;
pub mod schema;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod utils;
