pub mod config;
pub mod form;
pub mod models;
pub mod mrz;
pub mod passport_generator;
pub mod utils;
pub mod validation;

pub use config::GeneratorConfig;
pub use passport_generator::DataPageGenerator;
