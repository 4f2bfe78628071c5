pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{http::NumverifyClient, parser::PhonenumberParser};
pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{countries::CountryTable, engine::LookupEngine, pipeline::LookupPipeline};
pub use utils::error::{LookupError, Result};
