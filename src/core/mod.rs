pub mod countries;
pub mod engine;
pub mod format;
pub mod normalize;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{
    CountryRecord, ExternalLookup, LookupRecord, LookupResult, NumberType, ParsedInfo,
    ParsedPayload,
};
pub use crate::domain::ports::{ConfigProvider, NumberParser, Pipeline, Storage, ValidationApi};
pub use crate::utils::error::Result;
