// Service exports
pub mod reference_data;

pub use reference_data::{
    load_categories, load_retailers, parse_categories, parse_retailers, DataFormat,
    ReferenceDataError,
};
