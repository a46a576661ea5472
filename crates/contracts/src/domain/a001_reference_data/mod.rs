pub mod aggregate;

pub use aggregate::{Category, LoadDataResponse, Material, ReferenceData, Supplier};
