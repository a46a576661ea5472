pub mod a001_reference_data;
pub mod a002_procurement_request;
pub mod health;
pub mod static_files;
