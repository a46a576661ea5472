pub mod banner;
pub mod ui;
