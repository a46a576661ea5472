//! Общие контракты frontend ↔ backend
//!
//! - `domain::a001_reference_data` - справочники формы (категории, поставщики, материалы)
//! - `domain::a002_procurement_request` - заявка на закупку: состояние формы, валидация, payload

pub mod domain;
