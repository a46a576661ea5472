//! Форма заявки на закупку
//!
//! MVVM:
//! - model.rs: отправка заявки на сервер
//! - view_model.rs: сигналы состояния и команды (загрузка, события формы, отправка)
//! - view.rs: страница с формой
//! - materials_list.rs, supplier_info.rs, success_view.rs: части страницы

mod materials_list;
mod model;
mod success_view;
mod supplier_info;
mod view;
mod view_model;

pub use view::ProcurementRequestPage;
pub use view_model::ProcurementFormViewModel;
