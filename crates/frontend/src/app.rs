use crate::domain::a002_procurement_request::ui::form::{
    ProcurementFormViewModel, ProcurementRequestPage,
};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Одна форма на страницу: view model доступна всем дочерним компонентам
    let vm = ProcurementFormViewModel::new();
    provide_context(vm);
    vm.load();

    view! { <ProcurementRequestPage /> }
}
