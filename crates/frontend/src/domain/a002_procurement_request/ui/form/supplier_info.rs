use contracts::domain::a001_reference_data::Supplier;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Контакты выбранного поставщика
#[component]
pub fn SupplierInfo(supplier: Supplier) -> impl IntoView {
    let mailto = format!("mailto:{}", supplier.email);
    let tel = format!("tel:{}", supplier.phone.replace(' ', ""));
    let specialties = supplier.specialties.join(", ");

    view! {
        <div class="supplier-info">
            <div class="supplier-info__header">
                {icon("suppliers")}
                <span class="supplier-info__name">{supplier.name}</span>
            </div>
            <dl class="supplier-info__contacts">
                <dt>"Email"</dt>
                <dd><a href=mailto>{supplier.email}</a></dd>
                <dt>"Телефон"</dt>
                <dd><a href=tel>{supplier.phone}</a></dd>
                <dt>"Специализация"</dt>
                <dd>{specialties}</dd>
            </dl>
        </div>
    }
}
