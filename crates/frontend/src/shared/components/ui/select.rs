use leptos::prelude::*;

/// Выпадающий список с подписью и пустым вариантом-подсказкой
#[component]
pub fn Select(
    /// Подпись над списком
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Текущее значение; пустая строка выбирает подсказку
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Варианты: (value, label)
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Текст пустого варианта
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || {
                    if is_disabled() {
                        "form__select form__select--disabled"
                    } else {
                        "form__select"
                    }
                }
                disabled=is_disabled
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" prop:selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, label)| (val.clone(), label.clone())
                    children=move |(val, label)| {
                        let val_for_check = val.clone();
                        let is_selected = move || value.get() == val_for_check;
                        view! {
                            <option value=val prop:selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
