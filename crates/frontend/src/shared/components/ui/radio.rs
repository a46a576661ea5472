use leptos::prelude::*;

/// Один переключатель группы
#[component]
fn Radio(
    label: String,
    value: String,
    /// Значение, выбранное в группе
    checked_value: Signal<String>,
    on_change: Callback<String>,
    name: String,
    disabled: Signal<bool>,
) -> impl IntoView {
    let radio_id = format!("{}-{}", name, value);
    let value_for_check = value.clone();
    let value_for_change = value.clone();

    view! {
        <div class=move || {
            if disabled.get() {
                "form__radio-wrapper form__radio-wrapper--disabled"
            } else {
                "form__radio-wrapper"
            }
        }>
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=move || checked_value.get() == value_for_check
                disabled=move || disabled.get()
                on:change=move |_| on_change.run(value_for_change.clone())
            />
            <label class="form__radio-label" for=radio_id>
                {label}
            </label>
        </div>
    }
}

/// Группа переключателей с подписью
#[component]
pub fn RadioGroup(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Атрибут `name`, он же префикс id переключателей
    #[prop(into)]
    name: String,
    /// Варианты: (value, label)
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let disabled = Signal::derive(move || disabled.get().unwrap_or(false));

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <span class="form__label">{l}</span>
            })}
            <div class="form__radio-group" role="radiogroup">
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, lbl)| {
                        view! {
                            <Radio
                                label=lbl
                                value=val
                                checked_value=value
                                on_change=on_change
                                name=name.clone()
                                disabled=disabled
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
