use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Кнопка: варианты primary (по умолчанию), secondary и ghost
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "md" (по умолчанию) или "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Атрибут `type`: "button" (по умолчанию) или "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Показать индикатор ожидания перед содержимым
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_busy = move || busy.get().unwrap_or(false);

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=move || button_class(variant.get().as_deref(), size.get().as_deref())
            title=move || title.get().unwrap_or_default()
            disabled=move || disabled.get().unwrap_or(false)
            aria-busy=move || is_busy().to_string()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || is_busy().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
            {children()}
        </button>
    }
}

/// CSS-классы кнопки по варианту и размеру
fn button_class(variant: Option<&str>, size: Option<&str>) -> String {
    let variant = match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    match size {
        Some("sm") => format!("button {} button--small", variant),
        _ => format!("button {}", variant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(None, None), "button button--primary");
        assert_eq!(
            button_class(Some("ghost"), Some("sm")),
            "button button--ghost button--small"
        );
        assert_eq!(button_class(Some("secondary"), Some("md")), "button button--secondary");
        assert_eq!(button_class(Some("unknown"), None), "button button--primary");
    }
}
