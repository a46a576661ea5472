//! Адреса API
//!
//! Бэкенд отдаёт и статику, и API, поэтому запросы идут на тот же origin.
//! В режиме `trunk serve` пути `/api/*` проксируются (см. Trunk.toml).

/// Базовый адрес API: origin текущей страницы
///
/// Пустая строка, если `window` недоступен (тогда путь остаётся относительным).
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Полный адрес по пути вида `/api/...`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
