//! Cache busting через подстановку строк
//!
//! - в HTML к ссылкам на локальные ресурсы добавляется `?v=<version>`
//! - в начало CSS добавляется комментарий `/* v<version> */`

/// Добавить `?v=<version>` ко всем ссылкам на ресурсы в кавычках.
///
/// Ссылка - это токен в одинарных или двойных кавычках без пробелов,
/// оканчивающийся на одно из `extensions`. Абсолютные URL и ссылки с
/// query string не трогаются.
pub fn inject_version(html: &str, version: u64, extensions: &[String]) -> String {
    let suffix = format!("?v={}", version);
    let bytes = html.as_bytes();
    let mut insert_at: Vec<usize> = Vec::new();

    for (close, &b) in bytes.iter().enumerate() {
        if b != b'"' && b != b'\'' {
            continue;
        }
        let Some(open) = bytes[..close].iter().rposition(|&c| c == b) else {
            continue;
        };
        if is_asset_reference(&html[open + 1..close], extensions) {
            insert_at.push(close);
        }
    }

    let mut out = String::with_capacity(html.len() + insert_at.len() * suffix.len());
    let mut last = 0;
    for pos in insert_at {
        out.push_str(&html[last..pos]);
        out.push_str(&suffix);
        last = pos;
    }
    out.push_str(&html[last..]);
    out
}

fn is_asset_reference(candidate: &str, extensions: &[String]) -> bool {
    if candidate.is_empty()
        || candidate
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '?' | '#' | '<' | '>' | '"' | '\'' | '`'))
    {
        return false;
    }
    let lower = candidate.to_ascii_lowercase();
    if lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("//")
        || lower.starts_with("data:")
    {
        return false;
    }

    let file_name = candidate.rsplit('/').next().unwrap_or(candidate);
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => {
            !stem.is_empty() && extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
        }
        None => false,
    }
}

/// Комментарий с версией в начале таблицы стилей
pub fn prefix_stylesheet(css: &str, version: u64) -> String {
    format!("/* v{} */\n{}", version, css)
}

/// Имя ресурса из пути запроса: один сегмент из `[A-Za-z0-9._-]`, не скрытый файл
pub fn asset_name(path: &str) -> Option<&str> {
    let name = path.strip_prefix('/').unwrap_or(path);
    if name.is_empty() || name.starts_with('.') || name.contains("..") {
        return None;
    }
    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        Some(name)
    } else {
        None
    }
}

/// Расширение файла без точки
pub fn extension(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext).filter(|e| !e.is_empty())
}

pub fn content_type(name: &str) -> &'static str {
    match extension(name).map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("wasm") => "application/wasm",
        Some("json") | Some("map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Тип ресурса с текстовой подстановкой
pub fn is_stylesheet(name: &str) -> bool {
    extension(name).is_some_and(|e| e.eq_ignore_ascii_case("css"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["js".into(), "css".into(), "wasm".into()]
    }

    #[test]
    fn test_inject_version_into_trunk_index() {
        let html = r#"<link rel="stylesheet" href="/styles.css">
<link rel="modulepreload" href="/frontend-1a2b.js">
<script type="module">import init from '/frontend-1a2b.js';init('/frontend-1a2b_bg.wasm');</script>"#;
        let out = inject_version(html, 17, &exts());
        assert_eq!(
            out,
            r#"<link rel="stylesheet" href="/styles.css?v=17">
<link rel="modulepreload" href="/frontend-1a2b.js?v=17">
<script type="module">import init from '/frontend-1a2b.js?v=17';init('/frontend-1a2b_bg.wasm?v=17');</script>"#
        );
    }

    #[test]
    fn test_inject_version_skips_foreign_references() {
        let html = r#"<script src="https://cdn.example.com/lib.js"></script>
<script src="//cdn.example.com/x.js"></script>
<link href="/styles.css?v=3">
<img src="/logo.png" alt="it's a logo">
<a href="page.html">don't</a>"#;
        assert_eq!(inject_version(html, 9, &exts()), html);
    }

    #[test]
    fn test_inject_version_relative_and_apostrophes() {
        let html = r#"<p>it's here</p><script src="app.js"></script><p>don't</p>"#;
        assert_eq!(
            inject_version(html, 1, &exts()),
            r#"<p>it's here</p><script src="app.js?v=1"></script><p>don't</p>"#
        );
    }

    #[test]
    fn test_inject_version_extension_case_insensitive() {
        let html = r#"<link href="/STYLE.CSS"><script src="/App.Js"></script>"#;
        assert_eq!(
            inject_version(html, 4, &exts()),
            r#"<link href="/STYLE.CSS?v=4"><script src="/App.Js?v=4"></script>"#
        );
        let upper = vec!["JS".to_string()];
        assert_eq!(
            inject_version(r#"<script src="/app.js"></script>"#, 4, &upper),
            r#"<script src="/app.js?v=4"></script>"#
        );
    }

    #[test]
    fn test_prefix_stylesheet() {
        assert_eq!(prefix_stylesheet("body{}", 5), "/* v5 */\nbody{}");
    }

    #[test]
    fn test_asset_name() {
        assert_eq!(asset_name("/styles.css"), Some("styles.css"));
        assert_eq!(asset_name("/frontend-1a2b_bg.wasm"), Some("frontend-1a2b_bg.wasm"));
        assert_eq!(asset_name("/"), None);
        assert_eq!(asset_name("/../secret.js"), None);
        assert_eq!(asset_name("/a/b.js"), None);
        assert_eq!(asset_name("/.env"), None);
        assert_eq!(asset_name("/a..js"), None);
        assert_eq!(asset_name("/a%2fb.js"), None);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type("app.js"), "text/javascript; charset=utf-8");
        assert_eq!(content_type("app_bg.wasm"), "application/wasm");
        assert_eq!(content_type("styles.CSS"), "text/css; charset=utf-8");
        assert_eq!(content_type("noext"), "application/octet-stream");
        assert!(is_stylesheet("styles.css"));
        assert!(!is_stylesheet("app.js"));
    }
}
