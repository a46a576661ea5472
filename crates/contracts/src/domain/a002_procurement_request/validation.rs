//! Правила валидации заявки
//!
//! Используются и формой (доступность кнопки отправки), и встроенными
//! обработчиками backend.

/// Проверка адреса вида `local@domain.tld`
///
/// Без пробельных символов, ровно один `@`, непустая локальная часть,
/// в домене есть точка с непустыми частями слева и справа.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

/// Обязательное поле заполнено (пробелы не считаются)
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Итоговое правило доступности отправки
pub fn can_submit(
    category: &str,
    supplier: &str,
    requestor_name: &str,
    requestor_email: &str,
    materials_count: usize,
) -> bool {
    is_filled(category)
        && is_filled(supplier)
        && is_filled(requestor_name)
        && is_filled(requestor_email)
        && is_valid_email(requestor_email)
        && materials_count > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("buyer@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("  first.last@sub.domain.org  "));
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("buyer"));
        assert!(!is_valid_email("buyer@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("buyer@example"));
        assert!(!is_valid_email("buyer@.com"));
        assert!(!is_valid_email("buyer@example."));
        assert!(!is_valid_email("buy er@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_can_submit_requires_everything() {
        assert!(can_submit("Plumbing", "s1", "Ann", "ann@example.com", 1));
        assert!(!can_submit("", "s1", "Ann", "ann@example.com", 1));
        assert!(!can_submit("Plumbing", "", "Ann", "ann@example.com", 1));
        assert!(!can_submit("Plumbing", "s1", "   ", "ann@example.com", 1));
        assert!(!can_submit("Plumbing", "s1", "Ann", "", 1));
        assert!(!can_submit("Plumbing", "s1", "Ann", "ann@example", 1));
        assert!(!can_submit("Plumbing", "s1", "Ann", "ann@example.com", 0));
    }
}
