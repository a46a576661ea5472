use contracts::domain::a002_procurement_request::{ProcurementRequest, SubmitResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// POST заявки на эндпоинт её типа
///
/// При статусе вне 2xx текст ошибки берётся из тела ответа, если он там есть.
pub async fn submit_request(request: &ProcurementRequest) -> Result<SubmitResponse, String> {
    let url = api_url(request.request_type.submit_path());
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Не удалось сформировать запрос: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Сервер недоступен: {}", e))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Не удалось прочитать ответ: {}", e))?;

    if !response.ok() {
        let detail = serde_json::from_str::<SubmitResponse>(&text)
            .ok()
            .and_then(|r| r.error)
            .filter(|e| !e.trim().is_empty());
        return Err(match detail {
            Some(e) => format!("Ошибка отправки ({}): {}", status, e),
            None => format!("Ошибка отправки: HTTP {}", status),
        });
    }

    serde_json::from_str(&text).map_err(|e| format!("Некорректный ответ сервера: {}", e))
}
