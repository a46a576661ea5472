//! Загрузка справочника категорий, поставщиков и материалов

use contracts::domain::a001_reference_data::{LoadDataResponse, ReferenceData};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const LOAD_PATH: &str = "/api/data/load";

/// GET /api/data/load
///
/// Ошибка сети, HTTP-статус вне 2xx и `success: false` дают `Err` с текстом для баннера.
pub async fn load_reference_data() -> Result<ReferenceData, String> {
    let response = Request::get(&api_url(LOAD_PATH))
        .send()
        .await
        .map_err(|e| format!("Не удалось загрузить справочники: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Не удалось загрузить справочники: HTTP {}",
            response.status()
        ));
    }

    let body: LoadDataResponse = response
        .json()
        .await
        .map_err(|e| format!("Некорректный ответ справочников: {}", e))?;

    body.into_result()
        .map_err(|e| format!("Не удалось загрузить справочники: {}", e))
}
