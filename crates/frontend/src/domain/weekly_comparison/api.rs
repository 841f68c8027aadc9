use contracts::domain::adviser::AdviserId;
use contracts::domain::weekly_comparison::{
    WeeklyComparison, WeeklyComparisonResponse, WeeklyComparisonUpdate,
};
use contracts::error::{AppError, AppResult};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const WEEKLY_COMPARISONS: &str = "/api/v1/weekly-comparisons";

/// Generate (or re-read) the adviser's current weekly comparison.
///
/// The backend answers with an empty JSON object when there is nothing to
/// compare yet; that case is `Ok(None)`, not an error.
pub async fn generate_for_adviser(adviser_id: AdviserId) -> AppResult<Option<WeeklyComparison>> {
    let url = api_url(&format!(
        "{}/generate/adviser/{}",
        WEEKLY_COMPARISONS, adviser_id
    ));
    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(AppError::transport)?;

    if !response.ok() {
        return Err(AppError::http(format!(
            "HTTP error! status: {}",
            response.status()
        )));
    }

    let value: serde_json::Value = response.json().await.map_err(AppError::transport)?;
    if value.as_object().map(|o| o.is_empty()).unwrap_or(true) {
        return Ok(None);
    }

    let raw: WeeklyComparisonResponse =
        serde_json::from_value(value).map_err(AppError::transport)?;
    Ok(Some(raw.into_comparison()))
}

/// Overwrite the current-week sales figure.
pub async fn update_current_week(adviser_id: AdviserId, value: f64) -> AppResult<()> {
    put_week_sales(
        &format!("{}/adviser/{}/current-week", WEEKLY_COMPARISONS, adviser_id),
        value,
    )
    .await
}

/// Overwrite the previous-week sales figure. The payload key is still
/// `currentWeekSales`; that is what this endpoint reads.
pub async fn update_previous_week(adviser_id: AdviserId, value: f64) -> AppResult<()> {
    put_week_sales(
        &format!("{}/adviser/{}/previous-week", WEEKLY_COMPARISONS, adviser_id),
        value,
    )
    .await
}

async fn put_week_sales(path: &str, value: f64) -> AppResult<()> {
    let body = WeeklyComparisonUpdate {
        current_week_sales: value,
    };
    let response = Request::put(&api_url(path))
        .json(&body)
        .map_err(AppError::transport)?
        .send()
        .await
        .map_err(AppError::transport)?;

    if !response.ok() {
        return Err(AppError::http(format!(
            "Error al actualizar las ventas: {}",
            response.status()
        )));
    }
    Ok(())
}
