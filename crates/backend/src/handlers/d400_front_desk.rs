use axum::{extract::Query, Json};
use contracts::dashboards::d400_front_desk::dto::{FrontDeskRequest, FrontDeskSummary};

use crate::dashboards::d400_front_desk::service;
use crate::shared::error::{ServiceError, ServiceResult};

/// GET /api/dashboard/front-desk?property_id=&date=
pub async fn get_front_desk(
    Query(request): Query<FrontDeskRequest>,
) -> ServiceResult<Json<FrontDeskSummary>> {
    if let Some(date) = request.date.as_deref().filter(|d| !d.is_empty()) {
        chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ServiceError::validation(format!("Invalid date: {}", date)))?;
    }
    Ok(Json(service::get_front_desk(request).await?))
}
