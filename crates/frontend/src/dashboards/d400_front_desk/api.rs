use contracts::dashboards::d400_front_desk::dto::{FrontDeskRequest, FrontDeskSummary};

use crate::shared::api_utils::{get_json, with_query};

pub async fn fetch_summary(request: &FrontDeskRequest) -> Result<FrontDeskSummary, String> {
    get_json(&with_query("/api/dashboard/front-desk", request)?).await
}
