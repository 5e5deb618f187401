//! Handler for the tracked-company listing.

use axum::extract::State;
use axum::Json;

use talentscope_db::repositories::CompanyRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/companies
///
/// All tracked company names, ascending. Feeds the search page's company
/// picker.
pub async fn list_companies(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let names = CompanyRepo::list_names(&state.pool).await?;
    Ok(Json(DataResponse { data: names }))
}
