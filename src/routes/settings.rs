use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::settings::UpdateSettingQuery,
    error::AppResult,
    extract::{AppPath, AppQuery},
    models::Setting,
    response::ApiResponse,
    services::settings_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(update_setting))
        .route("/{key}", get(get_setting))
}

#[utoipa::path(
    get,
    path = "/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "Stored value or built-in default", body = ApiResponse<Setting>)
    ),
    tag = "Settings"
)]
pub async fn get_setting(
    State(state): State<AppState>,
    AppPath(key): AppPath<String>,
) -> AppResult<Json<ApiResponse<Setting>>> {
    let resp = settings_service::get_setting(&state, &key).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/settings",
    params(UpdateSettingQuery),
    responses(
        (status = 200, description = "Setting upserted", body = ApiResponse<Setting>)
    ),
    tag = "Settings"
)]
pub async fn update_setting(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<UpdateSettingQuery>,
) -> AppResult<Json<ApiResponse<Setting>>> {
    let resp = settings_service::set_setting(&state, query.key, query.value).await?;
    Ok(Json(resp))
}
