use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set, sea_query::OnConflict};

use crate::{
    entity::settings::{ActiveModel, Column, Entity as Settings},
    error::{AppError, AppResult},
    models::Setting,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Fallback used when a key has never been written.
pub fn default_value(key: &str) -> &'static str {
    match key {
        "vat_rate" => "15",
        _ => "0",
    }
}

/// Returns the stored value, or the built-in default when the key is absent.
pub async fn get_setting(state: &AppState, key: &str) -> AppResult<ApiResponse<Setting>> {
    let stored = Settings::find()
        .filter(Column::Key.eq(key))
        .one(&state.orm)
        .await?;

    let setting = match stored {
        Some(model) => Setting::from(model),
        None => Setting {
            key: key.to_string(),
            value: default_value(key).to_string(),
        },
    };

    Ok(ApiResponse::success("Setting", setting, Some(Meta::empty())))
}

/// Insert-or-overwrite by key. The value is stored as an opaque string.
pub async fn set_setting(
    state: &AppState,
    key: String,
    value: String,
) -> AppResult<ApiResponse<Setting>> {
    let active = ActiveModel {
        key: Set(key.clone()),
        value: Set(value),
        ..Default::default()
    };

    Settings::insert(active)
        .on_conflict(
            OnConflict::column(Column::Key)
                .update_column(Column::Value)
                .to_owned(),
        )
        .exec_without_returning(&state.orm)
        .await?;

    let stored = Settings::find()
        .filter(Column::Key.eq(key.as_str()))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("setting {key} vanished after upsert")))?;

    tracing::info!(key = %stored.key, "setting updated");

    Ok(ApiResponse::success(
        "Setting updated",
        Setting::from(stored),
        Some(Meta::empty()),
    ))
}
