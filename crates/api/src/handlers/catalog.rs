use axum::{extract::State, Json};
use std::sync::Arc;

use turnos_core::{errors::BookingError, models::service::Service};

use crate::{middleware::error_handling::AppError, ApiState};

/// Read-only service listing so booking clients can discover service ids
/// and durations. Catalog mutation belongs to the admin screens.
#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = turnos_db::repositories::catalog::list_services(&state.db_pool)
        .await
        .map_err(BookingError::Upstream)?;

    Ok(Json(
        services
            .into_iter()
            .map(|service| Service {
                id: service.id,
                name: service.name,
                duration_minutes: service.duration_minutes,
            })
            .collect(),
    ))
}
