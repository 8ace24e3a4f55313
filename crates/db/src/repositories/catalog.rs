//! Read-only access to the catalog tables (clients, vehicles, services).
//! Mutation of these records belongs to the shop-management CRUD screens,
//! not to the booking engine.

use crate::models::{DbClient, DbService, DbVehicle};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, duration_minutes, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn list_services(pool: &Pool<Postgres>) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, duration_minutes, created_at
        FROM services
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn get_client_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbClient>> {
    let client = sqlx::query_as::<_, DbClient>(
        r#"
        SELECT id, name, phone, created_at
        FROM clients
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(client)
}

pub async fn get_vehicle_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbVehicle>> {
    let vehicle = sqlx::query_as::<_, DbVehicle>(
        r#"
        SELECT id, client_id, plate, description, created_at
        FROM vehicles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(vehicle)
}
