use crate::models::DbAppointment;
use chrono::{DateTime, Duration, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Advisory lock key for the single service-bay booking stream. Every commit
/// takes this transaction-scoped lock before re-checking for conflicts, so
/// concurrent commits serialize inside Postgres no matter how many API
/// processes are running.
const SERVICE_BAY_LOCK_KEY: i64 = 0x7475_726e_6f73;

/// Result of the atomic re-check-then-insert step.
#[derive(Debug)]
pub enum InsertOutcome {
    Created(DbAppointment),
    Conflict,
}

pub async fn list_in_range(
    pool: &Pool<Postgres>,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<DbAppointment>> {
    tracing::debug!("Listing appointments in [{}, {})", from, to);

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_id, vehicle_id, service_id, start_time, duration_minutes, status, created_at
        FROM appointments
        WHERE status <> 'cancelled'
          AND start_time >= $1
          AND start_time < $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_id, vehicle_id, service_id, start_time, duration_minutes, status, created_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Inserts a `requested` appointment only if `[start_time, start_time +
/// duration)` is still free. The conflict re-check and the insert run in one
/// transaction holding the service-bay advisory lock, which closes the race
/// window between listing slots and committing a choice: of two commits for
/// overlapping intervals exactly one can succeed.
pub async fn insert_if_free(
    pool: &Pool<Postgres>,
    client_id: Uuid,
    vehicle_id: Uuid,
    service_id: Uuid,
    start_time: DateTime<Utc>,
    duration_minutes: i32,
) -> Result<InsertOutcome> {
    let end_time = start_time + Duration::minutes(i64::from(duration_minutes));

    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SERVICE_BAY_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    let conflicting = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM appointments
        WHERE status <> 'cancelled'
          AND start_time < $2
          AND start_time + make_interval(mins => duration_minutes) > $1
        "#,
    )
    .bind(start_time)
    .bind(end_time)
    .fetch_one(&mut *tx)
    .await?;

    if conflicting > 0 {
        tracing::debug!(
            "Booking conflict: {} live appointment(s) overlap [{}, {})",
            conflicting,
            start_time,
            end_time
        );
        tx.rollback().await?;
        return Ok(InsertOutcome::Conflict);
    }

    let id = Uuid::new_v4();
    let now = Utc::now();

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments
            (id, client_id, vehicle_id, service_id, start_time, duration_minutes, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, 'requested', $7)
        RETURNING id, client_id, vehicle_id, service_id, start_time, duration_minutes, status, created_at
        "#,
    )
    .bind(id)
    .bind(client_id)
    .bind(vehicle_id)
    .bind(service_id)
    .bind(start_time)
    .bind(duration_minutes)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Appointment created: id={}, start={}", id, start_time);
    Ok(InsertOutcome::Created(appointment))
}

/// Moves an appointment from `expected_status` to `status` in one guarded
/// write. The status column doubles as the compare-and-swap token: if a
/// concurrent transition already moved the row, the WHERE clause matches
/// nothing and `None` comes back, so two legal transitions from the same
/// state can never both win.
pub async fn update_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: &str,
    expected_status: &str,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET status = $2
        WHERE id = $1 AND status = $3
        RETURNING id, client_id, vehicle_id, service_id, start_time, duration_minutes, status, created_at
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(expected_status)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}
