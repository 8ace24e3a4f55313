use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use turnos_core::models::reservation::ReservationStatus;
use turnos_db::mock::repositories::MockAppointmentRepo;
use turnos_db::models::DbAppointment;

fn appointment_row(status: &str) -> DbAppointment {
    DbAppointment {
        id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        vehicle_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        start_time: Utc::now(),
        duration_minutes: 30,
        status: status.to_string(),
        created_at: Utc::now(),
    }
}

#[test]
fn appointment_row_maps_to_reservation() {
    let row = appointment_row("confirmed");
    let id = row.id;

    let reservation = row.into_reservation().expect("row should map");

    assert_eq!(reservation.id, id);
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(reservation.duration_minutes, 30);
    assert_eq!(
        reservation.end_time(),
        reservation.start_time + Duration::minutes(30)
    );
}

#[test]
fn unknown_status_column_is_rejected() {
    let row = appointment_row("double_parked");

    assert!(row.into_reservation().is_err());
}

// Contract mirrored by the mocks: a status update whose precondition went
// stale matches no row, and consumers must treat that as a lost race rather
// than retry the write. The race itself runs against a live Postgres in
// repositories_test.rs.
#[tokio::test]
async fn stale_status_precondition_returns_no_row() {
    let id = Uuid::new_v4();

    let mut repo = MockAppointmentRepo::new();
    let mut rows = vec![Ok(None), Ok(Some(appointment_row("confirmed")))];
    repo.expect_update_status()
        .times(2)
        .returning(move |_, _, _| rows.pop().unwrap());

    let winner = repo.update_status(id, "confirmed", "requested").await.unwrap();
    let loser = repo.update_status(id, "cancelled", "requested").await.unwrap();

    assert!(winner.is_some());
    assert!(loser.is_none());
}
