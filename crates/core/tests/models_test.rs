use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use uuid::Uuid;

use turnos_core::models::booking::{AppointmentResponse, BookAppointmentRequest};
use turnos_core::models::reservation::{Reservation, ReservationStatus};
use turnos_core::models::service::Service;

use ReservationStatus::*;

fn reservation() -> Reservation {
    Reservation {
        id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        vehicle_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        start_time: Utc::now(),
        duration_minutes: 45,
        status: Requested,
        created_at: Utc::now(),
    }
}

#[rstest]
#[case(Requested, Confirmed)]
#[case(Requested, Cancelled)]
#[case(Confirmed, InProgress)]
#[case(Confirmed, Cancelled)]
#[case(Confirmed, NoShow)]
#[case(InProgress, Done)]
fn legal_transitions_are_accepted(#[case] from: ReservationStatus, #[case] to: ReservationStatus) {
    assert_eq!(from.transition_to(to).unwrap(), to);
}

#[rstest]
#[case(Requested, InProgress)]
#[case(Requested, Done)]
#[case(Requested, NoShow)]
#[case(Confirmed, Done)]
#[case(InProgress, Cancelled)]
#[case(Done, Confirmed)]
#[case(Cancelled, Requested)]
#[case(NoShow, Confirmed)]
#[case(Done, Done)]
fn illegal_transitions_are_rejected(
    #[case] from: ReservationStatus,
    #[case] to: ReservationStatus,
) {
    assert!(from.transition_to(to).is_err());
}

#[test]
fn only_cancelled_frees_its_interval() {
    assert!(Requested.occupies());
    assert!(Confirmed.occupies());
    assert!(InProgress.occupies());
    assert!(Done.occupies());
    assert!(NoShow.occupies());
    assert!(!Cancelled.occupies());
}

#[test]
fn terminal_statuses_have_no_outgoing_transitions() {
    for terminal in [Done, Cancelled, NoShow] {
        assert!(terminal.is_terminal());
        for next in [Requested, Confirmed, InProgress, Done, Cancelled, NoShow] {
            assert!(!terminal.can_transition_to(next));
        }
    }
    assert!(!Requested.is_terminal());
    assert!(!Confirmed.is_terminal());
    assert!(!InProgress.is_terminal());
}

#[rstest]
#[case(Requested, "requested")]
#[case(Confirmed, "confirmed")]
#[case(InProgress, "in_progress")]
#[case(Done, "done")]
#[case(Cancelled, "cancelled")]
#[case(NoShow, "no_show")]
fn status_string_mapping_round_trips(#[case] status: ReservationStatus, #[case] text: &str) {
    assert_eq!(status.as_str(), text);
    assert_eq!(text.parse::<ReservationStatus>().unwrap(), status);
    // The serde representation matches the column values.
    assert_eq!(to_string(&status).unwrap(), format!("\"{text}\""));
}

#[test]
fn unknown_status_string_is_rejected() {
    assert!("double_parked".parse::<ReservationStatus>().is_err());
}

#[test]
fn test_reservation_serialization() {
    let reservation = reservation();

    let json = to_string(&reservation).expect("Failed to serialize reservation");
    let deserialized: Reservation = from_str(&json).expect("Failed to deserialize reservation");

    assert_eq!(deserialized.id, reservation.id);
    assert_eq!(deserialized.start_time, reservation.start_time);
    assert_eq!(deserialized.duration_minutes, reservation.duration_minutes);
    assert_eq!(deserialized.status, reservation.status);
}

#[test]
fn test_book_appointment_request_serialization() {
    let request = BookAppointmentRequest {
        client_id: Uuid::new_v4(),
        vehicle_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        start_time: Utc::now(),
    };

    let json = to_string(&request).expect("Failed to serialize booking request");
    let deserialized: BookAppointmentRequest =
        from_str(&json).expect("Failed to deserialize booking request");

    assert_eq!(deserialized.client_id, request.client_id);
    assert_eq!(deserialized.vehicle_id, request.vehicle_id);
    assert_eq!(deserialized.service_id, request.service_id);
    assert_eq!(deserialized.start_time, request.start_time);
}

#[test]
fn appointment_response_carries_computed_end_time() {
    let reservation = reservation();
    let expected_end = reservation.start_time + Duration::minutes(45);

    let response = AppointmentResponse::from(reservation.clone());

    assert_eq!(response.id, reservation.id);
    assert_eq!(response.start_time, reservation.start_time);
    assert_eq!(response.end_time, expected_end);
    assert_eq!(response.status, Requested);
}

#[test]
fn test_service_serialization() {
    let service = Service {
        id: Uuid::new_v4(),
        name: "Oil change".to_string(),
        duration_minutes: 30,
    };

    let json = to_string(&service).expect("Failed to serialize service");
    let deserialized: Service = from_str(&json).expect("Failed to deserialize service");

    assert_eq!(deserialized.id, service.id);
    assert_eq!(deserialized.name, service.name);
    assert_eq!(deserialized.duration_minutes, service.duration_minutes);
}
