use async_trait::async_trait;

use turnos_core::models::reservation::Reservation;
use turnos_core::notify::BookingNotifier;

/// Logs confirmations instead of delivering them. The production dispatcher
/// (WhatsApp) runs as a separate collaborator that plugs in through the same
/// trait.
pub struct LogNotifier;

#[async_trait]
impl BookingNotifier for LogNotifier {
    async fn on_booking_confirmed(&self, reservation: &Reservation) -> eyre::Result<()> {
        tracing::info!(
            appointment_id = %reservation.id,
            client_id = %reservation.client_id,
            start_time = %reservation.start_time,
            "booking confirmed, notification queued"
        );
        Ok(())
    }
}
