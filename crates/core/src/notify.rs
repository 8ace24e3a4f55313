use async_trait::async_trait;

use crate::models::reservation::Reservation;

/// Outbound seam for booking confirmations. The real dispatcher (WhatsApp
/// messaging) lives outside this service; implementations are invoked
/// fire-and-forget after a successful commit and a failure here must never
/// roll back the booking.
#[async_trait]
pub trait BookingNotifier: Send + Sync {
    async fn on_booking_confirmed(&self, reservation: &Reservation) -> eyre::Result<()>;
}
