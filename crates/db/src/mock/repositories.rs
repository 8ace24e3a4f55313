use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAppointment, DbClient, DbService, DbVehicle};
use crate::repositories::appointment::InsertOutcome;

// Mock repositories for testing
mock! {
    pub AppointmentRepo {
        pub async fn list_in_range(
            &self,
            from: DateTime<Utc>,
            to: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn get_appointment_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn insert_if_free(
            &self,
            client_id: Uuid,
            vehicle_id: Uuid,
            service_id: Uuid,
            start_time: DateTime<Utc>,
            duration_minutes: i32,
        ) -> eyre::Result<InsertOutcome>;

        pub async fn update_status(
            &self,
            id: Uuid,
            status: &'static str,
            expected_status: &'static str,
        ) -> eyre::Result<Option<DbAppointment>>;
    }
}

mock! {
    pub CatalogRepo {
        pub async fn get_service_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn list_services(&self) -> eyre::Result<Vec<DbService>>;

        pub async fn get_client_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbClient>>;

        pub async fn get_vehicle_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbVehicle>>;
    }
}
