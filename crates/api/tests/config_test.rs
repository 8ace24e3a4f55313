use pretty_assertions::assert_eq;
use turnos_api::config::ApiConfig;

// Env mutation is process-wide, so all config assertions live in one test.
#[test]
fn config_loads_scheduling_settings_with_defaults() {
    unsafe {
        std::env::set_var("DATABASE_URL", "postgres://localhost/turnos_test");
        std::env::remove_var("API_HOST");
        std::env::remove_var("API_PORT");
        std::env::remove_var("OPENING_HOURS");
        std::env::remove_var("BOOKING_UTC_OFFSET_MINUTES");
        std::env::remove_var("BOOKING_GRANULARITY_MINUTES");
    }

    let config = ApiConfig::from_env().expect("config should load");
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.utc_offset_minutes, -180);
    assert_eq!(config.granularity_minutes, 30);

    // Defaults build a working generator for the workshop schedule.
    let generator = config.slot_generator().expect("generator should build");
    assert_eq!(generator.clock().utc_offset_minutes(), -180);

    // Overridden scheduling settings are honored.
    unsafe {
        std::env::set_var("BOOKING_UTC_OFFSET_MINUTES", "120");
        std::env::set_var("BOOKING_GRANULARITY_MINUTES", "15");
    }
    let config = ApiConfig::from_env().expect("config should load");
    assert_eq!(config.utc_offset_minutes, 120);
    assert_eq!(config.granularity_minutes, 15);

    // A malformed opening-hours table is rejected instead of half-applied.
    unsafe {
        std::env::set_var("OPENING_HOURS", "{\"days\": \"not a table\"}");
    }
    let config = ApiConfig::from_env().expect("config should load");
    assert!(config.slot_generator().is_err());

    unsafe {
        std::env::remove_var("OPENING_HOURS");
        std::env::remove_var("BOOKING_UTC_OFFSET_MINUTES");
        std::env::remove_var("BOOKING_GRANULARITY_MINUTES");
    }
}
