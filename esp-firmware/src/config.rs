// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Die GPIO-Nummern sind informativ (Logs, Doku). Die eigentliche Zuordnung
// passiert in main.rs über die esp-hal Peripherals (GPIO4, GPIO2, GPIO3, GPIO10).

use esp_core::{StartupMode, parse_millis};

// ============================================================================
// Pin-Zuordnung
// ============================================================================

/// GPIO-Pin des Belegungssensors (Eingang, interner Pull-up)
pub const SENSOR_GPIO_PIN: u8 = 4;

/// GPIO-Pin des roten Kanals (active-high)
pub const RED_GPIO_PIN: u8 = 2;

/// GPIO-Pin des grünen Kanals (active-high)
pub const GREEN_GPIO_PIN: u8 = 3;

/// GPIO-Pin des blauen Kanals (active-high)
pub const BLUE_GPIO_PIN: u8 = 10;

// ============================================================================
// Timing
// ============================================================================

/// Poll-Intervall der Belegungs-Schleife in Millisekunden
/// Wird zur Build-Zeit aus POLL_INTERVAL_MS geladen (build.rs, Default 1)
pub const POLL_INTERVAL_MS: u64 = match parse_millis(env!("POLL_INTERVAL_MS")) {
    Some(ms) => ms,
    None => panic!("POLL_INTERVAL_MS muss eine positive Ganzzahl sein"),
};

/// Haltezeit pro Farbe im Selbsttest in Millisekunden
pub const SELF_TEST_STEP_MS: u64 = 500;

// ============================================================================
// Startmodus
// ============================================================================

/// Startmodus: `normal` oder `self-test`
/// Wird zur Build-Zeit aus STARTUP_MODE geladen (build.rs, Default normal)
pub const STARTUP_MODE: StartupMode = match StartupMode::parse(env!("STARTUP_MODE")) {
    Some(mode) => mode,
    None => panic!("STARTUP_MODE muss 'normal' oder 'self-test' sein"),
};
