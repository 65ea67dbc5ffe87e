// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    ChannelLevels, IndicatorError, IndicatorWriter, Occupancy, OccupancyLoop, OccupancySource,
    SelfTest, StartupMode, color_name, pattern_for,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal, esp-rtos).
// Die komplette Logik liegt deshalb in esp-core und wird auf dem Host getestet:
//
// - esp-core: Unit Tests pro Modul (#[cfg(test)])
// - esp-tests: Integration Tests mit Mock-Pins (embedded-hal Traits)
//
// Hier bleibt nur die Verdrahtung: GPIO-Konfiguration (hal/pins.rs) und
// das Timing der Schleife (tasks/occupancy.rs).
