//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Sensor und Anzeige
//! ohne konkrete Implementierung.

use crate::types::{Channel, ChannelLevels, Occupancy};

/// Fehler-Typ für Pin-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorError {
    /// Sensor-Pin konnte nicht gelesen werden
    SensorReadFailed,
    /// Schreiben auf den Ausgang dieses Kanals ist fehlgeschlagen
    WriteFailed(Channel),
}

/// Trait für die dreikanalige Anzeige
///
/// # Implementierungen
/// - **Production:** RgbIndicator über esp-hal `Output` Pins
/// - **Testing:** MockIndicatorWriter (in-memory Mock)
pub trait IndicatorWriter {
    /// Schreibt die drei Kanäle in der Reihenfolge Rot, Grün, Blau
    ///
    /// # Fehlerbehandlung
    /// Bricht beim ersten fehlgeschlagenen Kanal mit
    /// `IndicatorError::WriteFailed` ab. Bereits geschriebene Kanäle bleiben gesetzt.
    fn set_rgb(&mut self, levels: ChannelLevels) -> Result<(), IndicatorError>;
}

/// Trait für den Belegungssensor
pub trait OccupancySource {
    /// Liest den momentanen Pegel und leitet den Belegungszustand ab
    fn sample(&mut self) -> Result<Occupancy, IndicatorError>;
}

#[cfg(feature = "defmt")]
impl defmt::Format for IndicatorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            IndicatorError::SensorReadFailed => defmt::write!(fmt, "SensorReadFailed"),
            IndicatorError::WriteFailed(channel) => {
                defmt::write!(fmt, "WriteFailed({})", channel)
            }
        }
    }
}
