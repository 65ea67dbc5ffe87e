//! Pin-Adapter über embedded-hal
//!
//! Verbinden beliebige `embedded_hal::digital` Pins mit den Traits aus
//! [`crate::traits`]. Auf dem ESP32-C6 sind das die esp-hal `Input`/`Output`
//! Typen, in Tests Mock-Pins.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::traits::{IndicatorError, IndicatorWriter, OccupancySource};
use crate::types::{Channel, ChannelLevels, OFF, Occupancy};

/// Dreikanalige Anzeige aus drei active-high Ausgängen
pub struct RgbIndicator<R, G, B> {
    red: R,
    green: G,
    blue: B,
    /// Zuletzt vollständig geschriebenes Muster
    current: ChannelLevels,
}

impl<R, G, B> RgbIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    /// Erstellt die Anzeige
    ///
    /// Die Pins müssen bereits als Ausgang mit Low-Pegel konfiguriert sein,
    /// daher startet der Schatten-Zustand mit `OFF`.
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self {
            red,
            green,
            blue,
            current: OFF,
        }
    }

    /// Zuletzt erfolgreich geschriebenes Muster
    pub fn current(&self) -> ChannelLevels {
        self.current
    }

    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn write_channel(&mut self, channel: Channel, on: bool) -> Result<(), IndicatorError> {
        let state = PinState::from(on);
        let result = match channel {
            Channel::Red => self.red.set_state(state).map_err(|_| ()),
            Channel::Green => self.green.set_state(state).map_err(|_| ()),
            Channel::Blue => self.blue.set_state(state).map_err(|_| ()),
        };
        result.map_err(|_| IndicatorError::WriteFailed(channel))
    }
}

impl<R, G, B> IndicatorWriter for RgbIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    fn set_rgb(&mut self, levels: ChannelLevels) -> Result<(), IndicatorError> {
        for channel in Channel::WRITE_ORDER {
            self.write_channel(channel, channel.level(levels))?;
        }
        self.current = levels;
        Ok(())
    }
}

/// Belegungssensor an einem Eingang mit internem Pull-up
///
/// Ein offener Sensor liest dadurch High und gilt als belegt.
pub struct PullUpSensor<P> {
    pin: P,
}

impl<P: InputPin> PullUpSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> OccupancySource for PullUpSensor<P> {
    fn sample(&mut self) -> Result<Occupancy, IndicatorError> {
        self.pin
            .is_high()
            .map(Occupancy::from_level)
            .map_err(|_| IndicatorError::SensorReadFailed)
    }
}
