// GPIO-Initialisierung für Sensor und Anzeige
//
// esp-hal implementiert die embedded-hal Digital-Traits für Input/Output
// (Error = Infallible), daher passen die Pins direkt in die esp-core Adapter.

use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::peripherals::{GPIO2, GPIO3, GPIO4, GPIO10};

use esp_core::{PullUpSensor, RgbIndicator};

/// Anzeige auf GPIO2 (Rot), GPIO3 (Grün), GPIO10 (Blau)
pub type Esp32Indicator<'a> = RgbIndicator<Output<'a>, Output<'a>, Output<'a>>;

/// Belegungssensor auf GPIO4
pub type Esp32Sensor<'a> = PullUpSensor<Input<'a>>;

/// Konfiguriert die drei Kanäle als Ausgang
///
/// Alle Ausgänge starten mit Low-Pegel (Anzeige aus).
pub fn init_indicator<'a>(
    red: GPIO2<'a>,
    green: GPIO3<'a>,
    blue: GPIO10<'a>,
) -> Esp32Indicator<'a> {
    RgbIndicator::new(
        Output::new(red, Level::Low, OutputConfig::default()),
        Output::new(green, Level::Low, OutputConfig::default()),
        Output::new(blue, Level::Low, OutputConfig::default()),
    )
}

/// Konfiguriert den Sensor als Eingang mit internem Pull-up
///
/// Ein offener Sensor liest damit High statt zu floaten.
pub fn init_sensor<'a>(sensor: GPIO4<'a>) -> Esp32Sensor<'a> {
    let config = InputConfig::default().with_pull(Pull::Up);
    PullUpSensor::new(Input::new(sensor, config))
}
