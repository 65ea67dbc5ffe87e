// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul konfiguriert die esp-hal GPIOs und verpackt sie in die
// hardware-unabhängigen Adapter aus esp-core.

pub mod pins;

pub use pins::{Esp32Indicator, Esp32Sensor, init_indicator, init_sensor};
