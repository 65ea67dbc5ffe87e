// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und defmt-Ausgabe
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_sitzbelegung::config::{
    BLUE_GPIO_PIN, GREEN_GPIO_PIN, POLL_INTERVAL_MS, RED_GPIO_PIN, SENSOR_GPIO_PIN, STARTUP_MODE,
};
use esp_sitzbelegung::tasks::occupancy_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt den Belegungs-Task.
/// Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!(
        "Sitzbelegung: Sensor GPIO{}, RGB GPIO{}/{}/{}, Intervall {} ms, Modus {}",
        SENSOR_GPIO_PIN, RED_GPIO_PIN, GREEN_GPIO_PIN, BLUE_GPIO_PIN, POLL_INTERVAL_MS, STARTUP_MODE
    );

    // Spawn Belegungs-Task (Sensor GPIO4, Rot GPIO2, Grün GPIO3, Blau GPIO10)
    spawner
        .spawn(occupancy_task(
            peripherals.GPIO4,
            peripherals.GPIO2,
            peripherals.GPIO3,
            peripherals.GPIO10,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
