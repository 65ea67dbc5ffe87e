// Belegungs-Task - Liest den Sitzsensor und steuert die RGB-Anzeige
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::{GPIO2, GPIO3, GPIO4, GPIO10};

use crate::config::{POLL_INTERVAL_MS, SELF_TEST_STEP_MS, STARTUP_MODE};
use crate::hal::{init_indicator, init_sensor};
use crate::{
    IndicatorError, IndicatorWriter, OccupancyLoop, OccupancySource, SelfTest, StartupMode,
    color_name,
};

/// Belegungs-Logik - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// 1. Anzeige aus (definierter Zustand vor dem ersten Sample)
/// 2. Optional: Selbsttest (Rot → Grün → Blau → Weiß → Aus)
/// 3. Endlos: Sensor lesen, Rot (belegt) oder Grün (frei) setzen, `poll_interval` warten
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben esp-hal Pins im Production-Code
/// und Mocks in Tests.
///
/// # Panics
/// Wenn die Anzeige beim Start nicht ausgeschaltet werden kann.
pub async fn occupancy_logic<S, W>(
    sensor: S,
    indicator: W,
    mode: StartupMode,
    poll_interval: Duration,
) -> !
where
    S: OccupancySource,
    W: IndicatorWriter,
{
    let mut control = OccupancyLoop::new(sensor, indicator);

    if let Err(e) = control.init() {
        panic!("Anzeige konnte nicht initialisiert werden: {:?}", e);
    }

    if mode == StartupMode::SelfTest {
        run_self_test(control.indicator_mut()).await;
    }

    info!(
        "Belegung: Schleife gestartet (Intervall {} ms)",
        poll_interval.as_millis()
    );

    // Nur Zustandswechsel loggen, nicht jedes Sample
    let mut last_error: Option<IndicatorError> = None;

    loop {
        match control.step() {
            Ok(report) => {
                if report.changed {
                    info!(
                        "Sitz: {} -> {}",
                        report.occupancy,
                        color_name(report.levels)
                    );
                }
                last_error = None;
            }
            Err(e) => {
                if last_error != Some(e) {
                    error!("Belegung: Iteration fehlgeschlagen: {}", e);
                }
                last_error = Some(e);
            }
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(poll_interval).await;
    }
}

/// Spielt die Selbsttest-Sequenz einmal ab
async fn run_self_test<W: IndicatorWriter>(indicator: &mut W) {
    info!("Selbsttest: Start");
    for levels in SelfTest::new() {
        info!("Selbsttest: {}", color_name(levels));
        if let Err(e) = indicator.set_rgb(levels) {
            error!("Selbsttest: Schreiben fehlgeschlagen: {}", e);
        }
        Timer::after(Duration::from_millis(SELF_TEST_STEP_MS)).await;
    }
    info!("Selbsttest: Ende");
}

/// Belegungs-Task - Embassy Task
///
/// Übernimmt die GPIO-Initialisierung und ruft dann
/// die testbare `occupancy_logic()` Funktion auf.
///
/// # Parameter
/// - `sensor`: GPIO4 (Eingang mit Pull-up)
/// - `red`, `green`, `blue`: GPIO2, GPIO3, GPIO10 (Ausgänge, active-high)
#[embassy_executor::task]
pub async fn occupancy_task(
    sensor: GPIO4<'static>,
    red: GPIO2<'static>,
    green: GPIO3<'static>,
    blue: GPIO10<'static>,
) {
    let sensor = init_sensor(sensor);
    let indicator = init_indicator(red, green, blue);

    occupancy_logic(
        sensor,
        indicator,
        STARTUP_MODE,
        Duration::from_millis(POLL_INTERVAL_MS),
    )
    .await
}
