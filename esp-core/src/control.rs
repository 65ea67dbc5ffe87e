//! Belegungs-Schleife ohne Timing
//!
//! Eine Iteration = Sensor lesen, Muster bestimmen, Anzeige schreiben.
//! Die Wartezeit zwischen den Iterationen liegt beim Aufrufer
//! (Firmware: `embassy_time::Timer`, Tests: gar keine).

use crate::logic::pattern_for;
use crate::traits::{IndicatorError, IndicatorWriter, OccupancySource};
use crate::types::{OFF, Occupancy, StepReport};

pub struct OccupancyLoop<S, W> {
    sensor: S,
    indicator: W,
    occupancy: Option<Occupancy>,
}

impl<S, W> OccupancyLoop<S, W>
where
    S: OccupancySource,
    W: IndicatorWriter,
{
    pub fn new(sensor: S, indicator: W) -> Self {
        Self {
            sensor,
            indicator,
            occupancy: None,
        }
    }

    /// Setzt die Anzeige vor dem ersten Sample auf einen definierten Zustand (aus)
    pub fn init(&mut self) -> Result<(), IndicatorError> {
        self.occupancy = None;
        self.indicator.set_rgb(OFF)
    }

    /// Eine Iteration der Schleife
    ///
    /// Kein Debouncing: jedes Sample wirkt sofort auf die Anzeige.
    /// Bei einem Lese- oder Schreibfehler bleibt der zuletzt angezeigte
    /// Zustand gespeichert.
    pub fn step(&mut self) -> Result<StepReport, IndicatorError> {
        let occupancy = self.sensor.sample()?;
        let levels = pattern_for(occupancy);
        self.indicator.set_rgb(levels)?;

        // Erst nach erfolgreichem Schreiben übernehmen, sonst geht der Wechsel verloren
        let changed = self.occupancy != Some(occupancy);
        self.occupancy = Some(occupancy);

        Ok(StepReport {
            occupancy,
            levels,
            changed,
        })
    }

    /// Zuletzt erfolgreich angezeigter Zustand, `None` vor der ersten Iteration
    pub fn occupancy(&self) -> Option<Occupancy> {
        self.occupancy
    }

    /// Direkter Zugriff auf die Anzeige (z.B. für den Selbsttest)
    pub fn indicator_mut(&mut self) -> &mut W {
        &mut self.indicator
    }

    pub fn into_parts(self) -> (S, W) {
        (self.sensor, self.indicator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChannelLevels, GREEN_ONLY, RED_ONLY};

    struct FixedSensor(bool);

    impl OccupancySource for FixedSensor {
        fn sample(&mut self) -> Result<Occupancy, IndicatorError> {
            Ok(Occupancy::from_level(self.0))
        }
    }

    #[derive(Default)]
    struct LastWrite(Option<ChannelLevels>);

    impl IndicatorWriter for LastWrite {
        fn set_rgb(&mut self, levels: ChannelLevels) -> Result<(), IndicatorError> {
            self.0 = Some(levels);
            Ok(())
        }
    }

    #[test]
    fn test_init_switches_off() {
        let mut control = OccupancyLoop::new(FixedSensor(true), LastWrite::default());
        control.init().unwrap();
        assert_eq!(control.indicator_mut().0, Some(OFF));
        assert_eq!(control.occupancy(), None);
    }

    #[test]
    fn test_step_high_is_red() {
        let mut control = OccupancyLoop::new(FixedSensor(true), LastWrite::default());
        let report = control.step().unwrap();
        assert_eq!(report.occupancy, Occupancy::Occupied);
        assert_eq!(report.levels, RED_ONLY);
        assert!(report.changed);
        assert_eq!(control.indicator_mut().0, Some(RED_ONLY));
    }

    #[test]
    fn test_step_low_is_green() {
        let mut control = OccupancyLoop::new(FixedSensor(false), LastWrite::default());
        let report = control.step().unwrap();
        assert_eq!(report.levels, GREEN_ONLY);
        assert_eq!(control.occupancy(), Some(Occupancy::Free));
    }

    #[test]
    fn test_changed_only_on_first_of_stable_samples() {
        let mut control = OccupancyLoop::new(FixedSensor(false), LastWrite::default());
        assert!(control.step().unwrap().changed);
        assert!(!control.step().unwrap().changed);
        assert!(!control.step().unwrap().changed);
    }
}
