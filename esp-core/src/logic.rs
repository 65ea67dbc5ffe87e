//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{BLUE_ONLY, ChannelLevels, GREEN_ONLY, OFF, Occupancy, RED_ONLY, WHITE};

/// Farbsequenz des Start-Selbsttests
pub const SELF_TEST_SEQUENCE: [ChannelLevels; 5] = [RED_ONLY, GREEN_ONLY, BLUE_ONLY, WHITE, OFF];

/// Bildet den Belegungszustand auf das Anzeige-Muster ab
///
/// # Beispiele
///
/// ```
/// # use esp_core::{pattern_for, Occupancy, RED_ONLY, GREEN_ONLY};
/// assert_eq!(pattern_for(Occupancy::Occupied), RED_ONLY);
/// assert_eq!(pattern_for(Occupancy::Free), GREEN_ONLY);
/// ```
pub const fn pattern_for(occupancy: Occupancy) -> ChannelLevels {
    match occupancy {
        Occupancy::Occupied => RED_ONLY,
        Occupancy::Free => GREEN_ONLY,
    }
}

/// Farbname für Logs
pub const fn color_name(levels: ChannelLevels) -> &'static str {
    match (levels.r, levels.g, levels.b) {
        (true, false, false) => "Rot",
        (false, true, false) => "Grün",
        (false, false, true) => "Blau",
        (true, true, true) => "Weiß",
        (false, false, false) => "Aus",
        _ => "Gemischt",
    }
}

/// Parst eine Millisekunden-Angabe zur Compile-Zeit
///
/// Gibt `None` zurück bei leerem String, Nicht-Ziffern, Überlauf oder 0.
pub const fn parse_millis(value: &str) -> Option<u64> {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            return None;
        }
        result = match result.checked_mul(10) {
            Some(v) => match v.checked_add((digit - b'0') as u64) {
                Some(v) => v,
                None => return None,
            },
            None => return None,
        };
        i += 1;
    }

    if result == 0 { None } else { Some(result) }
}

/// Iterator über die Schritte des Start-Selbsttests
///
/// Liefert die Sequenz genau einmal; die Firmware hält jede Farbe
/// für `SELF_TEST_STEP_MS`.
#[derive(Debug, Clone, Default)]
pub struct SelfTest {
    index: usize,
}

impl SelfTest {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for SelfTest {
    type Item = ChannelLevels;

    fn next(&mut self) -> Option<Self::Item> {
        let levels = SELF_TEST_SEQUENCE.get(self.index).copied()?;
        self.index += 1;
        Some(levels)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SELF_TEST_SEQUENCE.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SelfTest {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_for_occupied_is_red_only() {
        assert_eq!(pattern_for(Occupancy::Occupied), RED_ONLY);
    }

    #[test]
    fn test_pattern_for_free_is_green_only() {
        assert_eq!(pattern_for(Occupancy::Free), GREEN_ONLY);
    }

    #[test]
    fn test_blue_never_lit_in_steady_state() {
        assert!(!pattern_for(Occupancy::Occupied).b);
        assert!(!pattern_for(Occupancy::Free).b);
    }

    #[test]
    fn test_color_name() {
        assert_eq!(color_name(RED_ONLY), "Rot");
        assert_eq!(color_name(GREEN_ONLY), "Grün");
        assert_eq!(color_name(WHITE), "Weiß");
        assert_eq!(color_name(OFF), "Aus");
        assert_eq!(
            color_name(ChannelLevels {
                r: true,
                g: true,
                b: false
            }),
            "Gemischt"
        );
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("1"), Some(1));
        assert_eq!(parse_millis("250"), Some(250));
        assert_eq!(parse_millis("0"), None);
        assert_eq!(parse_millis(""), None);
        assert_eq!(parse_millis("10ms"), None);
        assert_eq!(parse_millis("-5"), None);
        assert_eq!(parse_millis("99999999999999999999999"), None);
    }

    #[test]
    fn test_self_test_runs_sequence_once() {
        let mut steps = SelfTest::new();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps.next(), Some(RED_ONLY));
        assert_eq!(steps.next(), Some(GREEN_ONLY));
        assert_eq!(steps.next(), Some(BLUE_ONLY));
        assert_eq!(steps.next(), Some(WHITE));
        assert_eq!(steps.next(), Some(OFF));
        assert_eq!(steps.next(), None);
        assert_eq!(steps.len(), 0);
    }
}
