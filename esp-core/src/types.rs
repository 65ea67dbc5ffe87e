//! Core Types für die Sitzbelegungs-Anzeige
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB;

/// Pegel der drei Kanäle (an/aus pro Kanal)
pub type ChannelLevels = RGB<bool>;

/// Nur Rot an - Sitz belegt
pub const RED_ONLY: ChannelLevels = RGB {
    r: true,
    g: false,
    b: false,
};

/// Nur Grün an - Sitz frei
pub const GREEN_ONLY: ChannelLevels = RGB {
    r: false,
    g: true,
    b: false,
};

pub const BLUE_ONLY: ChannelLevels = RGB {
    r: false,
    g: false,
    b: true,
};

pub const WHITE: ChannelLevels = RGB {
    r: true,
    g: true,
    b: true,
};

/// Alle Kanäle aus (Zustand vor dem ersten Sample)
pub const OFF: ChannelLevels = RGB {
    r: false,
    g: false,
    b: false,
};

/// Belegungszustand, abgeleitet aus dem Pegel des Sensor-Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Free,
    Occupied,
}

impl Occupancy {
    /// High-Pegel bedeutet "belegt"
    pub const fn from_level(is_high: bool) -> Self {
        if is_high {
            Self::Occupied
        } else {
            Self::Free
        }
    }

    pub const fn is_occupied(self) -> bool {
        matches!(self, Self::Occupied)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Free => "Frei",
            Self::Occupied => "Belegt",
        }
    }
}

/// Einer der drei unabhängig angesteuerten Ausgänge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Feste Schreib-Reihenfolge: Rot, dann Grün, dann Blau
    pub const WRITE_ORDER: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Liefert den Pegel dieses Kanals aus einem Muster
    pub const fn level(self, levels: ChannelLevels) -> bool {
        match self {
            Channel::Red => levels.r,
            Channel::Green => levels.g,
            Channel::Blue => levels.b,
        }
    }
}

/// Betriebsart beim Start
///
/// `SelfTest` spielt einmal die Farbsequenz Rot → Grün → Blau → Weiß → Aus ab,
/// bevor die normale Belegungs-Schleife startet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartupMode {
    #[default]
    Normal,
    SelfTest,
}

impl StartupMode {
    /// Parst den Build-Zeit-Wert (`normal` oder `self-test`)
    ///
    /// `const fn`, damit die Firmware den Wert zur Compile-Zeit auswerten kann.
    pub const fn parse(value: &str) -> Option<Self> {
        if bytes_eq(value.as_bytes(), b"normal") {
            Some(Self::Normal)
        } else if bytes_eq(value.as_bytes(), b"self-test") {
            Some(Self::SelfTest)
        } else {
            None
        }
    }
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Ergebnis einer Schleifen-Iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub occupancy: Occupancy,
    pub levels: ChannelLevels,
    /// true wenn sich der Zustand gegenüber der vorherigen Iteration geändert hat
    pub changed: bool,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Occupancy {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        let name = match self {
            Channel::Red => "Rot",
            Channel::Green => "Grün",
            Channel::Blue => "Blau",
        };
        defmt::write!(fmt, "{=str}", name)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StartupMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            StartupMode::Normal => defmt::write!(fmt, "Normal"),
            StartupMode::SelfTest => defmt::write!(fmt, "SelfTest"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StepReport {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StepReport {{ occupancy: {}, rgb: ({}, {}, {}), changed: {} }}",
            self.occupancy,
            self.levels.r,
            self.levels.g,
            self.levels.b,
            self.changed
        )
    }
}
