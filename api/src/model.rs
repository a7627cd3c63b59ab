//! Wire types shared between the dashboard client and the server functions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One playlist as served to the dashboard.
///
/// Field names are the wire format; response order is display order and the
/// client never re-sorts. The three feature sequences hold one value per
/// track, each in 0.0–1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub name: String,
    /// Mean track tempo in BPM, displayed verbatim.
    pub tempo: f64,
    /// Modal inferred mood, displayed verbatim.
    pub mood: String,
    pub valences: Vec<f64>,
    pub energies: Vec<f64>,
    pub danceabilities: Vec<f64>,
}

/// Server-held display mode. The client reads it once per page load and only
/// changes it through `switch_mode` followed by a full reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    Spectrum,
    #[default]
    Bars,
}

impl Serialize for DisplayMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// The wire format is the bare label; anything unrecognised decodes to
// `Bars`, matching `from_label`.
impl<'de> Deserialize<'de> for DisplayMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

impl DisplayMode {
    /// Any label other than `Spectrum` selects `Bars`, keeping the
    /// chart-kind branch downstream binary and exhaustive.
    pub fn from_label(label: &str) -> Self {
        if label == "Spectrum" {
            Self::Spectrum
        } else {
            Self::Bars
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spectrum => "Spectrum",
            Self::Bars => "Bars",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Spectrum => Self::Bars,
            Self::Bars => Self::Spectrum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayMode;

    #[test]
    fn spectrum_label_parses_to_spectrum() {
        assert_eq!(DisplayMode::from_label("Spectrum"), DisplayMode::Spectrum);
    }

    #[test]
    fn any_other_label_parses_to_bars() {
        assert_eq!(DisplayMode::from_label("Bars"), DisplayMode::Bars);
        assert_eq!(DisplayMode::from_label("spectrum"), DisplayMode::Bars);
        assert_eq!(DisplayMode::from_label(""), DisplayMode::Bars);
        assert_eq!(DisplayMode::from_label("Waveform"), DisplayMode::Bars);
    }

    #[test]
    fn toggling_twice_returns_to_the_start() {
        for mode in [DisplayMode::Spectrum, DisplayMode::Bars] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn mode_serialises_to_its_bare_label() {
        let json = serde_json::to_string(&DisplayMode::Spectrum).unwrap();
        assert_eq!(json, "\"Spectrum\"");
    }

    #[test]
    fn unknown_wire_labels_decode_to_bars() {
        let mode: DisplayMode = serde_json::from_str("\"Waveform\"").unwrap();
        assert_eq!(mode, DisplayMode::Bars);

        let mode: DisplayMode = serde_json::from_str("\"Spectrum\"").unwrap();
        assert_eq!(mode, DisplayMode::Spectrum);
    }
}
