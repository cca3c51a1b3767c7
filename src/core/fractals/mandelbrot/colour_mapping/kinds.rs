use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MandelbrotColourMapKinds {
    #[default]
    SineHue,
    IterationBands,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::SineHue, Self::IterationBands];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SineHue => "Sine hue",
            Self::IterationBands => "Iteration bands",
        }
    }

    /// Name accepted on the command line and in config files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SineHue => "sine-hue",
            Self::IterationBands => "iteration-bands",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl std::str::FromStr for MandelbrotColourMapKinds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| format!("unknown colour map '{s}'"))
    }
}
