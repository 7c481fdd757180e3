use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
pub enum MandelbrotColourMapKinds {
    #[serde(rename = "fire")]
    #[value(name = "fire")]
    FireGradient,
    #[serde(rename = "blue-white")]
    #[value(name = "blue-white")]
    BlueWhiteGradient,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }
}

impl Default for MandelbrotColourMapKinds {
    fn default() -> Self {
        Self::FireGradient
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
