use std::fmt;

/// Why a pipeline run happened. Only affects the header of the delivered digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Evening,
    Manual,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Evening => "evening",
            Period::Manual => "manual",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
