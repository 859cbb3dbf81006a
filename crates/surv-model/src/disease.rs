//! Disease and region selectors.
//!
//! Both selectors are closed sets chosen by the user before any data is
//! loaded. Parsing is case-insensitive and tolerates `-`/space in place of
//! `_` (so `febre-amarela` and `Centro Oeste` are accepted).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SurvError;

/// Tracked disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Dengue,
    Zika,
    Chikungunya,
    Malaria,
    FebreAmarela,
}

impl Disease {
    pub const ALL: [Disease; 5] = [
        Disease::Dengue,
        Disease::Zika,
        Disease::Chikungunya,
        Disease::Malaria,
        Disease::FebreAmarela,
    ];

    /// Returns the selector identifier (`dengue`, `febre_amarela`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::Dengue => "dengue",
            Disease::Zika => "zika",
            Disease::Chikungunya => "chikungunya",
            Disease::Malaria => "malaria",
            Disease::FebreAmarela => "febre_amarela",
        }
    }

    /// Returns the Portuguese display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Disease::Dengue => "Dengue",
            Disease::Zika => "Zika",
            Disease::Chikungunya => "Chikungunya",
            Disease::Malaria => "Malária",
            Disease::FebreAmarela => "Febre Amarela",
        }
    }

    /// Prefix used for generated case identifiers (`DENGUE-10000`).
    pub fn id_prefix(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Disease {
    type Err = SurvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_selector(s).as_str() {
            "dengue" => Ok(Disease::Dengue),
            "zika" => Ok(Disease::Zika),
            "chikungunya" => Ok(Disease::Chikungunya),
            "malaria" | "malária" => Ok(Disease::Malaria),
            "febre_amarela" | "yellow_fever" => Ok(Disease::FebreAmarela),
            _ => Err(SurvError::UnknownDisease(s.to_string())),
        }
    }
}

/// Brazilian macro-region selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroRegion {
    #[default]
    All,
    Norte,
    Nordeste,
    CentroOeste,
    Sudeste,
    Sul,
}

impl MacroRegion {
    pub const ALL: [MacroRegion; 6] = [
        MacroRegion::All,
        MacroRegion::Norte,
        MacroRegion::Nordeste,
        MacroRegion::CentroOeste,
        MacroRegion::Sudeste,
        MacroRegion::Sul,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MacroRegion::All => "all",
            MacroRegion::Norte => "norte",
            MacroRegion::Nordeste => "nordeste",
            MacroRegion::CentroOeste => "centro_oeste",
            MacroRegion::Sudeste => "sudeste",
            MacroRegion::Sul => "sul",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MacroRegion::All => "Todo o Brasil",
            MacroRegion::Norte => "Norte",
            MacroRegion::Nordeste => "Nordeste",
            MacroRegion::CentroOeste => "Centro-Oeste",
            MacroRegion::Sudeste => "Sudeste",
            MacroRegion::Sul => "Sul",
        }
    }

    /// Multiplier applied to disease baselines in the procedural series.
    pub fn case_multiplier(&self) -> f64 {
        match self {
            MacroRegion::All => 1.0,
            MacroRegion::Norte => 1.2,
            MacroRegion::Nordeste => 1.5,
            MacroRegion::CentroOeste => 0.8,
            MacroRegion::Sudeste => 1.3,
            MacroRegion::Sul => 0.6,
        }
    }
}

impl fmt::Display for MacroRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MacroRegion {
    type Err = SurvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_selector(s).as_str() {
            "all" | "brasil" | "todo_o_brasil" => Ok(MacroRegion::All),
            "norte" => Ok(MacroRegion::Norte),
            "nordeste" => Ok(MacroRegion::Nordeste),
            "centro_oeste" => Ok(MacroRegion::CentroOeste),
            "sudeste" => Ok(MacroRegion::Sudeste),
            "sul" => Ok(MacroRegion::Sul),
            _ => Err(SurvError::UnknownRegion(s.to_string())),
        }
    }
}

fn normalize_selector(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|ch| if ch == '-' || ch == ' ' { '_' } else { ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disease_round_trips_through_selector() {
        for disease in Disease::ALL {
            assert_eq!(disease.as_str().parse::<Disease>().unwrap(), disease);
        }
        assert_eq!(
            "Febre-Amarela".parse::<Disease>().unwrap(),
            Disease::FebreAmarela
        );
        assert!("ebola".parse::<Disease>().is_err());
    }

    #[test]
    fn region_accepts_spaced_names() {
        assert_eq!(
            "Centro Oeste".parse::<MacroRegion>().unwrap(),
            MacroRegion::CentroOeste
        );
        assert_eq!(Disease::FebreAmarela.id_prefix(), "FEBRE_AMARELA");
    }
}
