// src/noyau/trig.rs
//
// Mode d’angle pour sin/cos/tan et leurs réciproques
// --------------------------------------------------
// - sin/cos/tan : argument converti (mode -> radians) avant l’appel
// - asin/acos/atan : résultat radians reconverti vers le mode
// - le mode n’influence jamais la lecture (jetons / RPN)

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleMode {
    Deg,
    #[default]
    Rad,
}

impl AngleMode {
    /// Angle exprimé dans ce mode -> radians.
    pub fn to_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Deg => x * PI / 180.0,
            AngleMode::Rad => x,
        }
    }

    /// Radians -> angle exprimé dans ce mode.
    pub fn from_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Deg => x * 180.0 / PI,
            AngleMode::Rad => x,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Deg => "DEG",
            AngleMode::Rad => "RAD",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// "DEG" / "RAD", insensible à la casse.
impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEG" => Ok(AngleMode::Deg),
            "RAD" => Ok(AngleMode::Rad),
            _ => Err(format!("mode d’angle inconnu: '{s}' (attendu DEG ou RAD)")),
        }
    }
}
