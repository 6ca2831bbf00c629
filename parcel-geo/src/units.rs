//! Unités de surface
//!
//! Conversions linéaires depuis le m² avec des diviseurs fixes :
//! 1 feddan = 4200 m², 1 qirat = 175 m² (1/24 feddan).

use std::fmt;
use std::str::FromStr;

use crate::ParcelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaUnit {
    SquareMeter,
    SquareKilometer,
    Feddan,
    Qirat,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 4] = [
        Self::SquareMeter,
        Self::SquareKilometer,
        Self::Feddan,
        Self::Qirat,
    ];

    /// Nombre de m² dans une unité
    pub const fn square_meters(self) -> f64 {
        match self {
            Self::SquareMeter => 1.0,
            Self::SquareKilometer => 1e6,
            Self::Feddan => 4200.0,
            Self::Qirat => 175.0,
        }
    }

    /// Convertit une surface en m² vers cette unité
    pub fn from_square_meters(self, area_m2: f64) -> f64 {
        area_m2 / self.square_meters()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::SquareMeter => "m²",
            Self::SquareKilometer => "km²",
            Self::Feddan => "feddan",
            Self::Qirat => "qirat",
        }
    }

    /// Libellé arabe des unités régionales
    pub fn arabic_label(self) -> Option<&'static str> {
        match self {
            Self::Feddan => Some("فدان"),
            Self::Qirat => Some("قيراط"),
            _ => None,
        }
    }

    /// Décimales d'affichage usuelles
    pub fn display_precision(self) -> usize {
        match self {
            Self::SquareMeter | Self::Qirat => 2,
            Self::SquareKilometer => 6,
            Self::Feddan => 4,
        }
    }
}

impl FromStr for AreaUnit {
    type Err = ParcelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m2" | "m²" | "sqm" => Ok(Self::SquareMeter),
            "km2" | "km²" | "sqkm" => Ok(Self::SquareKilometer),
            "feddan" => Ok(Self::Feddan),
            "qirat" | "kirat" => Ok(Self::Qirat),
            _ => Err(ParcelError::parse(s, "unknown area unit. Use: m2, km2, feddan, qirat")),
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_are_linear() {
        let area_m2 = 165486.956646;
        let km2 = AreaUnit::SquareKilometer.from_square_meters(area_m2);
        let feddan = AreaUnit::Feddan.from_square_meters(area_m2);
        let qirat = AreaUnit::Qirat.from_square_meters(area_m2);

        assert!((km2 * 1e6 - area_m2).abs() < 1e-6);
        assert!((feddan * 4200.0 - area_m2).abs() < 1e-6);
        assert!((qirat * 175.0 - area_m2).abs() < 1e-6);
        assert_eq!(AreaUnit::SquareMeter.from_square_meters(area_m2), area_m2);
    }

    #[test]
    fn test_feddan_is_24_qirat() {
        assert_eq!(AreaUnit::Feddan.square_meters(), 24.0 * AreaUnit::Qirat.square_meters());
        assert_eq!(AreaUnit::Feddan.from_square_meters(4200.0), 1.0);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("km2".parse::<AreaUnit>().unwrap(), AreaUnit::SquareKilometer);
        assert_eq!("Feddan".parse::<AreaUnit>().unwrap(), AreaUnit::Feddan);
        assert!("acre".parse::<AreaUnit>().is_err());
    }
}
