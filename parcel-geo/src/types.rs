//! Types de données pour le crate parcel-geo

use std::fmt;
use std::str::FromStr;

use geo::Coord;

use crate::ParcelError;

/// Nombre de sommets d'une parcelle
pub const CORNER_COUNT: usize = 4;

/// Hémisphère (ou direction) associé à une composante DMS saisie par champs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// S et W donnent une valeur négative
    pub fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }

    /// Vrai pour N/S (latitude)
    pub fn is_latitude(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl FromStr for Hemisphere {
    type Err = ParcelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            _ => Err(ParcelError::parse(s, "hemisphere must be one of N, S, E, W")),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Une composante angulaire en degrés-minutes-secondes
///
/// Le signe est porté séparément et appliqué une seule fois, à la fin de la
/// conversion : `-0°30'00"` vaut bien `-0.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub negative: bool,
}

impl Dms {
    /// Convertit en degrés décimaux signés
    pub fn to_decimal(self) -> f64 {
        let dd = self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -dd
        } else {
            dd
        }
    }
}

/// Une valeur saisie pour une composante de coordonnée
///
/// Chaque variante n'a qu'une seule source de signe : le texte porte son
/// signe en tête, les champs prennent celui de l'hémisphère.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DmsValue<'a> {
    /// Notation libre `D°M'S"` ou `D,M,S`
    Text(&'a str),
    /// Champs numériques séparés + hémisphère
    Fields {
        degrees: u32,
        minutes: u32,
        seconds: f64,
        hemisphere: Hemisphere,
    },
}

/// Coordonnée géographique en degrés décimaux (WGS84)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalCoord {
    pub lat: f64,
    pub lon: f64,
}

impl DecimalCoord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Vérifie lat ∈ [-90, 90] et lon ∈ [-180, 180]
    pub fn validate(&self) -> Result<(), ParcelError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(ParcelError::OutOfRange {
                axis: "latitude",
                value: self.lat,
            });
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(ParcelError::OutOfRange {
                axis: "longitude",
                value: self.lon,
            });
        }
        Ok(())
    }

    /// Coordonnée `geo` dans l'ordre (x = lon, y = lat)
    pub fn to_coord(self) -> Coord {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

/// Point projeté en mètres dans la zone UTM choisie
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
}

impl ProjectedPoint {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }

    pub fn to_coord(self) -> Coord {
        Coord {
            x: self.easting,
            y: self.northing,
        }
    }
}

/// Parcelle à quatre sommets, dans l'ordre de parcours saisi
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parcel {
    corners: [DecimalCoord; CORNER_COUNT],
}

impl Parcel {
    /// Construit une parcelle en vérifiant le nombre de sommets et leurs bornes
    pub fn new(coords: &[DecimalCoord]) -> Result<Self, ParcelError> {
        let corners: [DecimalCoord; CORNER_COUNT] = coords
            .try_into()
            .map_err(|_| ParcelError::PointCount(coords.len()))?;

        for corner in &corners {
            corner.validate()?;
        }

        Ok(Self { corners })
    }

    pub fn corners(&self) -> &[DecimalCoord; CORNER_COUNT] {
        &self.corners
    }

    /// Moyenne arithmétique des longitudes (pas le centroïde du polygone)
    pub fn mean_longitude(&self) -> f64 {
        self.corners.iter().map(|c| c.lon).sum::<f64>() / CORNER_COUNT as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_from_str() {
        assert_eq!("n".parse::<Hemisphere>().unwrap(), Hemisphere::North);
        assert_eq!(" W ".parse::<Hemisphere>().unwrap(), Hemisphere::West);
        assert!("X".parse::<Hemisphere>().is_err());
        assert!(Hemisphere::South.is_negative());
        assert!(!Hemisphere::East.is_negative());
        assert!(Hemisphere::North.is_latitude());
    }

    #[test]
    fn test_sign_applied_once() {
        let dms = Dms {
            degrees: 0,
            minutes: 30,
            seconds: 0.0,
            negative: true,
        };
        assert_eq!(dms.to_decimal(), -0.5);
    }

    #[test]
    fn test_parcel_requires_four_corners() {
        let c = DecimalCoord::new(26.9, 28.2);
        assert_eq!(Parcel::new(&[c; 3]), Err(ParcelError::PointCount(3)));
        assert_eq!(Parcel::new(&[c; 5]), Err(ParcelError::PointCount(5)));
        assert!(Parcel::new(&[c; 4]).is_ok());
    }

    #[test]
    fn test_parcel_rejects_out_of_range() {
        let ok = DecimalCoord::new(10.0, 10.0);
        let bad = DecimalCoord::new(95.0, 10.0);
        let err = Parcel::new(&[ok, ok, ok, bad]).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_mean_longitude() {
        let parcel = Parcel::new(&[
            DecimalCoord::new(0.0, 10.0),
            DecimalCoord::new(0.0, 12.0),
            DecimalCoord::new(1.0, 12.0),
            DecimalCoord::new(1.0, 14.0),
        ])
        .unwrap();
        assert_eq!(parcel.mean_longitude(), 12.0);
    }
}
