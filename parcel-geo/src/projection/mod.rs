//! Projection WGS84 → UTM
//!
//! Deux backends :
//! - `Lite` : Mercator transverse en Rust pur (défaut)
//! - `Proj` : bibliothèque PROJ, disponible avec la feature `proj`

mod ellipsoid;
#[cfg(feature = "proj")]
mod proj_backend;
pub mod utm;

pub use ellipsoid::WGS84;
pub use utm::TransverseMercator;

use std::fmt;
use std::str::FromStr;

use crate::types::{DecimalCoord, ProjectedPoint};
use crate::ParcelError;

/// Nombre de zones UTM
pub const ZONE_COUNT: u8 = 60;

/// Zone UTM (1..=60), fuseaux de 6° à partir de 180°W
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtmZone(u8);

impl UtmZone {
    pub fn new(number: u8) -> Result<Self, ParcelError> {
        if (1..=ZONE_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ParcelError::Projection(format!(
                "UTM zone {} out of range 1..={}",
                number, ZONE_COUNT
            )))
        }
    }

    /// Zone contenant la longitude : `floor((lon + 180) / 6) + 1`, bornée à [1, 60].
    /// Une longitude sur une limite de fuseau appartient à la zone est.
    pub fn from_longitude(lon: f64) -> Self {
        let zone = ((lon + 180.0) / 6.0).floor() as i64 + 1;
        Self(zone.clamp(1, ZONE_COUNT as i64) as u8)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Méridien central en degrés
    pub fn central_meridian(self) -> f64 {
        (self.0 as f64 - 1.0) * 6.0 - 180.0 + 3.0
    }

    /// Code EPSG WGS84 / UTM nord (326NN)
    pub fn epsg(self) -> u32 {
        32600 + self.0 as u32
    }

    /// Définition PROJ générique, sans bande d'hémisphère
    pub fn proj_string(self) -> String {
        format!("+proj=utm +zone={} +datum=WGS84 +units=m +no_defs", self.0)
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Choix du moteur de projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// Mercator transverse en Rust pur
    #[default]
    Lite,
    /// PROJ (nécessite la feature `proj`)
    Proj,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Self::Lite => "lite",
            Self::Proj => "proj",
        }
    }

    /// Vérifie si le backend est compilé
    pub fn is_available(self) -> bool {
        match self {
            Self::Lite => true,
            Self::Proj => cfg!(feature = "proj"),
        }
    }
}

impl FromStr for Backend {
    type Err = ParcelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lite" => Ok(Self::Lite),
            "proj" => Ok(Self::Proj),
            other => Err(ParcelError::Projection(format!(
                "Unknown projection backend: {}. Use: lite, proj",
                other
            ))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transformation directe géographique → UTM, construite pour un calcul
pub enum Projector {
    Lite(TransverseMercator),
    #[cfg(feature = "proj")]
    Proj(proj_backend::ProjUtm),
}

impl Projector {
    /// Crée le projecteur de la zone avec le backend demandé
    pub fn new(zone: UtmZone, backend: Backend) -> Result<Self, ParcelError> {
        match backend {
            Backend::Lite => Ok(Self::Lite(TransverseMercator::new(zone))),
            #[cfg(feature = "proj")]
            Backend::Proj => Ok(Self::Proj(proj_backend::ProjUtm::new(zone)?)),
            #[cfg(not(feature = "proj"))]
            Backend::Proj => Err(ParcelError::Projection(
                "the 'proj' backend requires the 'proj' feature. \
                 Build with: cargo build --features proj"
                    .to_string(),
            )),
        }
    }

    /// Projette une coordonnée décimale
    ///
    /// Un point trop éloigné du méridien central (≥ 90° en longitude) n'a pas
    /// d'image finie : c'est une erreur, pas un sommet NaN.
    pub fn project(&self, coord: DecimalCoord) -> Result<ProjectedPoint, ParcelError> {
        let point = match self {
            Self::Lite(tm) => tm.forward(coord.lon, coord.lat),
            #[cfg(feature = "proj")]
            Self::Proj(p) => p.forward(coord.lon, coord.lat)?,
        };

        if !point.easting.is_finite() || !point.northing.is_finite() {
            return Err(ParcelError::Projection(format!(
                "({}, {}) has no finite projection in {}",
                coord.lat,
                coord.lon,
                self.description()
            )));
        }
        Ok(point)
    }

    /// Retourne une description du projecteur utilisé
    pub fn description(&self) -> &'static str {
        match self {
            Self::Lite(_) => "lite (transverse Mercator, pure Rust)",
            #[cfg(feature = "proj")]
            Self::Proj(_) => "proj (PROJ library)",
        }
    }
}
