//! Configuration : parcelle saisie (fichier JSON, preset, arguments) et environnement

use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use parcel_geo::{parse, Backend, DecimalCoord, DmsValue, Hemisphere};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Nom de parcelle utilisé sans configuration explicite
pub const DEFAULT_NAME: &str = "Parcel";

/// Presets embarqués
const PRESETS: &[(&str, &str)] = &[("sample", include_str!("presets/sample.json"))];

/// Parcelle décrite par ses quatre sommets
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Nom affiché et exporté
    #[serde(default)]
    pub name: Option<String>,

    /// Sommets dans l'ordre de parcours du bornage
    pub corners: Vec<CornerConfig>,
}

/// Un sommet
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CornerConfig {
    pub lon: CoordField,
    pub lat: CoordField,
}

/// Axe d'une composante, pour contrôler l'hémisphère saisi
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Valeur d'une composante dans le fichier
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CoordField {
    /// Degrés décimaux signés
    Decimal(f64),
    /// Texte DMS (`28°13'30.28"`, `28,13,30.28`), signe en tête
    Text(String),
    /// Champs séparés, signe donné par l'hémisphère
    Fields {
        degrees: u32,
        #[serde(default)]
        minutes: u32,
        #[serde(default)]
        seconds: f64,
        hemisphere: String,
    },
}

impl CoordField {
    /// Convertit en degrés décimaux signés
    pub fn to_decimal(&self, axis: Axis) -> Result<f64> {
        match self {
            Self::Decimal(value) => Ok(*value),
            Self::Text(text) => Ok(parse(DmsValue::Text(text))?),
            Self::Fields {
                degrees,
                minutes,
                seconds,
                hemisphere,
            } => {
                let hemisphere: Hemisphere = hemisphere.parse()?;
                ensure!(
                    hemisphere.is_latitude() == (axis == Axis::Latitude),
                    "Hemisphere {} is not valid for {:?}",
                    hemisphere,
                    axis
                );
                Ok(parse(DmsValue::Fields {
                    degrees: *degrees,
                    minutes: *minutes,
                    seconds: *seconds,
                    hemisphere,
                })?)
            }
        }
    }
}

impl Config {
    /// Charge une parcelle depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read parcel file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse parcel JSON")
    }

    /// Charge une parcelle depuis un preset embarqué
    pub fn from_preset(preset: &str) -> Result<Self> {
        match PRESETS.iter().find(|(name, _)| *name == preset) {
            Some((_, json)) => Self::load_embedded(json),
            None => bail!(
                "Unknown preset: {}. Use: {}",
                preset,
                PRESETS
                    .iter()
                    .map(|(name, _)| *name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }

    fn load_embedded(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse embedded preset")
    }

    /// Construit une parcelle depuis des listes de longitudes / latitudes DMS
    pub fn from_dms_args(lons: &[String], lats: &[String], name: Option<String>) -> Result<Self> {
        ensure!(
            lons.len() == lats.len(),
            "Got {} longitudes but {} latitudes",
            lons.len(),
            lats.len()
        );

        let corners = lons
            .iter()
            .zip(lats)
            .map(|(lon, lat)| CornerConfig {
                lon: CoordField::Text(lon.clone()),
                lat: CoordField::Text(lat.clone()),
            })
            .collect();

        Ok(Self { name, corners })
    }

    /// Nom de la parcelle, ou le défaut fourni
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }

    /// Convertit les sommets en coordonnées décimales (lat, lon)
    pub fn to_coords(&self) -> Result<Vec<DecimalCoord>> {
        self.corners
            .iter()
            .enumerate()
            .map(|(i, corner)| {
                let lon = corner
                    .lon
                    .to_decimal(Axis::Longitude)
                    .with_context(|| format!("Corner P{}: invalid longitude", i + 1))?;
                let lat = corner
                    .lat
                    .to_decimal(Axis::Latitude)
                    .with_context(|| format!("Corner P{}: invalid latitude", i + 1))?;
                Ok(DecimalCoord::new(lat, lon))
            })
            .collect()
    }
}

/// Réglages lus depuis l'environnement (.env compris)
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Backend de projection (PARCEL_AREA_BACKEND)
    pub backend: Backend,

    /// Nom de parcelle par défaut (PARCEL_AREA_NAME)
    pub default_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: Backend::Lite,
            default_name: DEFAULT_NAME.into(),
        }
    }
}

impl Settings {
    /// Charge les réglages depuis les variables d'environnement
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            backend: lookup("PARCEL_AREA_BACKEND")
                .and_then(|s| match s.parse() {
                    Ok(backend) => Some(backend),
                    Err(e) => {
                        warn!(value = %s, error = %e, "Ignoring PARCEL_AREA_BACKEND, using lite");
                        None
                    }
                })
                .unwrap_or_default(),
            default_name: lookup("PARCEL_AREA_NAME").unwrap_or_else(|| DEFAULT_NAME.into()),
        }
    }
}
