//! # parcel-area
//!
//! Calcul de surface d'une parcelle à quatre sommets saisis en DMS, avec
//! rapport multi-unités et export du contour.
//!
//! ## Features
//!
//! - Saisie par arguments, fichier JSON ou preset embarqué
//! - Rapport m² / km² / feddan / qirat, longueurs des côtés, JSON
//! - Export KML et GeoJSON (géographique ou projeté UTM)
//! - CLI simple
//!
//! ## Usage CLI
//!
//! ```bash
//! # Calcul depuis les sommets
//! parcel-area --lon "28°13'30.28\"" --lon ... --lat "26°57'42.46\"" --lat ...
//! parcel-area --input parcel.json --json
//!
//! # Export du contour
//! parcel-area to-kml --preset sample --output parcel.kml
//! parcel-area to-geojson --input parcel.json --output parcel.geojson --projected
//! ```

pub mod config;
pub mod export;
pub mod report;

pub use config::{Config, Settings};
pub use report::AreaReport;
