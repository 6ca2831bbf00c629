//! # parcel-geo
//!
//! Surface d'une parcelle à quatre sommets saisis en degrés-minutes-secondes.
//!
//! ## Features
//!
//! - Parsing DMS (`28°13'30.28"`, `28 13 30.28`, `28:13:30.28`, `28,13,30.28`)
//! - Choix de la zone UTM sur la moyenne des longitudes
//! - Projection Mercator transverse en Rust pur, ou PROJ avec la feature `proj`
//! - Surface par la formule du lacet, conversions m² / km² / feddan / qirat
//!
//! ## Usage
//!
//! ```rust,ignore
//! use parcel_geo::area_from_dms;
//!
//! let lons = ["28°13'30.28\"", "28°13'41.59\"", "28°13'32.53\"", "28°13'21.35\""];
//! let lats = ["26°57'42.46\"", "26°57'26.23\"", "26°57'21.83\"", "26°57'38.45\""];
//!
//! let result = area_from_dms(&lons, &lats)?;
//! println!("Zone UTM: {}", result.zone);
//! println!("Surface: {:.2} m²", result.area_m2);
//! ```

pub mod area;
pub mod error;
pub mod parser;
pub mod projection;
pub mod types;
pub mod units;

pub use area::{compute_area, compute_area_with, compute_parcel_area, AreaResult};
pub use error::ParcelError;
pub use parser::{parse, parse_fields, parse_text};
pub use projection::{Backend, UtmZone};
pub use types::{DecimalCoord, Dms, DmsValue, Hemisphere, Parcel, ProjectedPoint, CORNER_COUNT};
pub use units::AreaUnit;

/// Convertit des paires de chaînes DMS (longitudes, latitudes) en coordonnées décimales
///
/// Le signe de chaque valeur vient uniquement de son `-` de tête.
///
/// # Errors
///
/// `ParcelError::PointCount` si l'une des listes n'a pas 4 éléments,
/// `ParcelError::Parse` pour la première valeur illisible.
pub fn coords_from_dms<S: AsRef<str>>(
    lons: &[S],
    lats: &[S],
) -> Result<Vec<DecimalCoord>, ParcelError> {
    for list in [lons, lats] {
        if list.len() != CORNER_COUNT {
            return Err(ParcelError::PointCount(list.len()));
        }
    }

    lons.iter()
        .zip(lats)
        .map(|(lon, lat)| {
            let lon = parse(DmsValue::Text(lon.as_ref()))?;
            let lat = parse(DmsValue::Text(lat.as_ref()))?;
            Ok(DecimalCoord::new(lat, lon))
        })
        .collect()
}

/// Surface d'une parcelle saisie en chaînes DMS, backend par défaut
pub fn area_from_dms<S: AsRef<str>>(lons: &[S], lats: &[S]) -> Result<AreaResult, ParcelError> {
    let coords = coords_from_dms(lons, lats)?;
    compute_area(&coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_from_dms_order() {
        let coords = coords_from_dms(
            &["28,13,30", "28,13,41", "28,13,32", "-28,13,21"],
            &["26,57,42", "26,57,26", "26,57,21", "-26,57,38"],
        )
        .unwrap();
        assert_eq!(coords.len(), 4);
        assert!(coords[0].lat > 26.9 && coords[0].lon > 28.2);
        assert!(coords[3].lat < 0.0 && coords[3].lon < 0.0);
    }

    #[test]
    fn test_coords_from_dms_count_mismatch() {
        let err = coords_from_dms(&["1,0,0"; 3], &["1,0,0"; 3]).unwrap_err();
        assert_eq!(err, ParcelError::PointCount(3));

        let four = ["1,0,0"; 4];
        let five = ["1,0,0"; 5];
        assert_eq!(
            coords_from_dms(&four[..], &five[..]).unwrap_err(),
            ParcelError::PointCount(5)
        );
    }

    #[test]
    fn test_coords_from_dms_parse_error_verbatim() {
        let err = coords_from_dms(
            &["28,13,30", "28 13", "28,13,32", "28,13,21"],
            &["26,57,42"; 4],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParcelError::Parse {
                input: "28 13".to_string(),
                reason: r#"expected D°M'S" or D,M,S notation"#.to_string(),
            }
        );
    }
}
