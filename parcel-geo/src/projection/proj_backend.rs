//! Projection UTM via PROJ
//!
//! Ce module est disponible uniquement avec la feature `proj`.

use ::proj::Proj;

use super::UtmZone;
use crate::types::ProjectedPoint;
use crate::ParcelError;

/// Transformation EPSG:4326 → UTM générique de la zone
pub struct ProjUtm {
    proj: Proj,
}

impl ProjUtm {
    pub fn new(zone: UtmZone) -> Result<Self, ParcelError> {
        let target = zone.proj_string();

        // new_known_crs normalise l'ordre des axes en (lon, lat)
        let proj = Proj::new_known_crs("EPSG:4326", &target, None).map_err(|e| {
            ParcelError::Projection(format!(
                "Failed to create projection from EPSG:4326 to {}: {}",
                target, e
            ))
        })?;

        Ok(Self { proj })
    }

    /// Projette (lon, lat) en degrés
    pub fn forward(&self, lon: f64, lat: f64) -> Result<ProjectedPoint, ParcelError> {
        let (easting, northing) = self
            .proj
            .convert((lon, lat))
            .map_err(|e| ParcelError::Projection(format!("Coordinate transformation failed: {}", e)))?;
        Ok(ProjectedPoint { easting, northing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::TransverseMercator;

    #[test]
    fn test_matches_lite_projection() {
        let zone = UtmZone::new(35).unwrap();
        let proj = ProjUtm::new(zone).unwrap();
        let lite = TransverseMercator::new(zone);

        let (lon, lat) = (28.2251, 26.9618);
        let a = proj.forward(lon, lat).unwrap();
        let b = lite.forward(lon, lat);

        assert!((a.easting - b.easting).abs() < 0.001, "{} vs {}", a.easting, b.easting);
        assert!((a.northing - b.northing).abs() < 0.001, "{} vs {}", a.northing, b.northing);
    }
}
