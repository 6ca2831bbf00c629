//! Projection UTM directe (WGS84 → mètres)
//!
//! Mercator transverse par la série de Krüger à l'ordre 6 en n, précise au
//! dixième de millimètre dans une zone. Définition générique : pas de faux
//! nord pour l'hémisphère sud, les nords y sont donc négatifs. Les surfaces
//! n'en dépendent pas.

use super::ellipsoid::WGS84;
use super::UtmZone;
use crate::types::ProjectedPoint;

/// Facteur d'échelle sur le méridien central
pub const K0: f64 = 0.9996;

/// Faux est
pub const FALSE_EASTING: f64 = 500000.0;

/// Mercator transverse pour une zone UTM
#[derive(Debug, Clone, Copy)]
pub struct TransverseMercator {
    /// Méridien central (radians)
    lon0: f64,
    /// Rayon rectifiant A
    rectifying_radius: f64,
    /// Coefficients α1..α6 de la série de Krüger
    alpha: [f64; 6],
}

impl TransverseMercator {
    pub fn new(zone: UtmZone) -> Self {
        let n = WGS84::N;
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;
        let n5 = n4 * n;
        let n6 = n5 * n;

        let rectifying_radius =
            WGS84::A / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0 + n6 / 256.0);

        let alpha = [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0
                - 127.0 * n5 / 288.0
                + 7891.0 * n6 / 37800.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1440.0 + 281.0 * n5 / 630.0
                - 1983433.0 * n6 / 1935360.0,
            61.0 * n3 / 240.0 - 103.0 * n4 / 140.0
                + 15061.0 * n5 / 26880.0
                + 167603.0 * n6 / 181440.0,
            49561.0 * n4 / 161280.0 - 179.0 * n5 / 168.0 + 6601661.0 * n6 / 7257600.0,
            34729.0 * n5 / 80640.0 - 3418889.0 * n6 / 1995840.0,
            212378941.0 * n6 / 319334400.0,
        ];

        Self {
            lon0: zone.central_meridian().to_radians(),
            rectifying_radius,
            alpha,
        }
    }

    /// Projette (lon, lat) en degrés vers (est, nord) en mètres
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> ProjectedPoint {
        let e = WGS84::E;
        let phi = lat_deg.to_radians();
        let lambda = lon_deg.to_radians() - self.lon0;

        // Latitude conforme via tan(χ)
        let sin_phi = phi.sin();
        let t = (sin_phi.atanh() - e * (e * sin_phi).atanh()).sinh();

        let xi_prime = t.atan2(lambda.cos());
        let eta_prime = (lambda.sin() / (1.0 + t * t).sqrt()).atanh();

        let mut xi = xi_prime;
        let mut eta = eta_prime;
        for (j, alpha) in self.alpha.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            xi += alpha * (k * xi_prime).sin() * (k * eta_prime).cosh();
            eta += alpha * (k * xi_prime).cos() * (k * eta_prime).sinh();
        }

        ProjectedPoint {
            easting: FALSE_EASTING + K0 * self.rectifying_radius * eta,
            northing: K0 * self.rectifying_radius * xi,
        }
    }
}
