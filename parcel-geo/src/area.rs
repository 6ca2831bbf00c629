//! Calcul de surface d'une parcelle à quatre sommets
//!
//! Zone UTM choisie sur la moyenne des longitudes, projection des sommets
//! dans l'ordre de saisie, puis formule du lacet sur l'anneau fermé.

use geo::{Area, EuclideanLength, Intersects, Line, LineString, Polygon};
use tracing::{debug, warn};

use crate::projection::{Backend, Projector, UtmZone};
use crate::types::{DecimalCoord, Parcel, ProjectedPoint, CORNER_COUNT};
use crate::units::AreaUnit;
use crate::ParcelError;

/// Résultat du calcul de surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaResult {
    /// Zone UTM utilisée
    pub zone: UtmZone,

    /// Backend de projection utilisé
    pub backend: Backend,

    /// Surface signée (positive pour un parcours anti-horaire)
    pub signed_area_m2: f64,

    /// Surface en m², toujours >= 0
    pub area_m2: f64,

    /// Sommets projetés, dans l'ordre de saisie
    pub projected: [ProjectedPoint; CORNER_COUNT],

    /// Deux côtés non adjacents se croisent (ou sommets confondus)
    pub self_intersecting: bool,
}

impl AreaResult {
    /// Surface dans l'unité demandée
    pub fn area_in(&self, unit: AreaUnit) -> f64 {
        unit.from_square_meters(self.area_m2)
    }

    /// Longueur des côtés (i → i+1, le dernier revient au premier)
    pub fn edge_lengths(&self) -> [f64; CORNER_COUNT] {
        let mut lengths = [0.0; CORNER_COUNT];
        for (i, length) in lengths.iter_mut().enumerate() {
            *length = edge(&self.projected, i).euclidean_length();
        }
        lengths
    }

    /// Périmètre en mètres
    pub fn perimeter(&self) -> f64 {
        self.edge_lengths().iter().sum()
    }

    /// Sens de parcours des sommets saisis
    pub fn is_clockwise(&self) -> bool {
        self.signed_area_m2 < 0.0
    }
}

/// Calcule la surface avec le backend par défaut
pub fn compute_area(coords: &[DecimalCoord]) -> Result<AreaResult, ParcelError> {
    compute_area_with(coords, Backend::default())
}

/// Calcule la surface avec un backend de projection donné
///
/// # Errors
///
/// `ParcelError::PointCount` si `coords` n'a pas exactement 4 éléments,
/// `ParcelError::OutOfRange` pour une latitude/longitude hors domaine,
/// `ParcelError::Projection` si le backend est indisponible ou si un sommet
/// n'a pas d'image finie dans la zone.
pub fn compute_area_with(
    coords: &[DecimalCoord],
    backend: Backend,
) -> Result<AreaResult, ParcelError> {
    let parcel = Parcel::new(coords)?;
    compute_parcel_area(&parcel, backend)
}

/// Calcule la surface d'une parcelle déjà validée
pub fn compute_parcel_area(parcel: &Parcel, backend: Backend) -> Result<AreaResult, ParcelError> {
    let mean_lon = parcel.mean_longitude();
    let zone = UtmZone::from_longitude(mean_lon);
    let projector = Projector::new(zone, backend)?;

    debug!(
        mean_lon,
        zone = zone.number(),
        projector = projector.description(),
        "UTM zone selected"
    );

    let mut projected = [ProjectedPoint::new(0.0, 0.0); CORNER_COUNT];
    for (slot, corner) in projected.iter_mut().zip(parcel.corners()) {
        *slot = projector.project(*corner)?;
    }

    // Polygon::new ferme l'anneau (dernier sommet → premier)
    let ring: Vec<_> = projected.iter().map(|p| p.to_coord()).collect();
    let polygon = Polygon::new(LineString::new(ring), vec![]);
    let signed_area_m2 = polygon.signed_area();
    let area_m2 = signed_area_m2.abs();

    let self_intersecting = is_self_intersecting(&projected);
    if self_intersecting {
        warn!(
            area_m2,
            "Parcel boundary crosses itself or has coincident corners, area is not a physical surface"
        );
    }

    debug!(area_m2, zone = zone.number(), "Parcel area computed");

    Ok(AreaResult {
        zone,
        backend,
        signed_area_m2,
        area_m2,
        projected,
        self_intersecting,
    })
}

/// Côté i de l'anneau
fn edge(points: &[ProjectedPoint; CORNER_COUNT], i: usize) -> Line {
    Line::new(
        points[i].to_coord(),
        points[(i + 1) % CORNER_COUNT].to_coord(),
    )
}

/// Un quadrilatère est simple si ses côtés opposés ne se touchent pas
fn is_self_intersecting(points: &[ProjectedPoint; CORNER_COUNT]) -> bool {
    edge(points, 0).intersects(&edge(points, 2)) || edge(points, 1).intersects(&edge(points, 3))
}
