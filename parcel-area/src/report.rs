//! Rapport de calcul de surface
//!
//! Regroupe le résultat du moteur, les conversions d'unités et les mesures
//! de côtés, pour l'affichage console ou l'export JSON.

use std::path::Path;

use anyhow::{Context, Result};
use parcel_geo::{AreaResult, AreaUnit, DecimalCoord};
use serde::Serialize;

/// Surface dans chaque unité
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaValues {
    pub m2: f64,
    pub km2: f64,
    pub feddan: f64,
    pub qirat: f64,
}

impl AreaValues {
    pub fn from_square_meters(area_m2: f64) -> Self {
        Self {
            m2: area_m2,
            km2: AreaUnit::SquareKilometer.from_square_meters(area_m2),
            feddan: AreaUnit::Feddan.from_square_meters(area_m2),
            qirat: AreaUnit::Qirat.from_square_meters(area_m2),
        }
    }

    pub fn get(&self, unit: AreaUnit) -> f64 {
        match unit {
            AreaUnit::SquareMeter => self.m2,
            AreaUnit::SquareKilometer => self.km2,
            AreaUnit::Feddan => self.feddan,
            AreaUnit::Qirat => self.qirat,
        }
    }
}

/// Un sommet, en géographique et en projeté
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CornerReport {
    pub label: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub easting: f64,
    pub northing: f64,
}

/// Un côté de l'anneau
#[derive(Debug, Clone, Serialize)]
pub struct EdgeReport {
    pub from: &'static str,
    pub to: &'static str,
    pub length_m: f64,
}

/// Rapport complet
#[derive(Debug, Clone, Serialize)]
pub struct AreaReport {
    pub name: String,
    pub utm_zone: u8,
    pub epsg: u32,
    pub backend: String,
    pub area: AreaValues,
    pub perimeter_m: f64,
    pub clockwise: bool,
    pub self_intersecting: bool,
    pub corners: Vec<CornerReport>,
    pub edges: Vec<EdgeReport>,
}

const LABELS: [&str; 4] = ["P1", "P2", "P3", "P4"];

impl AreaReport {
    pub fn new(name: impl Into<String>, coords: &[DecimalCoord], result: &AreaResult) -> Self {
        let corners = coords
            .iter()
            .zip(result.projected.iter())
            .zip(LABELS)
            .map(|((c, p), label)| CornerReport {
                label,
                lat: c.lat,
                lon: c.lon,
                easting: p.easting,
                northing: p.northing,
            })
            .collect();

        let edges = result
            .edge_lengths()
            .iter()
            .enumerate()
            .map(|(i, length)| EdgeReport {
                from: LABELS[i],
                to: LABELS[(i + 1) % LABELS.len()],
                length_m: *length,
            })
            .collect();

        Self {
            name: name.into(),
            utm_zone: result.zone.number(),
            epsg: result.zone.epsg(),
            backend: result.backend.to_string(),
            area: AreaValues::from_square_meters(result.area_m2),
            perimeter_m: result.perimeter(),
            clockwise: result.is_clockwise(),
            self_intersecting: result.self_intersecting,
            corners,
            edges,
        }
    }

    /// Affiche le rapport sur la sortie standard
    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(60));
        println!("{}", self.name);
        println!("{}", "=".repeat(60));
        println!(
            "UTM zone: {} (EPSG:{}, backend: {})",
            self.utm_zone, self.epsg, self.backend
        );

        println!("\nResults:");
        for unit in AreaUnit::ALL {
            let value = format_grouped(self.area.get(unit), unit.display_precision());
            match unit.arabic_label() {
                Some(label) => println!("  Area ({}, {}): {}", unit, label, value),
                None => println!("  Area ({}): {}", unit, value),
            }
        }

        println!("\nCorners:");
        for c in &self.corners {
            println!(
                "  {}  ({:.5}, {:.5})  E {:.2}  N {:.2}",
                c.label, c.lat, c.lon, c.easting, c.northing
            );
        }

        println!("\nEdges:");
        for e in &self.edges {
            println!("  {} → {}: {:.2} m", e.from, e.to, e.length_m);
        }
        println!("  Perimeter: {:.2} m", self.perimeter_m);

        if self.self_intersecting {
            println!("\nWARNING: the boundary crosses itself, the area is not meaningful");
        }

        println!("\n{}", "=".repeat(60));
    }

    /// Rapport en JSON indenté
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .context(format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        format!(
            "{}: {} m² ({} feddan) in UTM zone {}",
            self.name,
            format_grouped(self.area.m2, 2),
            format_grouped(self.area.feddan, 4),
            self.utm_zone
        )
    }
}

/// Formate avec séparateur de milliers : 165486.957 → "165,486.96"
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_geo::compute_area;

    fn sample() -> (Vec<DecimalCoord>, AreaResult) {
        let d = 0.0009;
        let coords = vec![
            DecimalCoord::new(0.0, 3.0),
            DecimalCoord::new(0.0, 3.0 + d),
            DecimalCoord::new(d, 3.0 + d),
            DecimalCoord::new(d, 3.0),
        ];
        let result = compute_area(&coords).unwrap();
        (coords, result)
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(165486.9566, 2), "165,486.96");
        assert_eq!(format_grouped(999.0, 2), "999.00");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
        assert_eq!(format_grouped(1234567.891, 1), "1,234,567.9");
        assert_eq!(format_grouped(0.165487, 6), "0.165487");
        assert_eq!(format_grouped(-1234.5, 1), "-1,234.5");
        assert_eq!(format_grouped(-0.0001, 2), "0.00");
    }

    #[test]
    fn test_area_values() {
        let values = AreaValues::from_square_meters(8400.0);
        assert_eq!(values.feddan, 2.0);
        assert_eq!(values.qirat, 48.0);
        assert_eq!(values.km2, 0.0084);
        assert_eq!(values.get(AreaUnit::SquareMeter), 8400.0);
    }

    #[test]
    fn test_report_from_result() {
        let (coords, result) = sample();
        let report = AreaReport::new("Test", &coords, &result);

        assert_eq!(report.utm_zone, 31);
        assert_eq!(report.epsg, 32631);
        assert_eq!(report.backend, "lite");
        assert_eq!(report.corners.len(), 4);
        assert_eq!(report.edges.len(), 4);
        assert_eq!(report.edges[3].from, "P4");
        assert_eq!(report.edges[3].to, "P1");
        assert_eq!(report.area.m2, result.area_m2);
        assert!(!report.self_intersecting);
    }

    #[test]
    fn test_report_json() {
        let (coords, result) = sample();
        let report = AreaReport::new("Test", &coords, &result);
        let json = report.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["utm_zone"], 31);
        assert_eq!(value["corners"][0]["label"], "P1");
        assert!(value["area"]["feddan"].as_f64().unwrap() > 2.0);
    }

    #[test]
    fn test_summary() {
        let (coords, result) = sample();
        let report = AreaReport::new("Lot 7", &coords, &result);
        let summary = report.summary();
        assert!(summary.starts_with("Lot 7:"));
        assert!(summary.contains("UTM zone 31"));
    }
}
