//! Export GeoJSON du contour avec geozero

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geo::{Coord, Geometry, LineString, Polygon};
use geozero::geojson::GeoJsonWriter;
use geozero::GeozeroGeometry;
use parcel_geo::{AreaResult, AreaUnit, DecimalCoord};

use super::escape_json;

/// Système de coordonnées de l'anneau exporté
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Frame {
    /// Sommets saisis, EPSG:4326 (lon, lat)
    #[default]
    Geographic,
    /// Sommets projetés, EPSG:326NN (mètres)
    Projected,
}

/// Exporte la parcelle en FeatureCollection GeoJSON
pub fn export_to_geojson(
    name: &str,
    coords: &[DecimalCoord],
    result: &AreaResult,
    frame: Frame,
    output_path: &Path,
) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    write_geojson(&mut writer, name, coords, result, frame)?;
    writer.flush()?;

    Ok(())
}

/// Écrit la FeatureCollection
pub fn write_geojson<W: Write>(
    writer: &mut W,
    name: &str,
    coords: &[DecimalCoord],
    result: &AreaResult,
    frame: Frame,
) -> Result<()> {
    let (epsg, ring): (u32, Vec<Coord>) = match frame {
        Frame::Geographic => (4326, coords.iter().map(|c| c.to_coord()).collect()),
        Frame::Projected => (
            result.zone.epsg(),
            result.projected.iter().map(|p| p.to_coord()).collect(),
        ),
    };

    // Header FeatureCollection avec CRS
    write!(
        writer,
        r#"{{"type":"FeatureCollection","crs":{{"type":"name","properties":{{"name":"urn:ogc:def:crs:EPSG::{}"}}}},"features":["#,
        epsg
    )?;

    let polygon = Polygon::new(LineString::new(ring), vec![]);
    write_feature(writer, name, &polygon, result)?;

    // Footer
    write!(writer, "]}}")?;

    Ok(())
}

/// Écrit la feature de la parcelle
fn write_feature<W: Write>(
    writer: &mut W,
    name: &str,
    polygon: &Polygon,
    result: &AreaResult,
) -> Result<()> {
    write!(writer, r#"{{"type":"Feature","geometry":"#)?;

    // Geometry via geozero
    let mut geom_buf = Vec::new();
    let mut geom_writer = GeoJsonWriter::new(&mut geom_buf);
    Geometry::Polygon(polygon.clone()).process_geom(&mut geom_writer)?;
    writer.write_all(&geom_buf)?;

    write!(
        writer,
        r#","properties":{{"name":"{}","utm_zone":{},"area_m2":{},"feddan":{},"qirat":{}}}}}"#,
        escape_json(name),
        result.zone.number(),
        result.area_m2,
        result.area_in(AreaUnit::Feddan),
        result.area_in(AreaUnit::Qirat),
    )?;

    Ok(())
}
