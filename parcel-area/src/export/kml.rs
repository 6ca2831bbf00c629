//! Export KML du contour de la parcelle
//!
//! Un Placemark avec un Polygon dont l'anneau reprend les sommets
//! géographiques (`lon,lat,0`), fermé en répétant le premier sommet.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use parcel_geo::DecimalCoord;

use super::escape_xml;

/// Exporte le contour de la parcelle dans un fichier KML
pub fn export_to_kml(
    name: &str,
    coords: &[DecimalCoord],
    description: Option<&str>,
    output_path: &Path,
) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    write_kml(&mut writer, name, coords, description)?;
    writer.flush()?;

    Ok(())
}

/// Écrit le document KML
pub fn write_kml<W: Write>(
    writer: &mut W,
    name: &str,
    coords: &[DecimalCoord],
    description: Option<&str>,
) -> Result<()> {
    let name = escape_xml(name);

    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(writer, r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#)?;
    writeln!(writer, "  <Document>")?;
    writeln!(writer, "    <name>{}</name>", name)?;
    writeln!(writer, "    <Placemark>")?;
    writeln!(writer, "      <name>{}</name>", name)?;
    if let Some(description) = description {
        writeln!(
            writer,
            "      <description>{}</description>",
            escape_xml(description)
        )?;
    }
    writeln!(writer, "      <Polygon>")?;
    writeln!(writer, "        <outerBoundaryIs>")?;
    writeln!(writer, "          <LinearRing>")?;
    writeln!(writer, "            <coordinates>")?;

    // Anneau fermé explicitement : premier sommet répété en dernier
    for c in coords.iter().chain(coords.first()) {
        writeln!(writer, "              {},{},0", c.lon, c.lat)?;
    }

    writeln!(writer, "            </coordinates>")?;
    writeln!(writer, "          </LinearRing>")?;
    writeln!(writer, "        </outerBoundaryIs>")?;
    writeln!(writer, "      </Polygon>")?;
    writeln!(writer, "    </Placemark>")?;
    writeln!(writer, "  </Document>")?;
    writeln!(writer, "</kml>")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> Vec<DecimalCoord> {
        vec![
            DecimalCoord::new(26.5, 28.25),
            DecimalCoord::new(26.5, 28.5),
            DecimalCoord::new(26.75, 28.5),
            DecimalCoord::new(26.75, 28.25),
        ]
    }

    fn coordinate_lines(kml: &str) -> Vec<&str> {
        kml.lines()
            .map(str::trim)
            .skip_while(|l| *l != "<coordinates>")
            .skip(1)
            .take_while(|l| *l != "</coordinates>")
            .collect()
    }

    #[test]
    fn test_ring_is_closed_lon_lat_zero() {
        let mut buffer = Vec::new();
        write_kml(&mut buffer, "Lot", &coords(), None).unwrap();
        let kml = String::from_utf8(buffer).unwrap();

        let lines = coordinate_lines(&kml);
        assert_eq!(
            lines,
            vec![
                "28.25,26.5,0",
                "28.5,26.5,0",
                "28.5,26.75,0",
                "28.25,26.75,0",
                "28.25,26.5,0"
            ]
        );
        assert!(!kml.contains("<description>"));
    }

    #[test]
    fn test_name_and_description_escaped() {
        let mut buffer = Vec::new();
        write_kml(&mut buffer, "Lot <A> & B", &coords(), Some("39.4 feddan")).unwrap();
        let kml = String::from_utf8(buffer).unwrap();

        assert!(kml.contains("<name>Lot &lt;A&gt; &amp; B</name>"));
        assert!(kml.contains("<description>39.4 feddan</description>"));
        assert!(kml.starts_with("<?xml"));
        assert!(kml.trim_end().ends_with("</kml>"));
    }

    #[test]
    fn test_export_to_kml() {
        let output_path = std::env::temp_dir().join("parcel_area_test_export.kml");
        export_to_kml("Lot", &coords(), None, &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("<LinearRing>"));
        assert_eq!(coordinate_lines(&content).len(), 5);

        std::fs::remove_file(output_path).ok();
    }
}
