//! Conversion des composantes DMS en degrés décimaux signés
//!
//! Deux formes d'entrée, une seule source de signe par appel :
//! - texte (`D°M'S"`, `D,M,S`) avec `-` éventuel en tête
//! - champs numériques séparés avec un hémisphère `N/S/E/W`

pub mod text;

pub use text::parse_text;

use crate::types::{Dms, DmsValue, Hemisphere};
use crate::ParcelError;

/// Degré maximal accepté pour une composante (longitude)
pub const MAX_DEGREES: u32 = 180;

/// Convertit une valeur DMS en degrés décimaux signés
pub fn parse(value: DmsValue<'_>) -> Result<f64, ParcelError> {
    let dms = match value {
        DmsValue::Text(input) => parse_text(input)?,
        DmsValue::Fields {
            degrees,
            minutes,
            seconds,
            hemisphere,
        } => parse_fields(degrees, minutes, seconds, hemisphere)?,
    };
    Ok(dms.to_decimal())
}

/// Construit une composante depuis des champs séparés. Le signe vient de l'hémisphère.
pub fn parse_fields(
    degrees: u32,
    minutes: u32,
    seconds: f64,
    hemisphere: Hemisphere,
) -> Result<Dms, ParcelError> {
    let input = format!("{}°{}'{}\"{}", degrees, minutes, seconds, hemisphere);
    check_components(&input, degrees, minutes, seconds)?;

    Ok(Dms {
        degrees,
        minutes,
        seconds,
        negative: hemisphere.is_negative(),
    })
}

/// Vérifie minutes < 60, 0 <= secondes < 60, degrés <= 180
pub(crate) fn check_components(
    input: &str,
    degrees: u32,
    minutes: u32,
    seconds: f64,
) -> Result<(), ParcelError> {
    if degrees > MAX_DEGREES {
        return Err(ParcelError::parse(
            input,
            format!("degrees must be <= {}", MAX_DEGREES),
        ));
    }
    if minutes >= 60 {
        return Err(ParcelError::parse(input, "minutes must be < 60"));
    }
    if !seconds.is_finite() || !(0.0..60.0).contains(&seconds) {
        return Err(ParcelError::parse(input, "seconds must be in [0, 60)"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_value() {
        let dd = parse(DmsValue::Text("26°57'42.46\"")).unwrap();
        assert!((dd - (26.0 + 57.0 / 60.0 + 42.46 / 3600.0)).abs() < 1e-12);
    }

    #[test]
    fn test_parse_fields_hemisphere_sign() {
        let east = parse(DmsValue::Fields {
            degrees: 28,
            minutes: 13,
            seconds: 30.28,
            hemisphere: Hemisphere::East,
        })
        .unwrap();
        let west = parse(DmsValue::Fields {
            degrees: 28,
            minutes: 13,
            seconds: 30.28,
            hemisphere: Hemisphere::West,
        })
        .unwrap();
        assert_eq!(west, -east);
        assert!(east > 0.0);
    }

    #[test]
    fn test_formula_and_exact_negation() {
        for (d, m, s) in [(0u32, 0u32, 0.0f64), (28, 13, 30.28), (179, 59, 59.999), (45, 0, 0.5)] {
            let expected = d as f64 + m as f64 / 60.0 + s / 3600.0;
            let pos = parse_fields(d, m, s, Hemisphere::North).unwrap().to_decimal();
            let neg = parse_fields(d, m, s, Hemisphere::South).unwrap().to_decimal();
            assert_eq!(pos, expected);
            assert_eq!(neg, -expected);
        }
    }

    #[test]
    fn test_fields_bounds() {
        assert!(parse_fields(10, 60, 0.0, Hemisphere::North).is_err());
        assert!(parse_fields(10, 0, 60.0, Hemisphere::North).is_err());
        assert!(parse_fields(10, 0, -1.0, Hemisphere::North).is_err());
        assert!(parse_fields(10, 0, f64::NAN, Hemisphere::North).is_err());
        assert!(parse_fields(200, 0, 0.0, Hemisphere::East).is_err());
    }
}
