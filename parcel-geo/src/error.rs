//! Types d'erreurs pour le crate parcel-geo

use thiserror::Error;

/// Erreurs pouvant survenir lors du parsing DMS ou du calcul de surface
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParcelError {
    /// Valeur DMS illisible (grammaire ou composante hors bornes)
    #[error("Cannot parse DMS value {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// La parcelle ne contient pas exactement 4 sommets
    #[error("Expected exactly 4 coordinate pairs, got {0}")]
    PointCount(usize),

    /// Coordonnée décimale hors de son domaine
    #[error("Coordinate out of range: {axis} = {value}")]
    OutOfRange { axis: &'static str, value: f64 },

    /// Échec de construction ou d'application de la projection
    #[error("Projection failed: {0}")]
    Projection(String),
}

impl ParcelError {
    /// Crée une erreur de parsing en conservant l'entrée telle quelle
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Vrai pour les erreurs de saisie (nombre de sommets, bornes)
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::PointCount(_) | Self::OutOfRange { .. })
    }

    /// Vrai pour les erreurs de parsing DMS
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_keeps_input_verbatim() {
        let err = ParcelError::parse("28 13", "missing seconds");
        assert!(err.is_parse_error());
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("\"28 13\""));
    }

    #[test]
    fn test_input_errors() {
        assert!(ParcelError::PointCount(3).is_input_error());
        assert!(ParcelError::OutOfRange {
            axis: "latitude",
            value: 91.0
        }
        .is_input_error());
        assert!(!ParcelError::Projection("x".into()).is_input_error());
    }
}
