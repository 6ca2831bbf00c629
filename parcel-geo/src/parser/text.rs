//! Parser pour les notations texte `D°M'S"` et `D,M,S`

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::types::Dms;
use crate::ParcelError;

/// Notation à symboles. Les séparateurs tolèrent espaces et `:`.
/// Ex: `28°13'30.28"`, `-117°09'12.00"`, `28 13 30.28`, `28:13:30.28`
/// Les secondes acceptent un point final ou initial (`30.`, `.5`).
const SYMBOL_PATTERN: &str = r#"^\s*([+-])?\s*(\d+)\s*(?:°|º|:|\s)\s*(\d+)\s*(?:'|’|′|:|\s)\s*(\d+(?:\.\d*)?|\.\d+)\s*(?:"|”|″|'')?\s*$"#;

/// Notation à virgules. Ex: `28,13,30.28`
const COMMA_PATTERN: &str = r"^\s*([+-])?\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+(?:\.\d*)?|\.\d+)\s*$";

fn symbol_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SYMBOL_PATTERN).expect("valid DMS symbol pattern"))
}

fn comma_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COMMA_PATTERN).expect("valid DMS comma pattern"))
}

/// Parse une composante DMS texte. Le signe vient uniquement du `-` de tête.
pub fn parse_text(input: &str) -> Result<Dms, ParcelError> {
    let caps = symbol_regex()
        .captures(input)
        .or_else(|| comma_regex().captures(input))
        .ok_or_else(|| {
            ParcelError::parse(input, r#"expected D°M'S" or D,M,S notation"#)
        })?;

    let dms = from_captures(input, &caps)?;
    super::check_components(input, dms.degrees, dms.minutes, dms.seconds)?;
    Ok(dms)
}

fn from_captures(input: &str, caps: &Captures) -> Result<Dms, ParcelError> {
    let negative = caps.get(1).map_or(false, |m| m.as_str() == "-");

    let degrees = caps[2]
        .parse::<u32>()
        .map_err(|e| ParcelError::parse(input, format!("degrees: {}", e)))?;
    let minutes = caps[3]
        .parse::<u32>()
        .map_err(|e| ParcelError::parse(input, format!("minutes: {}", e)))?;
    let seconds: f64 = fast_float::parse(&caps[4])
        .map_err(|_| ParcelError::parse(input, "seconds: invalid number"))?;

    Ok(Dms {
        degrees,
        minutes,
        seconds,
        negative,
    })
}
