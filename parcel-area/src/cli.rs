//! Définition et implémentation des commandes CLI
//!
//! - défaut : calcul de surface et rapport
//! - `to-kml` : contour de la parcelle en KML
//! - `to-geojson` : contour de la parcelle en GeoJSON

use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Subcommand};
use parcel_geo::{compute_area_with, AreaResult, AreaUnit, Backend, DecimalCoord};
use tracing::{debug, info, warn};

use parcel_area::config::{Config, Settings};
use parcel_area::export::geojson::{export_to_geojson, Frame};
use parcel_area::export::kml::export_to_kml;
use parcel_area::report::{format_grouped, AreaReport};

#[derive(Subcommand)]
pub enum Commands {
    /// Export the parcel outline to KML
    ToKml {
        #[command(flatten)]
        parcel: ParcelArgs,

        /// Output KML file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Export the parcel outline to GeoJSON
    ToGeojson {
        #[command(flatten)]
        parcel: ParcelArgs,

        /// Output GeoJSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Write projected UTM coordinates (meters) instead of WGS84 degrees
        #[arg(long)]
        projected: bool,
    },
}

/// Source des sommets de la parcelle
#[derive(Args, Debug, Clone, Default)]
pub struct ParcelArgs {
    /// Corner longitude in DMS (repeat 4 times, in boundary order), e.g. 28°13'30.28"
    #[arg(long = "lon", value_name = "DMS", allow_hyphen_values = true)]
    pub lons: Vec<String>,

    /// Corner latitude in DMS (repeat 4 times, same order as --lon)
    #[arg(long = "lat", value_name = "DMS", allow_hyphen_values = true)]
    pub lats: Vec<String>,

    /// JSON parcel file
    #[arg(short, long, conflicts_with_all = ["lons", "lats", "preset"])]
    pub input: Option<PathBuf>,

    /// Embedded parcel preset (sample)
    #[arg(long, conflicts_with_all = ["lons", "lats"])]
    pub preset: Option<String>,

    /// Parcel name used in reports and exports (défaut : env PARCEL_AREA_NAME)
    #[arg(long)]
    pub name: Option<String>,

    /// Projection backend: lite, proj (défaut : env PARCEL_AREA_BACKEND / lite)
    #[arg(long)]
    pub backend: Option<Backend>,
}

/// Arguments de la commande par défaut
#[derive(Args, Debug, Clone, Default)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub parcel: ParcelArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Save the JSON report to a file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print only the area in this unit: m2, km2, feddan, qirat
    #[arg(long, conflicts_with = "json")]
    pub unit: Option<AreaUnit>,
}

/// Parcelle chargée et calculée
#[derive(Debug)]
struct Computed {
    name: String,
    coords: Vec<DecimalCoord>,
    result: AreaResult,
}

impl ParcelArgs {
    /// Charge la parcelle depuis le fichier, le preset ou les arguments
    fn load_config(&self) -> Result<Config> {
        let mut config = if let Some(path) = &self.input {
            Config::load(path)?
        } else if let Some(preset) = &self.preset {
            Config::from_preset(preset)?
        } else if !self.lons.is_empty() || !self.lats.is_empty() {
            Config::from_dms_args(&self.lons, &self.lats, None)?
        } else {
            bail!("No parcel given. Use --lon/--lat (4 times each), --input FILE or --preset sample");
        };

        if let Some(name) = &self.name {
            config.name = Some(name.clone());
        }
        Ok(config)
    }
}

/// Charge, convertit et calcule
fn compute(parcel: &ParcelArgs, settings: &Settings) -> Result<Computed> {
    let config = parcel.load_config()?;
    let name = config.display_name(&settings.default_name).to_string();
    let coords = config.to_coords()?;
    let backend = parcel.backend.unwrap_or(settings.backend);
    ensure!(
        backend.is_available(),
        "Projection backend '{}' is not compiled in. Rebuild with --features {}",
        backend,
        backend
    );

    debug!(name = %name, corners = coords.len(), backend = %backend, "Parcel loaded");

    let result = compute_area_with(&coords, backend).context("Area computation failed")?;

    if result.self_intersecting {
        warn!(name = %name, "Corners are not in boundary order, the polygon crosses itself");
    }
    info!(
        name = %name,
        zone = result.zone.number(),
        area_m2 = result.area_m2,
        "Area computed"
    );

    Ok(Computed {
        name,
        coords,
        result,
    })
}

/// Exécute la commande de calcul
pub fn cmd_compute(args: &ComputeArgs, settings: &Settings) -> Result<()> {
    let computed = compute(&args.parcel, settings)?;
    let report = AreaReport::new(&computed.name, &computed.coords, &computed.result);

    if let Some(unit) = args.unit {
        println!("{}", format_area(report.area.get(unit), unit));
    } else if args.json {
        println!("{}", report.to_json()?);
    } else {
        report.print_summary();
    }
    info!("{}", report.summary());

    if let Some(path) = &args.report {
        report.save_to_file(path)?;
        info!(path = %path.display(), "Report saved");
    }

    Ok(())
}

/// Surface seule, avec l'unité
fn format_area(value: f64, unit: AreaUnit) -> String {
    format!("{} {}", format_grouped(value, unit.display_precision()), unit)
}

/// Exécute l'export KML
pub fn cmd_to_kml(parcel: &ParcelArgs, output: &Path, settings: &Settings) -> Result<()> {
    let computed = compute(parcel, settings)?;
    let description = format!(
        "Area: {} m² / {} feddan (UTM zone {})",
        format_grouped(computed.result.area_m2, 2),
        format_grouped(computed.result.area_in(AreaUnit::Feddan), 4),
        computed.result.zone
    );

    export_to_kml(&computed.name, &computed.coords, Some(&description), output)?;

    println!("KML written: {}", output.display());
    Ok(())
}

/// Exécute l'export GeoJSON
pub fn cmd_to_geojson(
    parcel: &ParcelArgs,
    output: &Path,
    projected: bool,
    settings: &Settings,
) -> Result<()> {
    let computed = compute(parcel, settings)?;
    let frame = if projected {
        Frame::Projected
    } else {
        Frame::Geographic
    };

    export_to_geojson(
        &computed.name,
        &computed.coords,
        &computed.result,
        frame,
        output,
    )?;

    println!("GeoJSON written: {}", output.display());
    Ok(())
}
