use std::path::PathBuf;

use clap::Args;
use navigation_model::{
    nav_polyline::{NavPolyline, line_string_feature},
    polyline::DEFAULT_PRECISION,
};
use tracing::info;

use crate::input::read_json;

#[derive(Args)]
pub struct DecodeArgs {
    /// JSON record holding a "points" field (defaults to stdin)
    #[arg(short = 'i', long, conflicts_with = "raw")]
    input: Option<PathBuf>,

    /// Encoded polyline string, instead of a record
    #[arg(long)]
    pub raw: Option<String>,

    /// Number of decimal digits the polyline was encoded with
    #[arg(short, long, env = "NAVPOLY_PRECISION", default_value_t = DEFAULT_PRECISION)]
    pub precision: u32,

    /// Output a GeoJSON LineString feature instead of coordinates
    #[arg(long)]
    pub geojson: bool,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<serde_json::Value> {
    let polyline = match args.raw {
        Some(raw) => NavPolyline::new(raw),
        None => NavPolyline::from_json(&read_json(args.input.as_deref())?),
    };

    decode_polyline(&polyline, args.precision, args.geojson)
}

fn decode_polyline(
    polyline: &NavPolyline,
    precision: u32,
    geojson: bool,
) -> anyhow::Result<serde_json::Value> {
    if polyline.points().is_none() {
        info!("Record has no points");
        return Ok(serde_json::Value::Null);
    }

    let coordinates = polyline.try_coordinates_with_precision(precision)?;
    info!("Decoded {} points", coordinates.len());

    if geojson {
        Ok(serde_json::to_value(line_string_feature(&coordinates))?)
    } else {
        Ok(serde_json::to_value(coordinates)?)
    }
}
