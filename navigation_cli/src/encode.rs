use std::path::PathBuf;

use clap::Args;
use navigation_model::{
    nav_coord::NavCoord,
    polyline::{self, DEFAULT_PRECISION},
};
use tracing::info;

use crate::input::read_json;

#[derive(Args)]
pub struct EncodeArgs {
    /// JSON array of {"lat", "lng"} objects (defaults to stdin)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Number of decimal digits to keep
    #[arg(short, long, env = "NAVPOLY_PRECISION", default_value_t = DEFAULT_PRECISION)]
    precision: u32,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<serde_json::Value> {
    let coordinates: Vec<NavCoord> = serde_json::from_value(read_json(args.input.as_deref())?)?;

    encode_record(&coordinates, args.precision)
}

fn encode_record(coordinates: &[NavCoord], precision: u32) -> anyhow::Result<serde_json::Value> {
    let points = polyline::encode_with_precision(coordinates, precision)?;
    info!("Encoded {} points", coordinates.len());

    Ok(serde_json::json!({ "points": points }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_encode_record() {
        let coordinates = [
            NavCoord::new(38.5, -120.2),
            NavCoord::new(40.7, -120.95),
            NavCoord::new(43.252, -126.453),
        ];

        assert_eq!(
            encode_record(&coordinates, DEFAULT_PRECISION).unwrap(),
            json!({ "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" })
        );
    }

    #[test]
    fn test_encode_out_of_range() {
        assert!(encode_record(&[NavCoord::new(91.0, 0.0)], DEFAULT_PRECISION).is_err());
    }
}
