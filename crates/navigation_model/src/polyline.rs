//! Encoded polyline codec.
//!
//! Every coordinate is stored as the fixed-point delta from the previous one,
//! zig-zag signed and split into 5-bit chunks. Each chunk is offset by 63 so
//! the output stays in the printable range `?`..=`~`, and every chunk except
//! the last of a value carries the `0x20` continuation bit.

use tracing::debug;

use crate::{error::PolylineError, nav_coord::NavCoord};

pub const DEFAULT_PRECISION: u32 = 5;
pub const MAX_PRECISION: u32 = 10;

const CHUNK_OFFSET: u8 = 63;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION_BIT: u64 = 0x20;
const MAX_CHARACTER: u8 = b'~';

fn precision_factor(precision: u32) -> Result<f64, PolylineError> {
    if precision > MAX_PRECISION {
        return Err(PolylineError::InvalidPrecision(precision));
    }

    Ok(10_i64.pow(precision) as f64)
}

pub fn decode(encoded: &str) -> Result<Vec<NavCoord>, PolylineError> {
    decode_with_precision(encoded, DEFAULT_PRECISION)
}

pub fn decode_with_precision(
    encoded: &str,
    precision: u32,
) -> Result<Vec<NavCoord>, PolylineError> {
    let factor = precision_factor(precision)?;
    let bytes = encoded.as_bytes();

    let mut coordinates = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let start = index;
        let lat_delta = next_value(bytes, &mut index)?;
        if index >= bytes.len() {
            // A latitude without its longitude
            return Err(PolylineError::UnexpectedEnd { index });
        }
        let lng_delta = next_value(bytes, &mut index)?;

        lat = lat
            .checked_add(lat_delta)
            .ok_or(PolylineError::Overflow { index: start })?;
        lng = lng
            .checked_add(lng_delta)
            .ok_or(PolylineError::Overflow { index: start })?;

        let coord = NavCoord::new(lat as f64 / factor, lng as f64 / factor);
        check_range(&coord)?;
        coordinates.push(coord);
    }

    debug!(
        "Decoded polyline of {} characters into {} points",
        bytes.len(),
        coordinates.len()
    );

    Ok(coordinates)
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let start = *index;
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::UnexpectedEnd { index: *index });
        };

        if !(CHUNK_OFFSET..=MAX_CHARACTER).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                // Multi-byte characters are reported by their first byte's position
                character: decode_char_at(bytes, *index),
                index: *index,
            });
        }

        let chunk = u64::from(byte - CHUNK_OFFSET);
        let bits = chunk & CHUNK_MASK;
        if shift >= 64 || (shift == 60 && bits > 0x0f) {
            return Err(PolylineError::Overflow { index: start });
        }

        result |= bits << shift;
        shift += 5;
        *index += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    let value = (result >> 1) as i64;
    Ok(if result & 1 == 1 { !value } else { value })
}

fn decode_char_at(bytes: &[u8], index: usize) -> char {
    std::str::from_utf8(&bytes[index..])
        .ok()
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn check_range(coord: &NavCoord) -> Result<(), PolylineError> {
    if !coord.lat.is_finite() || !(-90.0..=90.0).contains(&coord.lat) {
        return Err(PolylineError::LatitudeOutOfRange(coord.lat));
    }

    if !coord.lng.is_finite() || !(-180.0..=180.0).contains(&coord.lng) {
        return Err(PolylineError::LongitudeOutOfRange(coord.lng));
    }

    Ok(())
}

pub fn encode(coordinates: &[NavCoord]) -> Result<String, PolylineError> {
    encode_with_precision(coordinates, DEFAULT_PRECISION)
}

pub fn encode_with_precision(
    coordinates: &[NavCoord],
    precision: u32,
) -> Result<String, PolylineError> {
    let factor = precision_factor(precision)?;

    let mut encoded = String::with_capacity(coordinates.len() * 8);
    let mut previous_lat: i64 = 0;
    let mut previous_lng: i64 = 0;

    for coord in coordinates {
        check_range(coord)?;

        let lat = (coord.lat * factor).round() as i64;
        let lng = (coord.lng * factor).round() as i64;

        push_value(&mut encoded, lat - previous_lat);
        push_value(&mut encoded, lng - previous_lng);

        previous_lat = lat;
        previous_lng = lng;
    }

    Ok(encoded)
}

fn push_value(encoded: &mut String, delta: i64) {
    let mut value = ((delta << 1) ^ (delta >> 63)) as u64;

    while value >= CONTINUATION_BIT {
        let chunk = (CONTINUATION_BIT | (value & CHUNK_MASK)) as u8 + CHUNK_OFFSET;
        encoded.push(char::from(chunk));
        value >>= 5;
    }

    encoded.push(char::from(value as u8 + CHUNK_OFFSET));
}
