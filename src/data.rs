//! Static orbital-element data for the Sun and planets (J2000 epoch).
//! Source: NASA JPL approximate elements, heliocentric ecliptic frame.
//!
//! This module is pure data: no texture paths and no scene handles, so the
//! records are safe to construct in unit tests. Presentation resources are
//! injected by the render layer at spawn time.

use bevy::prelude::Color;

use crate::orbit::OrbitalElements;
use crate::types::{BodyCategory, J2000_JD};

/// Display defaults and orbital elements for one body, before it becomes a
/// live scene entity.
#[derive(Clone, Debug)]
pub struct BodyRecord {
    pub name: String,
    /// Radius in Earth radii (display sizing only)
    pub radius: f64,
    pub color: Color,
    pub opacity: f32,
    pub category: BodyCategory,
    /// None for the Sun, which is pinned at the origin
    pub elements: Option<OrbitalElements>,
}

fn planet(
    name: &str,
    radius: f64,
    color: Color,
    a: f64,
    e: f64,
    i: f64,
    om: f64,
    w: f64,
    ma: f64,
) -> BodyRecord {
    BodyRecord {
        name: name.to_string(),
        radius,
        color,
        opacity: 1.0,
        category: BodyCategory::Planet,
        elements: Some(OrbitalElements {
            a,
            e,
            i,
            om,
            w,
            ma,
            epoch: J2000_JD,
        }),
    }
}

/// The Sun: fixed at the origin, never traced, no orbital elements.
pub fn sun() -> BodyRecord {
    BodyRecord {
        name: "Sun".to_string(),
        radius: 3.0,
        color: Color::srgb_u8(0xFF, 0xFF, 0x00),
        opacity: 1.0,
        category: BodyCategory::Sun,
        elements: None,
    }
}

/// The eight planets with J2000 osculating elements.
pub fn planets() -> Vec<BodyRecord> {
    vec![
        planet(
            "Mercury",
            0.383,
            Color::srgb_u8(0xD3, 0xD3, 0xD3), // LightGray
            0.38709927,
            0.20563593,
            7.00497902,
            48.33076593,
            77.45779628,
            174.796,
        ),
        planet(
            "Venus",
            0.949,
            Color::srgb_u8(0xFF, 0xFF, 0xE0), // LightYellow
            0.72333566,
            0.00677672,
            3.39467605,
            76.67984255,
            131.60246718,
            50.115,
        ),
        planet(
            "Earth",
            1.0,
            Color::srgb_u8(0x00, 0xBF, 0xFF), // DeepSkyBlue
            1.00000261,
            0.01671123,
            -0.00001531,
            0.0,
            102.93768193,
            100.464,
        ),
        planet(
            "Mars",
            0.532,
            Color::srgb_u8(0xCD, 0x5C, 0x5C), // IndianRed
            1.52371034,
            0.09339410,
            1.84969142,
            49.55953891,
            -23.94362959,
            355.453,
        ),
        planet(
            "Jupiter",
            11.21,
            Color::srgb_u8(0xCD, 0x85, 0x3F), // Peru
            5.20288700,
            0.04838624,
            1.30439695,
            100.47390909,
            14.72847983,
            19.650,
        ),
        planet(
            "Saturn",
            9.45,
            Color::srgb_u8(0xF0, 0xE6, 0x8C), // Khaki
            9.53667594,
            0.05386179,
            2.48599187,
            113.66242448,
            92.59887831,
            317.020,
        ),
        planet(
            "Uranus",
            4.01,
            Color::srgb_u8(0xE0, 0xFF, 0xFF), // LightCyan
            19.18916464,
            0.04725744,
            0.77263783,
            74.01692503,
            170.95427630,
            142.238,
        ),
        planet(
            "Neptune",
            3.88,
            Color::srgb_u8(0x41, 0x69, 0xE1), // RoyalBlue
            30.06992276,
            0.00859048,
            1.77004347,
            131.78422574,
            44.96476227,
            256.228,
        ),
    ]
}
