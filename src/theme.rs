/*
 * Theme Module
 *
 * Color lookup for the two boid variants. Boids ask for their stroke color on
 * every draw, so switching the theme takes effect on the next frame.
 */

use nannou::color::{rgb, Rgb};

use crate::boid::Variant;

/// Opaque color source keyed on the boid variant.
pub trait ThemeSource {
    fn stroke_color(&self, variant: Variant) -> Rgb<u8>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn background(self) -> Rgb<u8> {
        match self {
            Theme::Dark => rgb(0x11, 0x11, 0x11),
            Theme::Light => rgb(0xf5, 0xf5, 0xf5),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "Night",
            Theme::Light => "Day",
        }
    }
}

impl ThemeSource for Theme {
    fn stroke_color(&self, variant: Variant) -> Rgb<u8> {
        match (self, variant) {
            (Theme::Dark, Variant::Normal) => rgb(0x88, 0x88, 0x88),
            (Theme::Dark, Variant::Highlighted) => rgb(0xff, 0x44, 0x44),
            (Theme::Light, Variant::Normal) => rgb(0x55, 0x55, 0x55),
            (Theme::Light, Variant::Highlighted) => rgb(0xd6, 0x28, 0x28),
        }
    }
}
