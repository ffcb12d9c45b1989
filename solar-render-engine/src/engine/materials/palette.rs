use bevy::color::Color;
use bevy::math::Vec3;

/// Up to four linear-space colours fixed at material construction.
///
/// Slots past the supplied colours are black and never read by the programs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    slots: [Vec3; 4],
}

impl Palette {
    /// Build from sRGB hex values such as `0xc4553b`. Takes 2 to 4 entries;
    /// extras are ignored and missing slots stay black.
    pub fn from_hex(colors: &[u32]) -> Self {
        let mut slots = [Vec3::ZERO; 4];
        for (slot, &hex) in slots.iter_mut().zip(colors) {
            *slot = linear_from_hex(hex);
        }
        Self { slots }
    }

    pub fn color(&self, index: usize) -> Vec3 {
        self.slots[index]
    }

    pub fn slots(&self) -> [Vec3; 4] {
        self.slots
    }
}

/// sRGB hex to Bevy colour.
pub fn srgb_hex(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// sRGB hex to linear RGB, the space the surface programs blend in.
pub fn linear_from_hex(hex: u32) -> Vec3 {
    let linear = srgb_hex(hex).to_linear();
    Vec3::new(linear.red, linear.green, linear.blue)
}
