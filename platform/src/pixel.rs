use std::fmt;
use rgb::{alt::BGRA8, RGBA8};

/// 32-bit color laid out in memory as B, G, R, A.
///
/// That is the order 32-bit DIBs expect, so a `&[Pixel]` can be blitted as is.
/// The packed form reads the same bytes as a little-endian `u32`:
/// `0xAARRGGBB`.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    b: u8,
    g: u8,
    r: u8,
    a: u8,
}

#[allow(dead_code)]
impl Pixel {
    pub const fn hex(hex: u32) -> Self {
        let [b, g, r, a] = hex.to_le_bytes();
        Self { b, g, r, a }
    }

    /// Alpha is left at 0, matching `Pixel::hex(0xRRGGBB)`.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    pub const fn to_hex(self) -> u32 {
        u32::from_le_bytes([self.b, self.g, self.r, self.a])
    }

    #[inline(always)] pub const fn r(self) -> u8 { self.r }
    #[inline(always)] pub const fn g(self) -> u8 { self.g }
    #[inline(always)] pub const fn b(self) -> u8 { self.b }
    #[inline(always)] pub const fn a(self) -> u8 { self.a }

    pub const A_MASK: u32 = 0xFF00_0000;
    pub const R_MASK: u32 = 0x00FF_0000;
    pub const G_MASK: u32 = 0x0000_FF00;
    pub const B_MASK: u32 = 0x0000_00FF;

    pub const TRANSPARENT: Self = Self::hex(0);
    pub const BLACK: Self = Self::hex(Self::A_MASK);
    pub const WHITE: Self = Self::hex(Self::A_MASK | Self::R_MASK | Self::G_MASK | Self::B_MASK);
    pub const RED: Self = Self::hex(Self::A_MASK | Self::R_MASK);
    pub const GREEN: Self = Self::hex(Self::A_MASK | Self::G_MASK);
    pub const BLUE: Self = Self::hex(Self::A_MASK | Self::B_MASK);
}

impl From<u32> for Pixel {
    fn from(hex: u32) -> Self {
        Self::hex(hex)
    }
}

impl From<Pixel> for u32 {
    fn from(pixel: Pixel) -> Self {
        pixel.to_hex()
    }
}

impl From<RGBA8> for Pixel {
    fn from(c: RGBA8) -> Self {
        Self::rgba(c.r, c.g, c.b, c.a)
    }
}

impl From<Pixel> for RGBA8 {
    fn from(p: Pixel) -> Self {
        RGBA8 { r: p.r, g: p.g, b: p.b, a: p.a }
    }
}

impl From<BGRA8> for Pixel {
    fn from(c: BGRA8) -> Self {
        Self { b: c.b, g: c.g, r: c.r, a: c.a }
    }
}

impl From<Pixel> for BGRA8 {
    fn from(p: Pixel) -> Self {
        BGRA8 { b: p.b, g: p.g, r: p.r, a: p.a }
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pixel(0x{:08X})", self.to_hex())
    }
}
