// ── Color ─────────────────────────────────────────────────────────────────

/// Straight-alpha sRGB color, one byte per channel.
///
/// Canvas backends convert to whatever their renderer expects; the core only
/// ever stores and forwards these.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

// ── RegionStyle ───────────────────────────────────────────────────────────

/// Background/foreground pair for one dock region.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RegionStyle {
    pub background: Color,
    pub foreground: Color,
}

impl RegionStyle {
    #[inline]
    pub const fn new(background: Color, foreground: Color) -> Self {
        Self { background, foreground }
    }
}

// ── Theme ─────────────────────────────────────────────────────────────────

/// Per-region colors for the five dock regions.
///
/// The default center background is fully transparent so the center never
/// visually competes with content the application draws underneath (the 3D
/// viewport, typically).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Theme {
    pub top: RegionStyle,
    pub bottom: RegionStyle,
    pub left: RegionStyle,
    pub right: RegionStyle,
    pub center: RegionStyle,
}

impl Theme {
    pub fn dark() -> Self {
        let fg = Color::from_rgb(0xe6, 0xe6, 0xe6);
        Self {
            top: RegionStyle::new(Color::from_rgb(0x2a, 0x2a, 0x33), fg),
            bottom: RegionStyle::new(Color::from_rgb(0x20, 0x20, 0x28), fg),
            left: RegionStyle::new(Color::from_rgb(0x26, 0x26, 0x2e), fg),
            right: RegionStyle::new(Color::from_rgb(0x26, 0x26, 0x2e), fg),
            center: RegionStyle::new(Color::TRANSPARENT, fg),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
