//! RGBA color type, colour text parsing, and predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use vidmark::draw::Color;
/// let red = Color::parse("#ff0000").unwrap();
/// assert_eq!(red, Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from 0-255 channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Parses colour text as stored on annotation shapes.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` and the named palette colours
    /// (see [`crate::util::name_to_color`]). Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let Some(hex) = text.strip_prefix('#') else {
            return crate::util::name_to_color(text);
        };

        if !hex.is_ascii() {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let mut parts = hex.chars().map(|c| channel(&c.to_string()).map(|v| v * 17));
                let r = parts.next()??;
                let g = parts.next()??;
                let b = parts.next()??;
                Some(Self::from_rgb8(r, g, b))
            }
            6 | 8 => {
                let r = channel(&hex[0..2])?;
                let g = channel(&hex[2..4])?;
                let b = channel(&hex[4..6])?;
                let mut color = Self::from_rgb8(r, g, b);
                if hex.len() == 8 {
                    color.a = f64::from(channel(&hex[6..8])?) / 255.0;
                }
                Some(color)
            }
            _ => None,
        }
    }

    /// Formats the color as `#rrggbb` (alpha is dropped).
    pub fn to_hex(&self) -> String {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

/// Colour text applied to new annotations when nothing else is configured.
pub const DEFAULT_ANNOTATION_COLOR: &str = "#00ff00";

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
