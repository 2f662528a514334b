//! Font descriptor for text annotations.

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name, weight, and style.
/// The pixel size is not part of the descriptor; it is derived from each text
/// shape's stored thickness at paint time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Arial", "DejaVu Sans")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Converts this font descriptor to a Pango font description string without a size.
    ///
    /// Format: "Family Style Weight"
    /// Example: "Sans Bold" or "Monospace Italic"
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.style));
        }

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.join(" ")
    }

    /// Builds a Pango font description sized in device pixels.
    pub fn to_pango_description(&self, pixel_size: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::from_string(&self.to_pango_string());
        desc.set_absolute_size(pixel_size * f64::from(pango::SCALE));
        desc
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
