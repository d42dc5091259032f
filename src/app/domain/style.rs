use serde::{Deserialize, Serialize};

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`, the way the color dialog displays it.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Font families available in every FLTK build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontFace {
    #[default]
    Helvetica,
    Courier,
    Times,
    Screen,
}

impl FontFace {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::Courier => "Courier",
            Self::Times => "Times",
            Self::Screen => "Screen",
        }
    }

    pub fn all() -> &'static [FontFace] {
        &[Self::Helvetica, Self::Courier, Self::Times, Self::Screen]
    }
}

pub const MIN_FONT_SIZE: u32 = 6;
pub const MAX_FONT_SIZE: u32 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontSpec {
    pub face: FontFace,
    pub size: u32,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl FontSpec {
    pub fn new(face: FontFace, size: u32) -> Self {
        Self {
            face,
            size: size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            bold: false,
            italic: false,
        }
    }

    pub fn describe(&self) -> String {
        let mut s = format!("{} {}", self.face.display_name(), self.size);
        if self.bold {
            s.push_str(" Bold");
        }
        if self.italic {
            s.push_str(" Italic");
        }
        s
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(FontFace::Helvetica, 14)
    }
}

/// Character style of a run. A `None` color means "the editor's default
/// foreground", which is what freshly loaded text uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub color: Option<Rgb>,
    pub font: FontSpec,
}

impl TextStyle {
    pub fn plain(font: FontSpec) -> Self {
        Self { color: None, font }
    }

    pub fn with_color(self, color: Rgb) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Resolved foreground, falling back to black.
    pub fn foreground(&self) -> Rgb {
        self.color.unwrap_or(Rgb::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_is_clamped() {
        assert_eq!(FontSpec::new(FontFace::Courier, 2).size, MIN_FONT_SIZE);
        assert_eq!(FontSpec::new(FontFace::Courier, 500).size, MAX_FONT_SIZE);
        assert_eq!(FontSpec::new(FontFace::Courier, 16).size, 16);
    }

    #[test]
    fn test_describe_font() {
        let mut font = FontSpec::new(FontFace::Times, 12);
        assert_eq!(font.describe(), "Times 12");
        font.bold = true;
        font.italic = true;
        assert_eq!(font.describe(), "Times 12 Bold Italic");
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::new(255, 0, 16).to_hex(), "#ff0010");
        assert_eq!(Rgb::from((1, 2, 3)), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_plain_style_defaults_to_black() {
        let style = TextStyle::plain(FontSpec::default());
        assert_eq!(style.color, None);
        assert_eq!(style.foreground(), Rgb::BLACK);
        let red = style.with_color(Rgb::new(255, 0, 0));
        assert_eq!(red.foreground(), Rgb::new(255, 0, 0));
        assert_eq!(red.font, style.font);
    }

    #[test]
    fn test_font_spec_partial_json() {
        let json = r#"{"face": "Courier", "size": 18}"#;
        let font: FontSpec = serde_json::from_str(json).unwrap();
        assert_eq!(font.face, FontFace::Courier);
        assert!(!font.bold);
    }
}
