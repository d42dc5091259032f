use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaperSize {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Executive,
}

impl PaperSize {
    /// Portrait dimensions in PostScript points.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            Self::A4 => (595.0, 842.0),
            Self::A5 => (420.0, 595.0),
            Self::Letter => (612.0, 792.0),
            Self::Legal => (612.0, 1008.0),
            Self::Executive => (522.0, 756.0),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::A4 => "A4 (210 x 297 mm)",
            Self::A5 => "A5 (148 x 210 mm)",
            Self::Letter => "Letter (8.5 x 11 in)",
            Self::Legal => "Legal (8.5 x 14 in)",
            Self::Executive => "Executive (7.25 x 10.5 in)",
        }
    }

    pub fn all() -> &'static [PaperSize] {
        &[Self::A4, Self::A5, Self::Letter, Self::Legal, Self::Executive]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Portrait => "Portrait",
            Self::Landscape => "Landscape",
        }
    }

    pub fn all() -> &'static [Orientation] {
        &[Self::Portrait, Self::Landscape]
    }
}

/// Resolutions offered by the page setup dialog.
pub const RESOLUTIONS_DPI: [u32; 3] = [300, 600, 1200];

/// Page settings shared by page setup and print.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintConfiguration {
    #[serde(default)]
    pub paper: PaperSize,

    #[serde(default)]
    pub orientation: Orientation,

    #[serde(default = "default_resolution")]
    pub resolution_dpi: u32,

    #[serde(default = "default_margin")]
    pub margin_points: f64,
}

fn default_resolution() -> u32 {
    1200 // high resolution
}

fn default_margin() -> f64 {
    36.0 // half an inch
}

impl Default for PrintConfiguration {
    fn default() -> Self {
        Self {
            paper: PaperSize::default(),
            orientation: Orientation::default(),
            resolution_dpi: default_resolution(),
            margin_points: default_margin(),
        }
    }
}

impl PrintConfiguration {
    /// Page size in points with the orientation applied.
    pub fn page_size(&self) -> (f64, f64) {
        let (w, h) = self.paper.dimensions();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Width and height of the area inside the margins, never negative.
    pub fn content_size(&self) -> (f64, f64) {
        let (w, h) = self.page_size();
        let m = self.margin_points.max(0.0) * 2.0;
        ((w - m).max(0.0), (h - m).max(0.0))
    }

    pub fn summary(&self) -> String {
        format!(
            "{}, {}, {} dpi",
            self.paper.display_name(),
            self.orientation.display_name(),
            self.resolution_dpi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = PrintConfiguration::default();
        assert_eq!(config.paper, PaperSize::A4);
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.resolution_dpi, 1200);
        assert_eq!(config.margin_points, 36.0);
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let config = PrintConfiguration {
            paper: PaperSize::Letter,
            orientation: Orientation::Landscape,
            ..Default::default()
        };
        assert_eq!(config.page_size(), (792.0, 612.0));
        assert_eq!(config.content_size(), (720.0, 540.0));
    }

    #[test]
    fn test_oversized_margin_clamps_content() {
        let config = PrintConfiguration {
            margin_points: 1000.0,
            ..Default::default()
        };
        assert_eq!(config.content_size(), (0.0, 0.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PrintConfiguration = serde_json::from_str(r#"{"paper": "Legal"}"#).unwrap();
        assert_eq!(config.paper, PaperSize::Legal);
        assert_eq!(config.resolution_dpi, 1200);
    }
}
