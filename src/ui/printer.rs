use fltk::{draw, printer::Printer as PrintDevice};

use crate::app::controllers::Printer;
use crate::app::domain::{PrintConfiguration, TextStyle};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::print_layout::{PrintLayout, TextMeasure};
use crate::ui::style_table::{fltk_color, fltk_font};

/// Prints through FLTK's `Fl_Printer`, whose `begin_job` doubles as the
/// system print dialog.
#[derive(Default)]
pub struct FltkPrinter {
    job: Option<PrintDevice>,
}

impl TextMeasure for FltkPrinter {
    fn width(&self, text: &str, style: &TextStyle) -> f64 {
        draw::set_font(fltk_font(&style.font), style.font.size as i32);
        draw::width(text)
    }
}

impl Printer for FltkPrinter {
    fn print_dialog(&mut self, config: &PrintConfiguration) -> bool {
        tracing::debug!(config = %config.summary(), "opening print dialog");
        let mut device = PrintDevice::default();
        match device.begin_job(0) {
            Ok(_) => {
                self.job = Some(device);
                true
            }
            Err(e) => {
                tracing::debug!("print dialog dismissed: {:?}", e);
                false
            }
        }
    }

    fn print(&mut self, layout: &PrintLayout) -> Result<()> {
        let Some(mut device) = self.job.take() else {
            return Err(AppError::Print("no print job is open".to_string()));
        };
        let result = render_pages(&mut device, layout);
        device.end_job();
        result
    }
}

/// Draw every page, scaling the logical page uniformly into the printable
/// area. Coordinates are handed to the device in dots at the layout's
/// resolution so positions keep sub-point precision.
fn render_pages(device: &mut PrintDevice, layout: &PrintLayout) -> Result<()> {
    let dots = dots_per_point(layout.resolution_dpi);
    for page in &layout.pages {
        device
            .begin_page()
            .map_err(|e| AppError::Print(format!("cannot start page: {:?}", e)))?;

        let (width, height) = device.printable_rect();
        let scale = (page_scale(width, height, layout) / dots) as f32;
        device.scale(scale, scale);

        for line in &page.lines {
            let y = to_dots(line.baseline, dots);
            for segment in &line.segments {
                let size = to_dots(segment.style.font.size as f64, dots).max(1);
                draw::set_font(fltk_font(&segment.style.font), size);
                draw::set_draw_color(fltk_color(segment.style.foreground()));
                draw::draw_text(&segment.text, to_dots(segment.x, dots), y);
            }
        }

        device
            .end_page()
            .map_err(|e| AppError::Print(format!("cannot finish page: {:?}", e)))?;
    }
    Ok(())
}

fn dots_per_point(resolution_dpi: u32) -> f64 {
    resolution_dpi.max(72) as f64 / 72.0
}

fn to_dots(points: f64, dots_per_point: f64) -> i32 {
    (points * dots_per_point).round() as i32
}

fn page_scale(printable_width: i32, printable_height: i32, layout: &PrintLayout) -> f64 {
    if layout.page_width <= 0.0 || layout.page_height <= 0.0 {
        return 1.0;
    }
    let sx = printable_width.max(1) as f64 / layout.page_width;
    let sy = printable_height.max(1) as f64 / layout.page_height;
    sx.min(sy)
}
