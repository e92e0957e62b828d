//! Feature visualization
//!
//! Renders the two-panel feature figure: the spectral-centroid series as a
//! line plot on top, the chroma matrix as a heat map below (pitch class on
//! the vertical axis, time frames on the horizontal). Rendering goes through
//! plotters; the figure can be written to a PNG or shown in a blocking
//! window. Callers that never ask for a figure pay nothing.

use minifb::{Key, Window, WindowOptions};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use crate::error::AnalysisError;

/// Default figure width in pixels
pub const DEFAULT_WIDTH: usize = 1200;

/// Default figure height in pixels
pub const DEFAULT_HEIGHT: usize = 800;

/// Render the feature figure into an RGB pixel buffer
///
/// # Arguments
///
/// * `centroids` - Spectral centroid series in Hz
/// * `chroma` - Chroma matrix (one 12-bin vector per frame)
/// * `width` - Figure width in pixels
/// * `height` - Figure height in pixels
///
/// # Returns
///
/// RGB buffer of `width * height * 3` bytes, row-major top to bottom
///
/// # Errors
///
/// Returns `AnalysisError::RenderError` if drawing fails.
pub fn render_rgb(
    centroids: &[f32],
    chroma: &[[f32; 12]],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, AnalysisError> {
    let mut buffer = vec![0u8; width * height * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width as u32, height as u32))
            .into_drawing_area();
        draw_figure(&root, centroids, chroma)?;
        root.present()
            .map_err(|e| AnalysisError::RenderError(e.to_string()))?;
    }
    Ok(buffer)
}

/// Render the feature figure to a PNG file
///
/// # Errors
///
/// Returns `AnalysisError::RenderError` if the file cannot be written or
/// drawing fails.
pub fn render_png(
    path: &Path,
    centroids: &[f32],
    chroma: &[[f32; 12]],
) -> Result<(), AnalysisError> {
    let root = BitMapBackend::new(path, (DEFAULT_WIDTH as u32, DEFAULT_HEIGHT as u32))
        .into_drawing_area();
    draw_figure(&root, centroids, chroma)?;
    root.present()
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;
    log::debug!("Wrote feature plot to {}", path.display());
    Ok(())
}

/// Show the feature figure in a window, blocking until it is closed
///
/// The window closes on ESC or the window manager's close button. This is a
/// presentation side effect only; nothing downstream depends on it.
///
/// # Errors
///
/// Returns `AnalysisError::RenderError` if the window cannot be created or
/// updated.
pub fn show_blocking(centroids: &[f32], chroma: &[[f32; 12]]) -> Result<(), AnalysisError> {
    let rgb = render_rgb(centroids, chroma, DEFAULT_WIDTH, DEFAULT_HEIGHT)?;

    // minifb wants packed 0RGB u32 pixels
    let pixels: Vec<u32> = rgb
        .chunks_exact(3)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect();

    let mut window = Window::new(
        "Feature Plot - ESC to exit",
        DEFAULT_WIDTH,
        DEFAULT_HEIGHT,
        WindowOptions::default(),
    )
    .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    // The figure is static; ~30 fps is plenty for input polling
    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&pixels, DEFAULT_WIDTH, DEFAULT_HEIGHT)
            .map_err(|e| AnalysisError::RenderError(e.to_string()))?;
    }

    Ok(())
}

/// Draw both panels onto a drawing area
fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    centroids: &[f32],
    chroma: &[[f32; 12]],
) -> Result<(), AnalysisError> {
    root.fill(&WHITE)
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    let (_, height) = root.dim_in_pixel();
    let (upper, lower) = root.split_vertically(height / 2);

    draw_centroid_panel(&upper, centroids)?;
    draw_chroma_panel(&lower, chroma)?;

    Ok(())
}

/// Top panel: labeled line plot of the centroid series over its index range
fn draw_centroid_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    centroids: &[f32],
) -> Result<(), AnalysisError> {
    let n_frames = centroids.len().max(1);
    let y_max = centroids.iter().fold(0.0f32, |a, &b| a.max(b)).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption("Spectral Centroid", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0..n_frames, 0.0f32..y_max)
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    chart
        .configure_mesh()
        .y_desc("Hz")
        .draw()
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            centroids.iter().enumerate().map(|(i, &v)| (i, v)),
            &BLUE,
        ))
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?
        .label("Spectral Centroid")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    Ok(())
}

/// Bottom panel: chroma matrix as a heat map, pitch class vertical
fn draw_chroma_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chroma: &[[f32; 12]],
) -> Result<(), AnalysisError> {
    let n_frames = chroma.len().max(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Chroma Features", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..n_frames, 0..12usize)
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Time Frames")
        .y_desc("Pitch Class")
        .draw()
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    chart
        .draw_series(chroma.iter().enumerate().flat_map(|(frame, classes)| {
            classes.iter().enumerate().map(move |(pc, &energy)| {
                Rectangle::new([(frame, pc), (frame + 1, pc + 1)], coolwarm(energy).filled())
            })
        }))
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    Ok(())
}

/// Diverging blue-white-red colormap over [0, 1]
fn coolwarm(t: f32) -> RGBColor {
    const COOL: (f32, f32, f32) = (59.0, 76.0, 192.0);
    const NEUTRAL: (f32, f32, f32) = (221.0, 221.0, 221.0);
    const WARM: (f32, f32, f32) = (180.0, 4.0, 38.0);

    let t = t.clamp(0.0, 1.0);
    let (from, to, u) = if t < 0.5 {
        (COOL, NEUTRAL, t * 2.0)
    } else {
        (NEUTRAL, WARM, (t - 0.5) * 2.0)
    };

    RGBColor(
        (from.0 + (to.0 - from.0) * u) as u8,
        (from.1 + (to.1 - from.1) * u) as u8,
        (from.2 + (to.2 - from.2) * u) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rgb_buffer_size() {
        let centroids = vec![1500.0f32; 64];
        let chroma = vec![[0.5f32; 12]; 64];
        let buf = render_rgb(&centroids, &chroma, 400, 300).unwrap();
        assert_eq!(buf.len(), 400 * 300 * 3);
        // Something must have been drawn over the white fill
        assert!(buf.iter().any(|&b| b != 255));
    }

    #[test]
    fn test_render_rgb_empty_features() {
        // Empty series still renders axes without panicking
        let buf = render_rgb(&[], &[], 400, 300).unwrap();
        assert_eq!(buf.len(), 400 * 300 * 3);
    }

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(0.0), RGBColor(59, 76, 192));
        assert_eq!(coolwarm(1.0), RGBColor(180, 4, 38));
        // Out-of-range values clamp
        assert_eq!(coolwarm(-1.0), coolwarm(0.0));
        assert_eq!(coolwarm(2.0), coolwarm(1.0));
    }
}
