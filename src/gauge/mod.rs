//! Arc gauge rendering
//!
//! Draws a throughput value as a two-segment arc: a full-range background
//! arc and a foreground arc whose extent is proportional to the clamped
//! rate. Geometry is fixed on a 150x150 logical surface. Every draw clears
//! the surface first, so redrawing the same value is idempotent.

use std::f64::consts::PI;

/// Logical surface edge length
pub const SURFACE_SIZE: f64 = 150.0;
/// Arc center
pub const CENTER: (f64, f64) = (75.0, 75.0);
/// Arc radius
pub const RADIUS: f64 = 50.0;
/// Stroke width of both arcs
pub const STROKE_WIDTH: f64 = 10.0;
/// Start angle of the gauge sweep
pub const ARC_START: f64 = 0.8 * PI;
/// Full angular extent of the gauge (252 degrees)
pub const ARC_SWEEP: f64 = 1.4 * PI;

/// Which of the two arc segments is being stroked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcStyle {
    /// Full-range track behind the value
    Background,
    /// Foreground segment proportional to the value
    Value,
}

/// One arc stroke instruction issued by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center: (f64, f64),
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub width: f64,
    pub style: ArcStyle,
}

/// Drawing surface the gauge renders onto
pub trait DrawSurface {
    /// Erase everything previously drawn
    fn clear(&mut self);

    /// Stroke one arc segment
    fn stroke_arc(&mut self, arc: ArcSpec);
}

/// Renders a non-negative Mbps value as an arc gauge.
///
/// The arc saturates at `full_scale_mbps`; the numeric rate itself is not
/// capped anywhere in this crate, only its angular display.
#[derive(Debug, Clone)]
pub struct GaugeRenderer {
    full_scale_mbps: f64,
}

impl GaugeRenderer {
    pub fn new(full_scale_mbps: f64) -> Self {
        Self { full_scale_mbps }
    }

    /// Normalize a rate into [0, 1] against the full scale
    pub fn normalized(&self, mbps: f64) -> f64 {
        (mbps / self.full_scale_mbps).clamp(0.0, 1.0)
    }

    /// Angle at which the value arc ends for a given rate
    pub fn end_angle(&self, mbps: f64) -> f64 {
        ARC_START + ARC_SWEEP * self.normalized(mbps)
    }

    /// Clear the surface and redraw both arc segments for `mbps`
    pub fn draw(&self, surface: &mut dyn DrawSurface, mbps: f64) {
        surface.clear();

        surface.stroke_arc(ArcSpec {
            center: CENTER,
            radius: RADIUS,
            start_angle: ARC_START,
            end_angle: ARC_START + ARC_SWEEP,
            width: STROKE_WIDTH,
            style: ArcStyle::Background,
        });

        surface.stroke_arc(ArcSpec {
            center: CENTER,
            radius: RADIUS,
            start_angle: ARC_START,
            end_angle: self.end_angle(mbps),
            width: STROKE_WIDTH,
            style: ArcStyle::Value,
        });
    }
}

/// Character-grid surface for rendering the gauge in a terminal.
///
/// Maps the 150x150 logical surface onto a cell grid, compensating for the
/// roughly 2:1 aspect ratio of terminal cells.
pub struct TextSurface {
    columns: usize,
    rows: usize,
    cells: Vec<char>,
}

impl TextSurface {
    /// Default terminal gauge size
    pub const DEFAULT_COLUMNS: usize = 30;
    pub const DEFAULT_ROWS: usize = 15;

    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![' '; columns * rows],
        }
    }

    /// Render the current cell grid as newline-joined text
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Count of cells carrying a stroke, used to verify clear-and-redraw
    pub fn stroked_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c != ' ').count()
    }

    fn plot(&mut self, x: f64, y: f64, glyph: char) {
        let col = (x / SURFACE_SIZE * self.columns as f64) as usize;
        let row = (y / SURFACE_SIZE * self.rows as f64) as usize;
        if col < self.columns && row < self.rows {
            self.cells[row * self.columns + col] = glyph;
        }
    }
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLUMNS, Self::DEFAULT_ROWS)
    }
}

impl DrawSurface for TextSurface {
    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn stroke_arc(&mut self, arc: ArcSpec) {
        let glyph = match arc.style {
            ArcStyle::Background => '·',
            ArcStyle::Value => '█',
        };

        let span = arc.end_angle - arc.start_angle;
        if span <= 0.0 {
            return;
        }

        // Sample finely enough that no cell along the arc is skipped
        let steps = (span * arc.radius).ceil() as usize * 2;
        for i in 0..=steps {
            let theta = arc.start_angle + span * (i as f64 / steps as f64);
            let x = arc.center.0 + arc.radius * theta.cos();
            let y = arc.center.1 + arc.radius * theta.sin();
            self.plot(x, y, glyph);
        }
    }
}
