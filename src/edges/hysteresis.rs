//! Double-threshold hysteresis on a suppressed magnitude grid.
//!
//! Pixels are labeled `Strong` (`v >= high`), `Weak` (`low <= v < high`) or
//! `NonEdge`. The default [`Propagation::OneHop`] rule promotes a weak pixel
//! only when a strong pixel sits in its own 3×3 neighborhood; a chain of weak
//! pixels does not carry edge status further. [`Propagation::Connected`] is
//! the textbook flood fill and must be asked for explicitly.
//!
//! The outermost ring is never an edge in either mode.
use crate::error::CannyError;
use crate::image::Grid;
use serde::{Deserialize, Serialize};

/// Per-pixel label before the final edge decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelClass {
    NonEdge,
    Weak,
    Strong,
}

/// How edge status spreads from strong to weak pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Propagation {
    /// Weak pixels need a strong pixel among their 8 neighbors.
    #[default]
    OneHop,
    /// Weak pixels 8-connected to a strong pixel through other weak pixels.
    Connected,
}

/// Validated `(low, high)` threshold pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    low: f32,
    high: f32,
}

impl Thresholds {
    /// Fails unless `0 <= low <= high` (NaN is rejected).
    pub fn new(low: f32, high: f32) -> Result<Self, CannyError> {
        if low.is_nan() || high.is_nan() {
            return Err(CannyError::invalid("thresholds must be numbers"));
        }
        if low < 0.0 || high < 0.0 {
            return Err(CannyError::invalid(format!(
                "thresholds must be non-negative, got low={low} high={high}"
            )));
        }
        if low > high {
            return Err(CannyError::invalid(format!(
                "low threshold {low} exceeds high threshold {high}"
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f32 {
        self.low
    }

    pub fn high(&self) -> f32 {
        self.high
    }

    #[inline]
    pub fn classify(&self, v: f32) -> PixelClass {
        if v >= self.high {
            PixelClass::Strong
        } else if v >= self.low {
            PixelClass::Weak
        } else {
            PixelClass::NonEdge
        }
    }
}

/// Label every pixel of `grid`, row-major.
pub fn classify_pixels(grid: &Grid, thresholds: Thresholds) -> Vec<PixelClass> {
    grid.as_slice()
        .iter()
        .map(|&v| thresholds.classify(v))
        .collect()
}

/// One-hop hysteresis: returns a `{0, 1}` grid of the input's shape.
pub fn classify(suppressed: &Grid, low: f32, high: f32) -> Result<Grid, CannyError> {
    classify_with(suppressed, Thresholds::new(low, high)?, Propagation::OneHop)
}

pub fn classify_with(
    suppressed: &Grid,
    thresholds: Thresholds,
    propagation: Propagation,
) -> Result<Grid, CannyError> {
    let labels = classify_pixels(suppressed, thresholds);
    let (rows, cols) = suppressed.shape();
    if rows < 3 || cols < 3 {
        return Ok(Grid::new(rows, cols));
    }
    Ok(match propagation {
        Propagation::OneHop => promote_one_hop(&labels, rows, cols),
        Propagation::Connected => promote_connected(&labels, rows, cols),
    })
}

#[inline]
fn is_interior(y: usize, x: usize, rows: usize, cols: usize) -> bool {
    y > 0 && x > 0 && y + 1 < rows && x + 1 < cols
}

fn promote_one_hop(labels: &[PixelClass], rows: usize, cols: usize) -> Grid {
    Grid::par_from_rows(rows, cols, |y, out_row| {
        if y == 0 || y == rows - 1 {
            return;
        }
        for x in 1..cols - 1 {
            let edge = match labels[y * cols + x] {
                PixelClass::Strong => true,
                PixelClass::Weak => (y - 1..=y + 1).any(|ny| {
                    labels[ny * cols + x - 1..=ny * cols + x + 1]
                        .iter()
                        .any(|&l| l == PixelClass::Strong)
                }),
                PixelClass::NonEdge => false,
            };
            if edge {
                out_row[x] = 1.0;
            }
        }
    })
}

fn promote_connected(labels: &[PixelClass], rows: usize, cols: usize) -> Grid {
    let mut out = Grid::new(rows, cols);
    let mut visited = vec![false; rows * cols];
    let mut stack = Vec::new();
    // Strong border pixels seed the search like the one-hop rule lets them,
    // but only interior pixels are ever marked.
    for (i, &label) in labels.iter().enumerate() {
        if label != PixelClass::Strong || visited[i] {
            continue;
        }
        visited[i] = true;
        stack.push((i / cols, i % cols));
        while let Some((cy, cx)) = stack.pop() {
            if is_interior(cy, cx, rows, cols) {
                out.set(cy, cx, 1.0);
            }
            for ny in cy.saturating_sub(1)..=(cy + 1).min(rows - 1) {
                for nx in cx.saturating_sub(1)..=(cx + 1).min(cols - 1) {
                    let j = ny * cols + nx;
                    if !visited[j]
                        && labels[j] != PixelClass::NonEdge
                        && is_interior(ny, nx, rows, cols)
                    {
                        visited[j] = true;
                        stack.push((ny, nx));
                    }
                }
            }
        }
    }
    out
}
