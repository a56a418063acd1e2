//! Square convolution kernels: the normalized Gaussian used for smoothing and
//! the fixed 3×3 derivative pairs used for gradients.
use crate::error::CannyError;

/// Odd-sized square kernel stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Wrap `size × size` row-major weights. `size` must be odd and positive.
    pub fn new(size: usize, weights: Vec<f32>) -> Result<Self, CannyError> {
        validate_size(size)?;
        if weights.len() != size * size {
            return Err(CannyError::invalid(format!(
                "kernel of size {size} needs {} weights, got {}",
                size * size,
                weights.len()
            )));
        }
        Ok(Self { size, weights })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the center tap to the kernel edge.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.weights[row * self.size + col]
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    pub fn transpose(&self) -> Kernel {
        let n = self.size;
        let mut weights = vec![0.0; n * n];
        for r in 0..n {
            for c in 0..n {
                weights[c * n + r] = self.weights[r * n + c];
            }
        }
        Kernel { size: n, weights }
    }
}

/// Compile-time 3×3 kernel, promoted to [`Kernel`] on use.
#[derive(Clone, Copy, Debug)]
pub struct Kernel3(pub [[f32; 3]; 3]);

impl From<Kernel3> for Kernel {
    fn from(k: Kernel3) -> Self {
        Kernel {
            size: 3,
            weights: k.0.iter().flatten().copied().collect(),
        }
    }
}

/// Horizontal Sobel derivative; the vertical one is its transpose.
pub const SOBEL_X: Kernel3 = Kernel3([[1.0, 0.0, -1.0], [2.0, 0.0, -2.0], [1.0, 0.0, -1.0]]);

/// Horizontal Scharr derivative (better rotational symmetry than Sobel).
pub const SCHARR_X: Kernel3 = Kernel3([[3.0, 0.0, -3.0], [10.0, 0.0, -10.0], [3.0, 0.0, -3.0]]);

fn validate_size(size: usize) -> Result<(), CannyError> {
    if size == 0 || size % 2 == 0 {
        return Err(CannyError::invalid(format!(
            "kernel size must be odd and positive, got {size}"
        )));
    }
    Ok(())
}

/// Sample `exp(-x² / (2·spread²))` at `size` points evenly spaced on `[-1, 1]`.
///
/// The `1/(sqrt(2π)·spread)` density factor is left out: it cancels when the
/// 2D kernel is normalized and overflows for very small spreads. The center
/// tap of an odd size sits exactly at `x = 0`, so it is always 1.
pub fn gaussian_taps(size: usize, spread: f32) -> Vec<f32> {
    let half = size.saturating_sub(1) as f32 / 2.0;
    (0..size)
        .map(|i| {
            let x = if half > 0.0 { (i as f32 - half) / half } else { 0.0 };
            let z = x / spread;
            (-0.5 * z * z).exp()
        })
        .collect()
}

/// Build the normalized `size × size` Gaussian smoothing kernel.
///
/// The 2D kernel is the outer product of [`gaussian_taps`] with itself,
/// divided by its sum so that blurring preserves overall brightness.
pub fn build_gaussian_kernel(size: usize, spread: f32) -> Result<Kernel, CannyError> {
    validate_size(size)?;
    if !(spread.is_finite() && spread > 0.0) {
        return Err(CannyError::invalid(format!(
            "spread must be a positive finite number, got {spread}"
        )));
    }

    let taps = gaussian_taps(size, spread);
    let mut weights = Vec::with_capacity(size * size);
    for &a in &taps {
        for &b in &taps {
            weights.push(a * b);
        }
    }
    // The center weight is exactly 1, so the total is at least 1.
    let total: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    Ok(Kernel { size, weights })
}
