//! Viewport sizing for the drawing surface.
//!
//! The canvas is displayed at the viewport's logical size but backed by a
//! buffer at logical size × device pixel ratio, with a draw transform that
//! scales by the density so all drawing code works in logical pixels.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Logical viewport metrics driving both the canvas backing store and the
/// coordinate space particles live in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
	/// Logical width in CSS pixels.
	pub width: f64,
	/// Logical height in CSS pixels.
	pub height: f64,
	/// Device pixel ratio (physical pixels per logical pixel).
	pub dpr: f64,
}

impl SurfaceMetrics {
	/// Reads the current window size and pixel density.
	pub fn read(window: &Window) -> Self {
		let width = window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0);
		let height = window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0);
		let dpr = window.device_pixel_ratio();
		let dpr = if dpr > 0.0 { dpr } else { 1.0 };

		Self { width, height, dpr }
	}

	/// Backing-store pixel dimensions: logical size × density, rounded to
	/// the nearest integer.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.dpr).round() as u32,
			(self.height * self.dpr).round() as u32,
		)
	}
}

/// Applies `metrics` to the canvas: CSS size in logical pixels, backing
/// store at full density, and the density transform. Safe to call again
/// with unchanged metrics; the result is the same surface.
pub fn apply(metrics: SurfaceMetrics, canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) {
	let style = canvas.style();
	let _ = style.set_property("width", &format!("{}px", metrics.width));
	let _ = style.set_property("height", &format!("{}px", metrics.height));

	let (bw, bh) = metrics.backing_size();
	canvas.set_width(bw);
	canvas.set_height(bh);

	// Resetting canvas dimensions clears any prior transform, so this
	// installs a fresh density scale rather than compounding one.
	let _ = ctx.set_transform(metrics.dpr, 0.0, 0.0, metrics.dpr, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn backing_size_rounds_to_nearest() {
		let m = SurfaceMetrics {
			width: 997.0,
			height: 701.0,
			dpr: 1.25,
		};
		// 997 * 1.25 = 1246.25, 701 * 1.25 = 876.25
		assert_eq!(m.backing_size(), (1246, 876));

		let m = SurfaceMetrics {
			width: 1512.0,
			height: 982.0,
			dpr: 2.0,
		};
		assert_eq!(m.backing_size(), (3024, 1964));
	}

	#[test]
	fn unit_density_is_identity() {
		let m = SurfaceMetrics {
			width: 1000.0,
			height: 700.0,
			dpr: 1.0,
		};
		assert_eq!(m.backing_size(), (1000, 700));
	}
}
