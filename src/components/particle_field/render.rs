//! Canvas rendering for the particle field.
//!
//! Each tick draws two passes over the logical drawing area: filled circles
//! for every particle, then proximity lines between near pairs. Which pairs
//! get a line (and at what opacity) is planned by [`connections`], a pure
//! function, so the pair selection and alpha ramp are testable off-browser;
//! drawing just consumes the plan.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{Particle, ParticleField};
use super::theme::FieldTheme;

/// Distance (logical px) under which two particles get a connecting line.
pub const LINK_DIST: f64 = 110.0;
/// Most lines a single outer particle contributes during the pair scan.
pub const LINKS_PER_PARTICLE: usize = 3;

/// A planned line between particles `a` and `b` (indices into the field),
/// with the stroke alpha already ramped by distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub a: usize,
	pub b: usize,
	pub alpha: f64,
}

/// Plans the connection pass.
///
/// For each particle `i` in index order, scans `j > i` and emits a line per
/// pair closer than [`LINK_DIST`], with alpha fading linearly from
/// `max_alpha` at distance zero to 0 at the cutoff. The scan for `i` stops
/// once it has contributed [`LINKS_PER_PARTICLE`] lines. The cap is
/// deliberately one-sided (`j` can still pick up more lines from its own
/// scan); making it a symmetric degree bound would change the rendered
/// image.
pub fn connections(particles: &[Particle], max_alpha: f64) -> Vec<Connection> {
	let max_dist2 = LINK_DIST * LINK_DIST;
	let mut lines = Vec::new();

	for i in 0..particles.len() {
		let mut count = 0;
		for j in (i + 1)..particles.len() {
			let dx = particles[i].x - particles[j].x;
			let dy = particles[i].y - particles[j].y;
			let d2 = dx * dx + dy * dy;
			if d2 < max_dist2 {
				lines.push(Connection {
					a: i,
					b: j,
					alpha: max_alpha * (1.0 - d2 / max_dist2),
				});
				count += 1;
				if count >= LINKS_PER_PARTICLE {
					break;
				}
			}
		}
	}

	lines
}

/// Clears the logical drawing area and draws both passes.
///
/// Assumes the density transform is already installed, so all coordinates
/// here are logical pixels.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);

	ctx.set_fill_style_str(&theme.particle_fill());
	for p in &field.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.r, 0.0, PI * 2.0);
		ctx.fill();
	}

	ctx.set_line_width(theme.link_width);
	for line in connections(&field.particles, theme.link_alpha) {
		let (a, b) = (&field.particles[line.a], &field.particles[line.b]);
		ctx.set_stroke_style_str(&theme.link_stroke(line.alpha));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			r: 1.0,
		}
	}

	#[test]
	fn no_line_at_or_beyond_cutoff() {
		let particles = vec![particle(0.0, 0.0), particle(110.0, 0.0), particle(0.0, 200.0)];
		assert!(connections(&particles, 0.12).is_empty());
	}

	#[test]
	fn alpha_ramps_linearly_with_squared_distance() {
		let particles = vec![particle(0.0, 0.0), particle(55.0, 0.0)];
		let lines = connections(&particles, 0.12);
		assert_eq!(lines.len(), 1);
		let expected = 0.12 * (1.0 - (55.0 * 55.0) / (110.0 * 110.0));
		assert!((lines[0].alpha - expected).abs() < 1e-12);

		// Coincident particles get the full alpha.
		let particles = vec![particle(30.0, 30.0), particle(30.0, 30.0)];
		let lines = connections(&particles, 0.12);
		assert!((lines[0].alpha - 0.12).abs() < 1e-12);
	}

	#[test]
	fn outer_scan_stops_after_three_lines() {
		// Five particles all within range of each other. Particle 0 may
		// only link to 1, 2, 3; its scan never reaches 4.
		let particles: Vec<_> = (0..5).map(|i| particle(i as f64 * 10.0, 0.0)).collect();
		let lines = connections(&particles, 0.12);
		let from_zero: Vec<_> = lines.iter().filter(|l| l.a == 0).map(|l| l.b).collect();
		assert_eq!(from_zero, vec![1, 2, 3]);
	}

	#[test]
	fn cap_is_one_sided_not_a_degree_bound() {
		// Particle 4 already appears in three earlier scans but still emits
		// its own line to 5 when its turn comes.
		let particles: Vec<_> = (0..6).map(|i| particle(i as f64 * 10.0, 0.0)).collect();
		let lines = connections(&particles, 0.12);
		let touching_four = lines.iter().filter(|l| l.a == 4 || l.b == 4).count();
		assert!(touching_four > 3);
		assert!(lines.iter().any(|l| l.a == 4 && l.b == 5));
	}

	#[test]
	fn pairs_scan_in_index_order() {
		let particles = vec![particle(0.0, 0.0), particle(20.0, 0.0), particle(40.0, 0.0)];
		let pairs: Vec<_> = connections(&particles, 0.12)
			.iter()
			.map(|l| (l.a, l.b))
			.collect();
		assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
	}
}
