//! Particle field simulation.
//!
//! A fixed-size set of drifting points with pointer attraction and toroidal
//! wraparound. The set is created once per surface size and rebuilt whenever
//! the surface is resized; individual particles are never destroyed.

/// Margin (logical px) past each edge before a particle snaps to the far side.
pub const WRAP_MARGIN: f64 = 10.0;
/// Radius (logical px) within which the pointer attracts particles.
pub const ATTRACT_RADIUS: f64 = 180.0;
/// Per-tick velocity nudge applied at the attraction radius.
const ATTRACT_STRENGTH: f64 = 0.001;

/// Surface area (logical px²) allotted per particle.
const AREA_PER_PARTICLE: f64 = 250_000.0;
const MIN_PARTICLES: usize = 30;
const MAX_PARTICLES: usize = 120;

/// A single drifting particle. Position and velocity are in logical pixels
/// (per tick); the radius is fixed at creation.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub r: f64,
}

/// Number of particles for a surface of the given logical size.
///
/// Scales with area so density stays bounded on large displays, clamped to
/// keep small viewports lively and huge ones cheap.
pub fn particle_count(width: f64, height: f64) -> usize {
	let area = (width * height).max(1.0);
	((area / AREA_PER_PARTICLE).round() as usize).clamp(MIN_PARTICLES, MAX_PARTICLES)
}

/// The particle set plus the state the event handlers mutate between ticks:
/// the surface dimensions and the last-known pointer position.
pub struct ParticleField {
	/// Particles, exclusively owned by the simulation; rendering only reads.
	pub particles: Vec<Particle>,
	/// Logical surface width.
	pub width: f64,
	/// Logical surface height.
	pub height: f64,
	/// Last pointer position in surface coordinates, `None` while the
	/// pointer is outside the window.
	pub pointer: Option<(f64, f64)>,
}

impl ParticleField {
	/// Builds a field for a `width`×`height` surface, seeding particles from
	/// `rand`, which must yield values uniform in [0, 1).
	///
	/// Positions are uniform over the surface, velocity components uniform
	/// in [-0.2, 0.2] px/tick, radii uniform in [0.6, 1.8].
	pub fn new(width: f64, height: f64, mut rand: impl FnMut() -> f64) -> Self {
		let count = particle_count(width, height);
		let mut particles = Vec::with_capacity(count);
		for _ in 0..count {
			particles.push(Particle {
				x: rand() * width,
				y: rand() * height,
				vx: (rand() - 0.5) * 0.4,
				vy: (rand() - 0.5) * 0.4,
				r: rand() * 1.2 + 0.6,
			});
		}

		Self {
			particles,
			width,
			height,
			pointer: None,
		}
	}

	/// Discards the particle set (and any accumulated velocity) and rebuilds
	/// it for new surface dimensions. The pointer position carries over.
	pub fn reset(&mut self, width: f64, height: f64, rand: impl FnMut() -> f64) {
		let pointer = self.pointer;
		*self = Self::new(width, height, rand);
		self.pointer = pointer;
	}

	/// Advances every particle by one tick: integrate velocity, nudge toward
	/// the pointer when close enough, wrap at the edges.
	///
	/// The attraction accumulates without damping, so velocities can drift
	/// upward over very long sessions. That matches the page this animates
	/// and is accepted behavior.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if let Some((mx, my)) = self.pointer {
				let (dx, dy) = (mx - p.x, my - p.y);
				if dx * dx + dy * dy < ATTRACT_RADIUS * ATTRACT_RADIUS {
					p.vx += (dx / ATTRACT_RADIUS) * ATTRACT_STRENGTH;
					p.vy += (dy / ATTRACT_RADIUS) * ATTRACT_STRENGTH;
				}
			}

			if p.x < -WRAP_MARGIN {
				p.x = self.width + WRAP_MARGIN;
			} else if p.x > self.width + WRAP_MARGIN {
				p.x = -WRAP_MARGIN;
			}
			if p.y < -WRAP_MARGIN {
				p.y = self.height + WRAP_MARGIN;
			} else if p.y > self.height + WRAP_MARGIN {
				p.y = -WRAP_MARGIN;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Deterministic [0, 1) source so tests don't touch `Math.random`.
	fn test_rand() -> impl FnMut() -> f64 {
		let mut state = 0x2545_f491_4f6c_dd1d_u64;
		move || {
			state = state
				.wrapping_mul(6364136223846793005)
				.wrapping_add(1442695040888963407);
			(state >> 11) as f64 / (1u64 << 53) as f64
		}
	}

	#[test]
	fn count_scales_with_area_and_clamps() {
		// Small viewports hit the floor.
		assert_eq!(particle_count(100.0, 100.0), 30);
		assert_eq!(particle_count(1920.0, 1080.0), 30);
		// Mid-size viewports follow the area formula.
		assert_eq!(particle_count(5000.0, 3000.0), 60);
		// round(9_375_000 / 250_000) = round(37.5) = 38
		assert_eq!(particle_count(3750.0, 2500.0), 38);
		// Huge viewports hit the ceiling.
		assert_eq!(particle_count(20000.0, 10000.0), 120);
		// Degenerate size still yields the floor.
		assert_eq!(particle_count(0.0, 0.0), 30);
	}

	#[test]
	fn initial_attributes_in_range() {
		let field = ParticleField::new(800.0, 600.0, test_rand());
		assert_eq!(field.particles.len(), 30);
		for p in &field.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((-0.2..=0.2).contains(&p.vx));
			assert!((-0.2..=0.2).contains(&p.vy));
			assert!((0.6..1.8).contains(&p.r));
		}
	}

	#[test]
	fn wraparound_snaps_to_opposite_margin() {
		let mut field = ParticleField::new(800.0, 600.0, test_rand());
		field.particles.truncate(1);
		let p = &mut field.particles[0];
		p.x = -25.0;
		p.y = 300.0;
		p.vx = 0.0;
		p.vy = 0.0;
		field.step();
		assert_eq!(field.particles[0].x, 810.0);

		field.particles[0].x = 835.0;
		field.step();
		assert_eq!(field.particles[0].x, -10.0);

		field.particles[0].x = 400.0;
		field.particles[0].y = -25.0;
		field.step();
		assert_eq!(field.particles[0].y, 610.0);

		field.particles[0].y = 640.0;
		field.step();
		assert_eq!(field.particles[0].y, -10.0);
	}

	#[test]
	fn positions_stay_within_margin_over_many_ticks() {
		let mut field = ParticleField::new(400.0, 300.0, test_rand());
		field.pointer = Some((200.0, 150.0));
		for _ in 0..5000 {
			field.step();
			for p in &field.particles {
				assert!((-10.0..=410.0).contains(&p.x));
				assert!((-10.0..=310.0).contains(&p.y));
			}
		}
	}

	#[test]
	fn pointer_outside_attraction_radius_leaves_velocity_unchanged() {
		let mut field = ParticleField::new(800.0, 600.0, test_rand());
		field.particles.truncate(1);
		let p = &mut field.particles[0];
		p.x = 100.0;
		p.y = 100.0;
		p.vx = 0.1;
		p.vy = -0.05;
		field.pointer = Some((400.0, 100.0));
		field.step();
		assert_eq!(field.particles[0].vx, 0.1);
		assert_eq!(field.particles[0].vy, -0.05);

		// Exactly at the radius: squared distance is not strictly below 180².
		let p = &mut field.particles[0];
		p.x = 100.0;
		p.y = 100.0;
		p.vx = 0.0;
		p.vy = 0.0;
		field.pointer = Some((280.0, 100.0));
		field.step();
		assert_eq!(field.particles[0].vx, 0.0);
		assert_eq!(field.particles[0].vy, 0.0);
	}

	#[test]
	fn pointer_within_radius_nudges_velocity() {
		let mut field = ParticleField::new(800.0, 600.0, test_rand());
		field.particles.truncate(1);
		let p = &mut field.particles[0];
		p.x = 100.0;
		p.y = 100.0;
		p.vx = 0.0;
		p.vy = 0.0;
		field.pointer = Some((190.0, 100.0));
		field.step();
		// dx after the position advance is 90, so the nudge is (90/180)*0.001.
		assert!((field.particles[0].vx - 0.0005).abs() < 1e-12);
		assert_eq!(field.particles[0].vy, 0.0);
	}

	#[test]
	fn absent_pointer_means_pure_drift() {
		let mut field = ParticleField::new(800.0, 600.0, test_rand());
		field.particles.truncate(1);
		let p = &mut field.particles[0];
		p.x = 100.0;
		p.y = 100.0;
		p.vx = 0.5;
		p.vy = 0.25;
		field.pointer = None;
		field.step();
		let p = &field.particles[0];
		assert_eq!((p.x, p.y), (100.5, 100.25));
		assert_eq!((p.vx, p.vy), (0.5, 0.25));
	}

	#[test]
	fn reset_rebuilds_for_new_size_and_keeps_pointer() {
		let mut field = ParticleField::new(800.0, 600.0, test_rand());
		field.pointer = Some((10.0, 20.0));
		field.reset(5000.0, 3000.0, test_rand());
		assert_eq!(field.particles.len(), 60);
		assert_eq!((field.width, field.height), (5000.0, 3000.0));
		assert_eq!(field.pointer, Some((10.0, 20.0)));
	}
}
