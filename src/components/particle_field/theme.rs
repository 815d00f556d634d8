//! Visual configuration for the particle field.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors and stroke parameters for the particle field. One fixed fill for
/// every particle and one stroke color for connections, alpha-modulated per
/// line by distance.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	/// Fill color for particle circles.
	pub particle_color: Color,
	/// Base color for connection lines.
	pub link_color: Color,
	/// Stroke alpha of a connection at zero distance; fades to 0 at the
	/// distance cutoff.
	pub link_alpha: f64,
	/// Connection line width in logical pixels.
	pub link_width: f64,
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self {
			particle_color: Color::rgba(200, 200, 220, 0.95),
			link_color: Color::rgb(160, 160, 200),
			link_alpha: 0.12,
			link_width: 1.0,
		}
	}
}

impl FieldTheme {
	/// CSS fill style for particle circles.
	pub fn particle_fill(&self) -> String {
		self.particle_color.to_css()
	}

	/// CSS stroke style for a connection line at the given alpha.
	pub fn link_stroke(&self, alpha: f64) -> String {
		self.link_color.with_alpha(alpha).to_css()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formatting() {
		assert_eq!(Color::rgb(160, 160, 200).to_css(), "#a0a0c8");
		assert_eq!(
			Color::rgba(200, 200, 220, 0.95).to_css(),
			"rgba(200, 200, 220, 0.95)"
		);
		let theme = FieldTheme::default();
		assert_eq!(theme.link_stroke(0.06), "rgba(160, 160, 200, 0.06)");
	}
}
