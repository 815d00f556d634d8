//! Animated particle-field background.
//!
//! Renders a decorative field of drifting particles on an HTML canvas with:
//! - Device-pixel-ratio-aware sizing with debounced window-resize handling
//! - Velocity integration with toroidal wraparound at the viewport edges
//! - Light mouse attraction, throttled to one schedule per frame
//! - Proximity lines between near particles, capped per particle
//!
//! # Example
//!
//! ```ignore
//! use portfolio::ParticleFieldCanvas;
//!
//! view! {
//!     <div class="background-animation">
//!         <ParticleFieldCanvas />
//!     </div>
//! }
//! ```

mod component;
mod field;
mod render;
mod sizing;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use theme::FieldTheme;
