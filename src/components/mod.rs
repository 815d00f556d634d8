//! UI components for the portfolio page.

pub mod particle_field;
