//! portfolio: personal portfolio page with an animated particle background.
//!
//! This crate renders a WASM-based portfolio page (profile, social links,
//! work timeline, academic background) over a decorative particle field
//! drawn on a canvas with mouse attraction and proximity connections.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;

pub use components::particle_field::ParticleFieldCanvas;
use content::PageContent;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Load page content from a script element with id="profile-data".
/// Expected format: JSON matching [`PageContent`]. Falls back to the
/// compiled-in defaults when the element is missing or malformed.
fn load_content() -> Option<PageContent> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("profile-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<PageContent>(&json_text) {
		Ok(content) => {
			info!("portfolio: loaded page content for {}", content.profile.name);
			Some(content)
		}
		Err(e) => {
			warn!("portfolio: failed to parse page content: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads page content from the DOM and renders the portfolio page over the
/// particle-field background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let PageContent {
		profile,
		nav,
		social,
		timeline,
		education,
	} = load_content().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=profile.name.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="app-container">
			<header class="header">
				<div class="header-content">
					<h1 class="logo">{profile.name.clone()}</h1>
					<nav class="nav">
						{nav
							.into_iter()
							.map(|link| view! { <a href=link.href>{link.title}</a> })
							.collect_view()}
					</nav>
				</div>
			</header>

			<main class="main-content">
				<div class="background-animation">
					<ParticleFieldCanvas />
				</div>

				<section class="hero" id="home">
					<div class="profile-container">
						<img
							src=profile.image.clone()
							alt=profile.name.clone()
							class="profile-image"
						/>
						<h2 class="name">{profile.name.clone()}</h2>
						<p class="tagline">{profile.tagline.clone()}</p>
					</div>
					<div class="social-links">
						{social
							.into_iter()
							.map(|link| {
								view! {
									<a href=link.href title=link.title>
										<svg
											class="icon"
											viewBox="0 0 24 24"
											fill="currentColor"
											inner_html=link.icon
										></svg>
									</a>
								}
							})
							.collect_view()}
					</div>
				</section>

				<section class="timeline" id="cv">
					<h2 class="section-title">"Work"</h2>
					{timeline
						.into_iter()
						.map(|entry| {
							view! {
								<article class="timeline-entry">
									<span class="period">{entry.period}</span>
									<h3 class="entry-title">{entry.role} " · " {entry.org}</h3>
									{entry
										.summary
										.map(|summary| view! { <p class="summary">{summary}</p> })}
								</article>
							}
						})
						.collect_view()}
				</section>

				<section class="education" id="education">
					<h2 class="section-title">"Education"</h2>
					{education
						.into_iter()
						.map(|entry| {
							view! {
								<article class="education-entry">
									<span class="period">{entry.period}</span>
									<h3 class="entry-title">
										{entry.degree} " · " {entry.institution}
									</h3>
								</article>
							}
						})
						.collect_view()}
				</section>
			</main>
		</div>
	}
}
