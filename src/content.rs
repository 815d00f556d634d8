//! Page content model: profile, navigation, social links, work timeline,
//! and academic background.
//!
//! Content can be supplied as JSON in a `<script id="profile-data">` element
//! and falls back to the compiled-in defaults below.

use serde::Deserialize;

/// Who the page is about.
#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
	/// Display name, used in the header and hero section.
	pub name: String,
	/// One-line role description under the name.
	pub tagline: String,
	/// Path to the profile image.
	pub image: String,
}

/// A header navigation link.
#[derive(Clone, Debug, Deserialize)]
pub struct NavLink {
	pub title: String,
	pub href: String,
}

/// A social link rendered as an inline SVG icon.
#[derive(Clone, Debug, Deserialize)]
pub struct SocialLink {
	/// Hover title and accessible name.
	pub title: String,
	pub href: String,
	/// Inner SVG markup for the icon (children of a 24x24 `viewBox` svg).
	pub icon: String,
}

/// One entry in the work timeline.
#[derive(Clone, Debug, Deserialize)]
pub struct TimelineEntry {
	/// Human-readable period, e.g. "2021 — present".
	pub period: String,
	pub role: String,
	pub org: String,
	/// Optional one-liner about the position.
	#[serde(default)]
	pub summary: Option<String>,
}

/// One entry in the academic background section.
#[derive(Clone, Debug, Deserialize)]
pub struct EducationEntry {
	pub period: String,
	pub degree: String,
	pub institution: String,
}

/// Complete page content.
#[derive(Clone, Debug, Deserialize)]
pub struct PageContent {
	pub profile: Profile,
	#[serde(default)]
	pub nav: Vec<NavLink>,
	#[serde(default)]
	pub social: Vec<SocialLink>,
	#[serde(default)]
	pub timeline: Vec<TimelineEntry>,
	#[serde(default)]
	pub education: Vec<EducationEntry>,
}

impl Default for PageContent {
	fn default() -> Self {
		Self {
			profile: Profile {
				name: "Francisco Costa".into(),
				tagline: "DevOps Engineer".into(),
				image: "/francisco-picture.jpg".into(),
			},
			nav: [
				("HOME", "#home"),
				("BLOG", "#blog"),
				("IMPOSSIBLE LIST", "#impossible"),
				("CV", "#cv"),
			]
			.into_iter()
			.map(|(title, href)| NavLink {
				title: title.into(),
				href: href.into(),
			})
			.collect(),
			social: default_social_links(),
			timeline: vec![
				TimelineEntry {
					period: "2022 — present".into(),
					role: "DevOps Engineer".into(),
					org: "Cloudmill".into(),
					summary: Some(
						"Kubernetes platform, GitOps pipelines, observability stack.".into(),
					),
				},
				TimelineEntry {
					period: "2020 — 2022".into(),
					role: "Site Reliability Engineer".into(),
					org: "Portolan Systems".into(),
					summary: Some("On-call, incident tooling, infrastructure as code.".into()),
				},
				TimelineEntry {
					period: "2018 — 2020".into(),
					role: "Backend Developer".into(),
					org: "Miradouro Labs".into(),
					summary: None,
				},
			],
			education: vec![
				EducationEntry {
					period: "2016 — 2018".into(),
					degree: "MSc Computer Engineering".into(),
					institution: "Instituto Superior Técnico".into(),
				},
				EducationEntry {
					period: "2013 — 2016".into(),
					degree: "BSc Computer Science".into(),
					institution: "Universidade do Porto".into(),
				},
			],
		}
	}
}

fn default_social_links() -> Vec<SocialLink> {
	[
		(
			"GitHub",
			r#"<path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/>"#,
		),
		(
			"Mastodon",
			r##"<circle cx="12" cy="12" r="10"/><path d="M8 12c0-1.657 1.343-3 3-3s3 1.343 3 3v1h-6v-1z" fill="#000" opacity="0.6"/>"##,
		),
		(
			"Discord",
			r#"<path d="M13.545 2.907a13.227 13.227 0 00-3.573-1.04c-.522.224-.872.735-.872 1.459v.294c.61-.053 1.203-.009 1.816.066.402.045.824.084 1.289.1a6.6 6.6 0 01.996.057l-.494 2.475m9.025 1.993c.857.214 1.327.617 1.605 1.228a17.93 17.93 0 01-2.457-.147c-.557-.045-1.096-.135-1.496-.285l.735-3.066a13.04 13.04 0 012.613 2.27zM6.3 5.755a9.966 9.966 0 00-1.071-.175c-.307-.032-.614-.054-.921-.066.494-2.475.729-3.374.729-3.374 1.156.264 2.296.648 3.434 1.194-.42.88-.774 1.39-.774 1.39-.389.116-.748.23-1.397.231zM2.034 15.964a13.88 13.88 0 01-1.44-6.564c0-.22 0-.44.015-.66A9.967 9.967 0 013.897 9.09c.622 1.124 1.36 2.151 2.205 3.06-.256 1.75.531 3.21 2.769 4.369.076.04.15.08.226.12-.592.649-1.123 1.012-1.458 1.26-.908.642-1.4.788-1.605.788z"/>"#,
		),
		(
			"Medium",
			r#"<path d="M13.54 12a6.8 6.8 0 01-6.77 6.82A6.8 6.8 0 010 12a6.8 6.8 0 016.77-6.82A6.8 6.8 0 0113.54 12zM20.96 12c0 3.54-1.51 6.42-3.38 6.42-1.87 0-3.39-2.88-3.39-6.42s1.52-6.42 3.39-6.42c1.87 0 3.38 2.88 3.38 6.42M24 12c0 3.17-.53 5.75-1.19 5.75-.59 0-1.1-2.58-1.1-5.75s.51-5.75 1.1-5.75c.66 0 1.19 2.58 1.19 5.75z"/>"#,
		),
		("AnyType", r#"<circle cx="12" cy="12" r="10"/>"#),
		(
			"Steam",
			r#"<path d="M11.979 0C5.678 0 0.5 5.175.5 11.448c0 4.41 2.583 8.215 6.344 10.048.471.22.622-.204.622-.456 0-.226-.01-.977-.015-1.916-2.58.56-3.131-1.24-3.131-1.24-.429-1.09-1.047-1.38-1.047-1.38-.856-.585.065-.573.065-.573.947.066 1.445.972 1.445.972.843 1.441 2.21 1.024 2.75.8.086-.622.33-1.025.6-1.261-2.1-.238-4.31-1.05-4.31-4.67 0-1.033.37-1.878.976-2.542-.098-.238-.423-1.203.093-2.508 0 0 .796-.255 2.609.755.757-.21 1.568-.314 2.375-.318.805.004 1.616.108 2.374.318 1.81-1.01 2.606-.755 2.606-.755.517 1.305.192 2.27.095 2.508.607.664.976 1.509.976 2.542 0 3.628-2.213 4.429-4.32 4.66.34.293.641.87.641 1.752 0 1.264-.011 2.283-.011 2.593 0 .253.148.679.628.454 3.757-1.836 6.336-5.64 6.336-10.045C23.5 5.175 18.322 0 11.979 0z"/>"#,
		),
		(
			"Instagram",
			r#"<path d="M12 0C8.74 0 8.333.015 7.053.072 5.775.132 4.905.333 4.117.6c-.794.272-1.473.646-2.154 1.327-.682.682-1.055 1.361-1.327 2.154-.266.788-.468 1.657-.527 2.935C.04 8.333.024 8.74 0 12s.015 3.667.072 4.947c.06 1.277.261 2.148.527 2.935.272.794.646 1.473 1.328 2.154.682.683 1.36 1.056 2.153 1.328.787.266 1.657.467 2.934.527 1.28.058 1.687.072 4.947.072s3.667-.015 4.947-.072c1.277-.06 2.148-.261 2.934-.527.794-.272 1.473-.645 2.154-1.327.683-.682 1.056-1.361 1.328-2.154.266-.787.467-1.657.527-2.935.058-1.28.072-1.687.072-4.947s-.015-3.667-.072-4.947c-.06-1.277-.261-2.148-.527-2.935-.272-.793-.645-1.473-1.328-2.154-.682-.682-1.361-1.055-2.154-1.327-.788-.266-1.657-.468-2.935-.527-1.28-.058-1.687-.072-4.947-.072z"/><path d="M5.838 12a6.162 6.162 0 1112.324 0 6.162 6.162 0 01-12.324 0zM12 16a4 4 0 100-8 4 4 0 000 8zm4.965-10.322a1.44 1.44 0 11-2.881.001 1.44 1.44 0 012.881-.001z"/>"#,
		),
		(
			"Gmail",
			r#"<path d="M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z"/>"#,
		),
		(
			"Security Key",
			r#"<path d="M18 8h-1V6c0-2.76-2.24-5-5-5s-5 2.24-5 5v2H6c-1.1 0-2 .9-2 2v10c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V10c0-1.1-.9-2-2-2zm-6 9c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2zm3.1-9H8.9V6c0-1.71 1.39-3.1 3.1-3.1 1.71 0 3.1 1.39 3.1 3.1v2z"/>"#,
		),
	]
	.into_iter()
	.map(|(title, icon)| SocialLink {
		title: title.into(),
		href: "#".into(),
		icon: icon.into(),
	})
	.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_content_is_complete() {
		let content = PageContent::default();
		assert_eq!(content.profile.name, "Francisco Costa");
		assert_eq!(content.nav.len(), 4);
		assert!(!content.social.is_empty());
		assert!(!content.timeline.is_empty());
		assert!(!content.education.is_empty());
	}

	#[test]
	fn parses_partial_json() {
		let json = r#"{
			"profile": { "name": "Ada", "tagline": "Engineer", "image": "/ada.png" },
			"timeline": [
				{ "period": "2024", "role": "Lead", "org": "Somewhere" }
			]
		}"#;
		let content: PageContent = serde_json::from_str(json).unwrap();
		assert_eq!(content.profile.name, "Ada");
		assert_eq!(content.timeline.len(), 1);
		assert!(content.timeline[0].summary.is_none());
		assert!(content.nav.is_empty());
	}
}
