//! Server-side page rendering.
//!
//! The page is one HTML document per locale. Each section module exposes a
//! `render` function from the translation tree to a markup fragment; this
//! module stitches them together in their fixed order with the `<head>`
//! metadata and the JSON-LD records.
//!
//! Interactive behaviour (mobile menu, scrolled header, entrance animation)
//! is driven by `data-*` hooks and the small inline script below. None of it
//! is server state.

mod about;
mod coaching;
mod contact;
mod footer;
pub mod header;
pub mod html;
pub mod projects;

pub use contact::form_action;
pub use projects::{project_records, EmbeddedLink, ProjectRecord};

use crate::config::Config;
use crate::contact::ContactSubmission;
use crate::i18n::{Locale, Translations};
use crate::seo;
use chrono::NaiveDate;
use html::escape;

/// State of the contact form for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactState {
    /// Empty form
    #[default]
    Idle,
    /// Message delivered; the form is replaced by a thank-you banner
    Sent,
    /// Delivery failed; the form is shown again with the visitor's input
    Failed(ContactSubmission),
}

const CLIENT_SCRIPT: &str = r#"(function () {
  var header = document.querySelector('[data-scroll-header]');
  var toggle = document.querySelector('[data-menu-toggle]');
  var menu = document.getElementById('mobile-menu');
  function setMenu(open) {
    if (!toggle || !menu) return;
    toggle.setAttribute('aria-expanded', open ? 'true' : 'false');
    menu.hidden = !open;
  }
  if (toggle) toggle.addEventListener('click', function () {
    setMenu(toggle.getAttribute('aria-expanded') !== 'true');
  });
  document.querySelectorAll('[data-close-menu]').forEach(function (el) {
    el.addEventListener('click', function () { setMenu(false); });
  });
  function onScroll() {
    if (header) header.classList.toggle('scrolled', window.scrollY > 20);
  }
  window.addEventListener('scroll', onScroll, { passive: true });
  onScroll();
  var form = document.querySelector('[data-contact-form]');
  if (form) form.addEventListener('submit', function () {
    var button = form.querySelector('button[type=submit]');
    if (button) { button.disabled = true; button.textContent = button.dataset.sendingLabel; }
  });
  if ('IntersectionObserver' in window) {
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (entry.isIntersecting) { entry.target.classList.add('visible'); observer.unobserve(entry.target); }
      });
    }, { threshold: 0.1 });
    document.querySelectorAll('[data-reveal]').forEach(function (el) { observer.observe(el); });
  } else {
    document.querySelectorAll('[data-reveal]').forEach(function (el) { el.classList.add('visible'); });
  }
})();"#;

/// Render the full page for `locale` as of `today`.
///
/// The locale is fixed for the whole pass: every section and the structured
/// data see the same translation tree.
pub fn render_page(locale: Locale, config: &Config, today: NaiveDate, contact_state: &ContactState) -> String {
    let tree = Translations::for_locale(locale, config.facts(today));

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
{head}
{structured_data}
</head>
<body>
{header}
<h1 class="sr-only">{h1}</h1>
<main>
{about}
{coaching}
{projects}
{contact}
{footer}
</main>
<script>{script}</script>
</body>
</html>
"#,
        lang = locale.code(),
        head = seo::head(&tree, config),
        structured_data = seo::script_tags(&tree, &config.site_url),
        header = header::render(&tree),
        h1 = escape(&tree.text("meta.title")),
        about = about::render(&tree),
        coaching = coaching::render(&tree),
        projects = projects::render(&tree),
        contact = contact::render(&tree, contact_state, config.recaptcha_site_key.as_deref()),
        footer = footer::render(&tree),
        script = CLIENT_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LookupMetrics;
    use serial_test::serial;

    fn create_test_config() -> Config {
        Config {
            site_url: "https://www.example.com".to_string(),
            port: 8080,
            recaptcha_site_key: None,
            contact_endpoint: None,
            contact_timeout_secs: 5,
            preference_secret: "test-secret".to_string(),
            clients_coached: 200,
            camp_minimum: 6,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    #[test]
    #[serial]
    fn test_render_has_no_missing_keys() {
        let config = create_test_config();
        let misses_before = LookupMetrics::global().misses();

        for locale in Locale::ALL {
            render_page(locale, &config, today(), &ContactState::Idle);
            render_page(locale, &config, today(), &ContactState::Sent);
        }

        assert_eq!(LookupMetrics::global().misses(), misses_before);
    }

    #[test]
    fn test_document_language_matches_locale() {
        let config = create_test_config();
        assert!(render_page(Locale::Nl, &config, today(), &ContactState::Idle).contains(r#"<html lang="nl">"#));
        assert!(render_page(Locale::En, &config, today(), &ContactState::Idle).contains(r#"<html lang="en">"#));
    }

    #[test]
    fn test_sections_in_order() {
        let html = render_page(Locale::En, &create_test_config(), today(), &ContactState::Idle);

        let positions: Vec<usize> = [
            "<header",
            r#"<h1 class="sr-only">"#,
            r#"<section id="about""#,
            r#"<section id="coaching""#,
            r#"<section id="projects""#,
            r#"<section id="contact""#,
            "<footer",
        ]
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("{} not rendered", marker)))
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_years_follow_render_date() {
        let config = create_test_config();
        let before = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();

        let html = render_page(Locale::En, &config, before, &ContactState::Idle);
        assert!(html.contains("profit from 14 years"));

        let html = render_page(Locale::En, &config, today(), &ContactState::Idle);
        assert!(html.contains("profit from 15 years"));
        assert!(html.contains("with 15 years of experience"));
    }

    #[test]
    fn test_header_turns_solid_after_short_scroll() {
        let html = render_page(Locale::En, &create_test_config(), today(), &ContactState::Idle);
        assert!(html.contains("header.classList.toggle('scrolled', window.scrollY > 20)"));
    }

    #[test]
    fn test_locale_round_trip_is_identical() {
        let config = create_test_config();
        let first = render_page(Locale::En, &config, today(), &ContactState::Idle);
        let _ = render_page(Locale::Nl, &config, today(), &ContactState::Idle);
        let back = render_page(Locale::En, &config, today(), &ContactState::Idle);

        assert_eq!(first, back);
    }
}
