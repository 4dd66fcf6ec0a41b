use crate::config::Config;
use crate::i18n::{Locale, TranslationTree};
use crate::page::html::escape;
use crate::seo::page_url;

/// Banner used as the Open Graph and Twitter image.
pub const OG_IMAGE_PATH: &str = "/images/banner_1920.jpg";

const RECAPTCHA_SCRIPT: &str = "https://www.google.com/recaptcha/api.js";

fn alternates(site_url: &str) -> String {
    Locale::ALL
        .iter()
        .map(|locale| {
            format!(
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                locale.config().hreflang,
                escape(&page_url(site_url, *locale))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Everything inside `<head>` except the JSON-LD blocks.
pub fn head(tree: &TranslationTree, config: &Config) -> String {
    let locale = tree.locale();
    let site = &config.site_url;
    let title = escape(&tree.text("meta.title"));
    let description = escape(&tree.text("meta.description"));
    let og_image = escape(&format!("{}{}", site, OG_IMAGE_PATH));

    let recaptcha = if config.recaptcha_enabled() {
        format!(r#"<script src="{}" async defer></script>"#, RECAPTCHA_SCRIPT)
    } else {
        String::new()
    };

    format!(
        r#"<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="keywords" content="{keywords}">
<meta name="author" content="Ward Pellegrims">
<link rel="icon" type="image/png" sizes="32x32" href="/favicon-32x32.png">
<link rel="icon" type="image/png" sizes="16x16" href="/favicon-16x16.png">
<link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png">
<link rel="manifest" href="/site.webmanifest">
<link rel="canonical" href="{canonical}">
{alternates}
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:url" content="{page_url}">
<meta property="og:site_name" content="Ward Pellegrims Coaching">
<meta property="og:locale" content="{og_locale}">
<meta property="og:type" content="website">
<meta property="og:image" content="{og_image}">
<meta property="og:image:width" content="1920">
<meta property="og:image:height" content="1080">
<meta property="og:image:alt" content="{og_image_alt}">
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:title" content="{title}">
<meta name="twitter:description" content="{description}">
<meta name="twitter:image" content="{og_image}">
{recaptcha}"#,
        title = title,
        description = description,
        keywords = escape(&tree.text("meta.keywords")),
        canonical = escape(&format!("{}{}", site, locale.path())),
        alternates = alternates(site),
        page_url = escape(&page_url(site, locale)),
        og_locale = locale.config().og_locale,
        og_image = og_image,
        og_image_alt = escape(&tree.text("meta.ogImageAlt")),
        recaptcha = recaptcha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Facts, Translations};

    fn create_test_config(recaptcha_site_key: Option<&str>) -> Config {
        Config {
            site_url: "https://www.example.com".to_string(),
            port: 8080,
            recaptcha_site_key: recaptcha_site_key.map(String::from),
            contact_endpoint: None,
            contact_timeout_secs: 5,
            preference_secret: "test-secret".to_string(),
            clients_coached: 200,
            camp_minimum: 6,
        }
    }

    fn tree(locale: Locale) -> TranslationTree {
        Translations::for_locale(
            locale,
            Facts {
                years_of_experience: 15,
                clients_coached: 200,
                camp_minimum: 6,
            },
        )
    }

    #[test]
    fn test_canonical_is_locale_path() {
        let config = create_test_config(None);

        let en = head(&tree(Locale::En), &config);
        assert!(en.contains(r#"<link rel="canonical" href="https://www.example.com/en">"#));

        let nl = head(&tree(Locale::Nl), &config);
        assert!(nl.contains(r#"<link rel="canonical" href="https://www.example.com/nl">"#));
    }

    #[test]
    fn test_alternates_list_both_locales() {
        let html = head(&tree(Locale::Nl), &create_test_config(None));
        assert!(html.contains(r#"<link rel="alternate" hreflang="en-US" href="https://www.example.com">"#));
        assert!(html.contains(r#"<link rel="alternate" hreflang="nl-BE" href="https://www.example.com/nl">"#));
    }

    #[test]
    fn test_open_graph_locale_and_image() {
        let html = head(&tree(Locale::Nl), &create_test_config(None));
        assert!(html.contains(r#"<meta property="og:locale" content="nl_BE">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://www.example.com/nl">"#));
        assert!(html.contains(r#"content="https://www.example.com/images/banner_1920.jpg""#));
        assert!(html.contains(r#"<meta property="og:image:alt" content="Ward Pellegrims Zwem- en Triathloncoach">"#));
    }

    #[test]
    fn test_description_is_escaped() {
        let html = head(&tree(Locale::En), &create_test_config(None));
        assert!(html.contains("Swimming &amp; Triathlon Coach providing"));
    }

    #[test]
    fn test_recaptcha_script_toggle() {
        let without = head(&tree(Locale::En), &create_test_config(None));
        assert!(!without.contains("recaptcha"));

        let with = head(&tree(Locale::En), &create_test_config(Some("key")));
        assert!(with.contains(r#"<script src="https://www.google.com/recaptcha/api.js" async defer></script>"#));
    }
}
