use crate::i18n::TranslationTree;
use crate::page::html::{escape, external_link};

/// A social profile linked from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        platform: "Twitter",
        href: "https://twitter.com/WardPel",
    },
    SocialLink {
        platform: "Facebook",
        href: "https://www.facebook.com/ward.pellegrims/",
    },
    SocialLink {
        platform: "Instagram",
        href: "https://www.instagram.com/wardpel/",
    },
    SocialLink {
        platform: "LinkedIn",
        href: "https://www.linkedin.com/in/pellegrimsward/",
    },
];

/// Section anchors in page order, with their nav label keys.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("about", "nav.about"),
    ("coaching", "nav.coaching"),
    ("projects", "nav.projects"),
    ("contact", "nav.contact"),
];

/// Target of the language switch: records the choice, then redirects.
pub fn language_switch_href(tree: &TranslationTree) -> String {
    format!("/lang/{}", tree.locale().other().code())
}

fn nav_links(tree: &TranslationTree) -> String {
    NAV_ITEMS
        .iter()
        .map(|(section, key)| {
            format!(
                r##"<a href="#{}" class="nav-link" data-close-menu>{}</a>"##,
                section,
                escape(&tree.text(key))
            )
        })
        .collect()
}

fn social_links() -> String {
    SOCIAL_LINKS
        .iter()
        .map(|social| {
            external_link(
                social.href,
                "social-link",
                &format!(
                    r#"<span class="sr-only">{}</span><i class="icon icon-{}" aria-hidden="true"></i>"#,
                    social.platform,
                    social.platform.to_lowercase()
                ),
            )
        })
        .collect()
}

fn language_switch(tree: &TranslationTree) -> String {
    let other = tree.locale().other();
    format!(
        r#"<a href="{}" class="language-switch" hreflang="{}" lang="{}" title="{}" aria-label="{}"><i class="icon icon-globe" aria-hidden="true"></i><span>{}</span></a>"#,
        language_switch_href(tree),
        other.code(),
        other.code(),
        other.native_name(),
        escape(&tree.text("nav.switchLanguage")),
        other.code().to_uppercase()
    )
}

pub fn render(tree: &TranslationTree) -> String {
    let nav = nav_links(tree);
    let switch = language_switch(tree);

    format!(
        r##"<header class="site-header" data-scroll-header>
<div class="header-inner">
<a href="#about" class="logo"><img src="/images/WPC_Logo_Horizontal_FullColour.png" alt="{title}" width="240" height="96"></a>
<nav class="desktop-nav">{nav}</nav>
<div class="header-actions">
{switch}
<div class="social-links">{social}<a href="#contact" class="contact-button" title="{contact_me}" aria-label="{contact_me}"><i class="icon icon-envelope" aria-hidden="true"></i></a></div>
<button type="button" class="menu-toggle" aria-label="{toggle}" aria-expanded="false" aria-controls="mobile-menu" aria-haspopup="true" data-menu-toggle><i class="icon icon-bars" aria-hidden="true"></i></button>
</div>
</div>
<div id="mobile-menu" class="mobile-menu" hidden>
<div class="mobile-menu-backdrop" data-close-menu></div>
<nav class="mobile-nav">{nav}{switch}</nav>
</div>
</header>"##,
        title = escape(&tree.text("meta.title")),
        nav = nav,
        switch = switch,
        social = social_links(),
        contact_me = escape(&tree.text("nav.contactMe")),
        toggle = escape(&tree.text("nav.toggleMenu")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Facts, Locale, Translations};

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
    fn test_language_switch_points_to_other_locale() {
        assert_eq!(language_switch_href(&tree(Locale::En)), "/lang/nl");
        assert_eq!(language_switch_href(&tree(Locale::Nl)), "/lang/en");
    }

    #[test]
    fn test_switch_label_is_other_code_uppercased() {
        let html = render(&tree(Locale::En));
        assert!(html.contains(r#"<a href="/lang/nl""#));
        assert!(html.contains("<span>NL</span>"));
    }

    #[test]
    fn test_switch_titled_with_native_name() {
        assert!(render(&tree(Locale::En)).contains(r#"title="Nederlands""#));
        assert!(render(&tree(Locale::Nl)).contains(r#"title="English""#));
    }

    #[test]
    fn test_nav_labels_are_translated() {
        let html = render(&tree(Locale::Nl));
        assert!(html.contains(r##"<a href="#about" class="nav-link" data-close-menu>Info</a>"##));
        assert!(html.contains(">Projecten</a>"));
    }

    #[test]
    fn test_social_links_open_in_new_tab() {
        let html = render(&tree(Locale::En));
        for social in SOCIAL_LINKS {
            assert!(html.contains(&format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer""#,
                social.href
            )));
        }
    }

    #[test]
    fn test_menu_toggle_starts_closed() {
        let html = render(&tree(Locale::En));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"<div id="mobile-menu" class="mobile-menu" hidden>"#));
    }
}
