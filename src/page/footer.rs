use crate::i18n::TranslationTree;
use crate::page::header::NAV_ITEMS;
use crate::page::html::escape;

pub fn render(tree: &TranslationTree) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(section, key)| format!(r##"<a href="#{}">{}</a>"##, section, escape(&tree.text(key))))
        .collect();

    format!(
        r#"<footer class="site-footer">
<nav class="footer-nav">{links}</nav>
<p class="copyright">{copyright}</p>
</footer>"#,
        links = links,
        copyright = escape(&tree.text("footer.copyright")),
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
    fn test_copyright_per_locale() {
        assert!(render(&tree(Locale::En)).contains("© Ward Pellegrims. All rights reserved."));
        assert!(render(&tree(Locale::Nl)).contains("© Ward Pellegrims. Alle rechten voorbehouden."));
    }
}
