//! schema.org records embedded as JSON-LD.

use crate::i18n::TranslationTree;
use crate::page::html::escape_script_json;
use crate::seo::metadata::OG_IMAGE_PATH;
use crate::seo::page_url;
use serde_json::{json, Value};

const ORGANIZATION_NAME: &str = "Ward Pellegrims Coaching";
const PERSON_NAME: &str = "Ward Pellegrims";

/// Organization, person and service records for one locale.
///
/// The person description carries the years-of-experience fact from the tree.
pub fn structured_data(tree: &TranslationTree, site_url: &str) -> [Value; 3] {
    let page = page_url(site_url, tree.locale());
    let banner = format!("{}{}", site_url, OG_IMAGE_PATH);

    let organization = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": ORGANIZATION_NAME,
        "url": site_url,
        "logo": banner,
        "description": tree.text("schema.organization.description"),
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "BE"
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "customer service",
            "url": format!("{}#contact", page)
        }
    });

    let person = json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PERSON_NAME,
        "jobTitle": tree.text("schema.person.jobTitle"),
        "description": tree.text("schema.person.description"),
        "url": page,
        "image": banner,
        "knowsAbout": [
            tree.text("schema.person.knowsAbout.swimming"),
            tree.text("schema.person.knowsAbout.triathlon"),
            tree.text("schema.person.knowsAbout.science"),
            tree.text("schema.person.knowsAbout.performance")
        ],
        "alumniOf": {
            "@type": "EducationalOrganization",
            "name": tree.text("schema.person.alumniOf")
        }
    });

    let service = json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": tree.text("schema.service.name"),
        "provider": {
            "@type": "Person",
            "name": PERSON_NAME
        },
        "description": tree.text("schema.service.description"),
        "serviceType": [
            tree.text("schema.service.type.swimming"),
            tree.text("schema.service.type.triathlon"),
            tree.text("schema.service.type.technique"),
            tree.text("schema.service.type.camps")
        ],
        "areaServed": {
            "@type": "Country",
            "name": "Belgium"
        },
        "url": format!("{}#coaching", page)
    });

    [organization, person, service]
}

/// The three records as `<script type="application/ld+json">` elements.
pub fn script_tags(tree: &TranslationTree, site_url: &str) -> String {
    let ids = ["organization-schema", "person-schema", "service-schema"];

    structured_data(tree, site_url)
        .iter()
        .zip(ids)
        .map(|(record, id)| {
            format!(
                r#"<script id="{}" type="application/ld+json">{}</script>"#,
                id,
                escape_script_json(&record.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Facts, Locale, Translations};

    const SITE: &str = "https://www.example.com";

    fn tree(locale: Locale, years: u32) -> TranslationTree {
        Translations::for_locale(
            locale,
            Facts {
                years_of_experience: years,
                clients_coached: 200,
                camp_minimum: 6,
            },
        )
    }

    #[test]
    fn test_record_types() {
        let [organization, person, service] = structured_data(&tree(Locale::En, 15), SITE);
        assert_eq!(organization["@type"], "Organization");
        assert_eq!(person["@type"], "Person");
        assert_eq!(service["@type"], "Service");
        assert_eq!(organization["@context"], "https://schema.org");
    }

    #[test]
    fn test_person_description_embeds_years() {
        let [_, en, _] = structured_data(&tree(Locale::En, 15), SITE);
        let description = en["description"].as_str().unwrap();
        assert!(description.contains("with 15 years of experience"));
        assert!(description.ends_with("Silver medal coach at Rio 2016 Olympics."));

        let [_, nl, _] = structured_data(&tree(Locale::Nl, 16), SITE);
        assert!(nl["description"].as_str().unwrap().contains("met 16 jaar ervaring"));
    }

    #[test]
    fn test_urls_follow_locale_page() {
        let [organization, person, service] = structured_data(&tree(Locale::Nl, 15), SITE);
        assert_eq!(organization["url"], SITE);
        assert_eq!(organization["contactPoint"]["url"], "https://www.example.com/nl#contact");
        assert_eq!(person["url"], "https://www.example.com/nl");
        assert_eq!(service["url"], "https://www.example.com/nl#coaching");

        let [_, person, _] = structured_data(&tree(Locale::En, 15), SITE);
        assert_eq!(person["url"], SITE);
    }

    #[test]
    fn test_localized_lists() {
        let [_, person, service] = structured_data(&tree(Locale::Nl, 15), SITE);
        assert_eq!(person["knowsAbout"][0], "Zwemcoaching");
        assert_eq!(service["serviceType"].as_array().unwrap().len(), 4);
        assert_eq!(service["serviceType"][3], "Trainingskampen");
    }

    #[test]
    fn test_script_tags_are_well_formed_json() {
        let html = script_tags(&tree(Locale::En, 15), SITE);
        assert_eq!(html.matches(r#"type="application/ld+json""#).count(), 3);

        for block in html.split("</script>").filter(|b| !b.trim().is_empty()) {
            let json = &block[block.find('>').unwrap() + 1..];
            let value: Value = serde_json::from_str(json).unwrap();
            assert!(value.get("@type").is_some());
        }
    }
}
