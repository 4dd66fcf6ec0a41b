//! The translation dictionary.
//!
//! Every user-facing string lives here, one row per key path with the English
//! and Dutch text side by side. A row cannot exist for one locale only, so the
//! two translation trees always have the same shape.
//!
//! Placeholders are filled in at lookup time (see `TranslationTree::text`):
//! - `{years}`: years of coaching experience
//! - `{clients}`: number of clients coached
//! - `{camp_min}`: minimum group size for a training camp

use crate::i18n::Locale;

/// One key path with its text in both locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub key: &'static str,
    pub en: &'static str,
    pub nl: &'static str,
}

impl Entry {
    /// Raw template for a locale, placeholders not yet substituted.
    pub fn template(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Nl => self.nl,
        }
    }
}

/// Placeholder names understood by the lookup.
pub const PLACEHOLDERS: &[&str] = &["years", "clients", "camp_min"];

const fn entry(key: &'static str, en: &'static str, nl: &'static str) -> Entry {
    Entry { key, en, nl }
}

pub static ENTRIES: &[Entry] = &[
    // ==================== Meta ====================
    entry("meta.title", "Ward Pellegrims Coaching", "Ward Pellegrims Coaching"),
    entry(
        "meta.description",
        "Elite level coaching in swimming and triathlon. Swimming & Triathlon Coach providing online training programs, technique analysis, and coaching services.",
        "Elite coaching in zwemmen en triathlon. Zwem- en triathloncoach met online trainingsprogramma's, techniekanalyse en coaching services.",
    ),
    entry(
        "meta.keywords",
        "swimming coach, triathlon coach, swimming training, triathlon training, Belgium, Ward Pellegrims",
        "zwemcoach, triathloncoach, zwemtraining, triatlontraining, België, Ward Pellegrims",
    ),
    entry(
        "meta.ogImageAlt",
        "Ward Pellegrims Swimming & Triathlon Coach",
        "Ward Pellegrims Zwem- en Triathloncoach",
    ),
    // ==================== Navigation ====================
    entry("nav.about", "About", "Info"),
    entry("nav.coaching", "Coaching", "Coaching"),
    entry("nav.projects", "Projects", "Projecten"),
    entry("nav.contact", "Contact", "Contact"),
    entry("nav.toggleMenu", "Toggle navigation menu", "Navigatiemenu openen of sluiten"),
    entry("nav.contactMe", "Contact me", "Contacteer mij"),
    entry("nav.switchLanguage", "Nederlandse versie", "English version"),
    // ==================== Profile ====================
    entry("profile", "Swimming & Triathlon Coach", "Zwem- en triathloncoach"),
    // ==================== About ====================
    entry("about.title", "Ward Pellegrims", "Ward Pellegrims"),
    entry(
        "about.subtitle",
        "Improve your swimming, cycling and running performance",
        "Coaching in zwemmen, triathlon en duursporten.",
    ),
    entry(
        "about.intro1",
        "Do you want to create your own journey of success and do you want to profit from {years} years of coaching experience in Olympic swimming?",
        "Wil jij gebruik maken van mijn {years} jaar ervaring in het begeleiden van Olympische topsporters en wil jij ook jouw eigen succesverhaal creëren?",
    ),
    entry(
        "about.intro2",
        "Do you need a structured training plan and/or individual coaching based on the scientific knowledge I gathered during a Master in Sport Sciences and a Master in Rehabilitation Sciences?",
        "Heb je nood aan een gestructureerd schema of individuele begeleiding, wetenschappelijk onderbouwd dankzij mijn achtergrond als Master in de Bewegingswetenschappen en Master in de Revalidatiewetenschappen?",
    ),
    entry(
        "about.intro3",
        "Do you want to explore your own limits and fulfill your ambitious physical goals?",
        "Wil je op een verantwoorde manier je limieten opzoeken en hierdoor jouw ambitieuze sportprestatie waarmaken?",
    ),
    entry(
        "about.intro4",
        "The silver medal at the Olympic Games in Rio 2016 was the highlight of my coaching career, but I want to help you reach your own highlights!",
        "De zilveren medaille van Pieter Timmers op de Olympische spelen van 2016 in Rio is voorlopig het hoogtepunt in mijn loopbaan als coach, maar ik wil er graag bij zijn wanneer jij je eigen sportieve doel waarmaakt!",
    ),
    entry("about.bannerAlt", "Swimming banner", "Zwembanner"),
    entry("about.exploreCoaching", "Explore My Coaching", "Ontdek mijn coaching"),
    entry("about.getInTouch", "Get In Touch", "Neem contact op"),
    entry("about.myStory", "My Story", "Mijn verhaal"),
    entry("about.yearsExperience", "Years Experience", "Jaar ervaring"),
    entry("about.clientsCoached", "Clients Coached", "Gecoachte atleten"),
    // ==================== Coaching ====================
    entry("coaching.title", "Coaching", "Coaching"),
    entry(
        "coaching.intro",
        "I can help you with the following aspects in order to make you a better athlete",
        "Op de volgende manieren kan ik jou helpen om beter te presteren",
    ),
    entry("coaching.services.swimmingTraining", "Online swimming programs", "Online trainingschema's zwemmen"),
    entry("coaching.services.triathlonTraining", "Online triathlon programs", "Online trainingschema's triathlon"),
    entry("coaching.services.swimmingTechnique", "Swimming technique", "Analyse Zwemtechniek"),
    entry("coaching.services.swimmingTechniqueClubs", "Swimming technique for clubs", "Technieksessies voor zwemclubs"),
    entry("coaching.services.adults", "Start 2 swim for companies", "Learn to swim voor volwassenen"),
    entry("coaching.services.trainingCamp", "Training camps", "Trainingskampen"),
    entry(
        "coaching.serviceDescriptions.swimmingTraining",
        "Personalized swimming training programs",
        "Gepersonaliseerde zwemtrainingsprogramma's",
    ),
    entry(
        "coaching.serviceDescriptions.triathlonTraining",
        "Complete triathlon preparation",
        "Volledige triathlonvoorbereiding",
    ),
    entry(
        "coaching.serviceDescriptions.swimmingTechnique",
        "Video analysis and technique improvement",
        "Video-analyse en techniekverbetering",
    ),
    entry(
        "coaching.serviceDescriptions.swimmingTechniqueClubs",
        "Club coaching and team development",
        "Clubcoaching en teamontwikkeling",
    ),
    entry("coaching.serviceDescriptions.adults", "Adult swimming programs", "Zwemprogramma's voor volwassenen"),
    entry(
        "coaching.serviceDescriptions.trainingCamp",
        "Intensive training camps",
        "Intensieve trainingskampen",
    ),
    entry(
        "coaching.cta.title",
        "Ready to Transform Your Performance?",
        "Klaar om je prestaties te transformeren?",
    ),
    entry(
        "coaching.cta.description",
        "Join hundreds of athletes who have achieved their goals with personalized coaching programs.",
        "Sluit je aan bij honderden atleten die hun doelen hebben bereikt met gepersonaliseerde coachingprogramma's.",
    ),
    entry("coaching.cta.button", "Start Your Journey", "Start je reis"),
    entry("coaching.learnMore", "Learn More", "Meer info"),
    entry("coaching.highlights.oneOnOne", "1-on-1", "1-op-1"),
    entry("coaching.highlights.triathlon", "Triathlon", "Triathlon"),
    entry("coaching.highlights.video", "Video", "Video"),
    entry("coaching.highlights.clubs", "Clubs", "Clubs"),
    entry("coaching.highlights.adults", "Adults", "Volwassenen"),
    entry("coaching.highlights.camps", "Camps", "Kampen"),
    // ==================== Projects ====================
    entry("projects.title", "Projects", "Projecten"),
    entry(
        "projects.intro",
        "These are the main projects I have worked on in the past, am working on now, and will work on in the future",
        "Deze zijn de belangrijkste projecten waar ik in het verleden, nu en in de toekomst aan heb gewerkt",
    ),
    entry("projects.items.eliteSwimmers.title", "Coaching Elite Swimmers", "Coaching van elite zwemmers"),
    entry("projects.items.eliteSwimmers.description", "Between 2009 and 2021.", "Tussen 2009 en 2021"),
    entry("projects.items.rwanda.title", "Rwanda Epic", "Rwanda Epic"),
    entry("projects.items.rwanda.description", "November 2023", "November 2023"),
    entry("projects.items.trainingPlans.title", "Training Plans", "Training Plans"),
    entry("projects.items.startToSwim.title", "Start 2 Swim", "Start 2 Swim"),
    entry(
        "projects.items.startToSwim.description",
        "Company group sessions 2024",
        "Groepslessen voor bedrijven 2024",
    ),
    entry("projects.items.trainingCamps.title", "Training camps", "Trainingskampen"),
    entry(
        "projects.items.trainingCamps.description",
        "On request - minimum {camp_min} athletes",
        "Op aanvraag - minimum {camp_min} atleten",
    ),
    entry("projects.items.rocDuMaroc.title", "Roc Du Maroc", "Roc Du Maroc"),
    entry("projects.items.rocDuMaroc.description", "October 2022", "Oktober 2022"),
    entry(
        "projects.linkTexts.plansAvailableOn",
        "Swimming and running plans available on",
        "Zwem- en loopschema's beschikbaar op",
    ),
    entry("projects.featuredWork", "Featured Work", "Uitgelicht werk"),
    entry("projects.viewProject", "View Project", "Bekijk project"),
    entry("projects.view", "View", "Bekijk"),
    entry("projects.categories.eliteTraining", "Elite Training", "Elite training"),
    entry("projects.categories.adventure", "Adventure", "Avontuur"),
    entry("projects.categories.trainingPlans", "Training Plans", "Trainingschema's"),
    entry("projects.categories.community", "Community", "Gemeenschap"),
    entry("projects.categories.camps", "Camps", "Kampen"),
    // ==================== Footer ====================
    entry(
        "footer.copyright",
        "© Ward Pellegrims. All rights reserved.",
        "© Ward Pellegrims. Alle rechten voorbehouden.",
    ),
    // ==================== Contact ====================
    entry("contact.title", "Contact Me", "Contacteer mij"),
    entry(
        "contact.intro",
        "Feel free to contact me and see what I can do for you",
        "Contacteer me vrijblijvend via onderstaand formulier en kijk wat ik voor jou kan betekenen",
    ),
    entry("contact.letsConnect", "Let's Connect", "Laten we verbinden"),
    entry("contact.email", "Email", "E-mail"),
    entry(
        "contact.emailMessage",
        "Send me a message using the form below",
        "Stuur me een bericht via onderstaand formulier",
    ),
    entry("contact.professionalCoach", "Professional Coach", "Professionele coach"),
    entry("contact.expertTitle", "Swimming & Triathlon Expert", "Zwem- en triathlonexpert"),
    entry("contact.responseTime", "Response Time", "Reactietijd"),
    entry("contact.personalized", "Personalized", "Gepersonaliseerd"),
    entry("contact.form.name", "Name", "Naam"),
    entry("contact.form.email", "Email", "E-mail"),
    entry("contact.form.subject", "Subject", "Onderwerp"),
    entry("contact.form.message", "Message", "Bericht"),
    entry("contact.form.send", "Send Message", "Verstuur bericht"),
    entry("contact.form.sending", "Sending...", "Versturen..."),
    entry("contact.success", "Thank you for your message!", "Bedankt voor uw bericht!"),
    entry(
        "contact.successMsg",
        "I'll get back to you as soon as possible.",
        "Ik neem zo spoedig mogelijk contact met u op.",
    ),
    entry("contact.sendAnother", "Send another message", "Verstuur nog een bericht"),
    entry(
        "contact.error",
        "An error occurred while trying to send your message, please try again.",
        "Het is niet gelukt om uw bericht te versturen, gelieve opnieuw te proberen.",
    ),
    // ==================== Structured data ====================
    entry(
        "schema.organization.description",
        "Elite level coaching in swimming and triathlon. Swimming & Triathlon Coach providing online training programs, technique analysis, and coaching services.",
        "Elite niveau coaching in zwemmen en triathlon. Zwem- en Triathloncoach die online trainingsprogramma's, techniekanalyse en coachingdiensten aanbiedt.",
    ),
    entry("schema.person.jobTitle", "Swimming & Triathlon Coach", "Zwem- en Triathloncoach"),
    entry(
        "schema.person.description",
        "Professional swimming and triathlon coach with {years} years of experience coaching elite athletes, including coaching Olympic swimmers. Silver medal coach at Rio 2016 Olympics.",
        "Professionele zwem- en triathloncoach met {years} jaar ervaring in het coachen van elite atleten, inclusief het coachen van Olympische zwemmers. Zilveren medaille coach op de Olympische Spelen van Rio 2016.",
    ),
    entry("schema.person.knowsAbout.swimming", "Swimming coaching", "Zwemcoaching"),
    entry("schema.person.knowsAbout.triathlon", "Triathlon training", "Triathlontraining"),
    entry("schema.person.knowsAbout.science", "Sports science", "Sportwetenschappen"),
    entry("schema.person.knowsAbout.performance", "Athletic performance", "Atletische prestaties"),
    entry(
        "schema.person.alumniOf",
        "Master in Sport Sciences, Master in Rehabilitation Sciences",
        "Master in de Sportwetenschappen, Master in de Revalidatiewetenschappen",
    ),
    entry("schema.service.name", "Swimming and Triathlon Coaching", "Zwem- en Triathloncoaching"),
    entry(
        "schema.service.description",
        "Professional swimming and triathlon coaching services including online training programs, technique analysis, and personalized coaching.",
        "Professionele zwem- en triathloncoachingdiensten inclusief online trainingsprogramma's, techniekanalyse en gepersonaliseerde coaching.",
    ),
    entry("schema.service.type.swimming", "Swimming Training", "Zwemtraining"),
    entry("schema.service.type.triathlon", "Triathlon Training", "Triathlontraining"),
    entry("schema.service.type.technique", "Technique Analysis", "Techniekanalyse"),
    entry("schema.service.type.camps", "Training Camps", "Trainingskampen"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn find(key: &str) -> &'static Entry {
        ENTRIES
            .iter()
            .find(|entry| entry.key == key)
            .unwrap_or_else(|| panic!("missing key {key}"))
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = ENTRIES.iter().map(|entry| entry.key).collect();
        assert_eq!(keys.len(), ENTRIES.len());
    }

    #[test]
    fn test_no_empty_strings() {
        for entry in ENTRIES {
            assert!(!entry.en.trim().is_empty(), "empty en text for {}", entry.key);
            assert!(!entry.nl.trim().is_empty(), "empty nl text for {}", entry.key);
        }
    }

    #[test]
    fn test_template_selects_locale() {
        let nav = find("nav.about");
        assert_eq!(nav.template(Locale::En), "About");
        assert_eq!(nav.template(Locale::Nl), "Info");
    }

    #[test]
    fn test_experience_sentences_have_years_placeholder() {
        for key in ["about.intro1", "schema.person.description"] {
            let entry = find(key);
            assert!(entry.en.contains("{years}"), "{key} en");
            assert!(entry.nl.contains("{years}"), "{key} nl");
        }
    }

    #[test]
    fn test_camp_description_has_minimum_placeholder() {
        let entry = find("projects.items.trainingCamps.description");
        assert!(entry.en.contains("{camp_min}"));
        assert!(entry.nl.contains("{camp_min}"));
    }

    #[test]
    fn test_projects_heading_present_in_both_locales() {
        assert_eq!(find("projects.title").en, "Projects");
        assert_eq!(find("projects.title").nl, "Projecten");
    }

    #[test]
    fn test_dutch_differs_where_expected() {
        assert_ne!(find("contact.error").en, find("contact.error").nl);
        assert_ne!(find("about.subtitle").en, find("about.subtitle").nl);
    }
}
