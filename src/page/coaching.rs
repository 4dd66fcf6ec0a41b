use crate::i18n::TranslationTree;
use crate::page::html::escape;

/// Coaching services in display order: (dictionary id, highlight badge id, image).
const SERVICES: &[(&str, &str, &str)] = &[
    ("swimmingTraining", "oneOnOne", "/images/coaching/swimming.jpg"),
    ("triathlonTraining", "triathlon", "/images/coaching/triathlon.jpg"),
    ("swimmingTechnique", "video", "/images/coaching/technique.jpg"),
    ("swimmingTechniqueClubs", "clubs", "/images/coaching/clubs.jpg"),
    ("adults", "adults", "/images/coaching/adults.jpg"),
    ("trainingCamp", "camps", "/images/coaching/camps.jpg"),
];

fn service_card(tree: &TranslationTree, id: &str, highlight: &str, image: &str) -> String {
    let title = escape(&tree.text(&format!("coaching.services.{}", id)));
    format!(
        r##"<article class="service-card">
<div class="service-image"><img src="{image}" alt="{title}" loading="lazy"><span class="badge">{badge}</span></div>
<h3>{title}</h3>
<p>{description}</p>
<a href="#contact" class="service-more">{learn_more}</a>
</article>"##,
        image = image,
        title = title,
        badge = escape(&tree.text(&format!("coaching.highlights.{}", highlight))),
        description = escape(&tree.text(&format!("coaching.serviceDescriptions.{}", id))),
        learn_more = escape(&tree.text("coaching.learnMore")),
    )
}

pub fn render(tree: &TranslationTree) -> String {
    let cards: String = SERVICES
        .iter()
        .map(|(id, highlight, image)| service_card(tree, id, highlight, image))
        .collect();

    format!(
        r##"<section id="coaching" class="section coaching" data-reveal>
<div class="section-header"><h2>{title}</h2><p>{intro}</p></div>
<div class="service-grid">{cards}</div>
<div class="cta-block">
<h3>{cta_title}</h3>
<p>{cta_description}</p>
<a href="#contact" class="button button-inverted">{cta_button}</a>
</div>
</section>"##,
        title = escape(&tree.text("coaching.title")),
        intro = escape(&tree.text("coaching.intro")),
        cards = cards,
        cta_title = escape(&tree.text("coaching.cta.title")),
        cta_description = escape(&tree.text("coaching.cta.description")),
        cta_button = escape(&tree.text("coaching.cta.button")),
    )
}
