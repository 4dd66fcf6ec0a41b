use crate::i18n::TranslationTree;
use crate::page::html::{escape, external_link};

/// A link embedded at the end of a project description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedLink {
    pub url: &'static str,
    pub text: &'static str,
}

/// One project card. Built fresh for every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub image: &'static str,
    pub title: String,
    pub description: String,
    pub link: Option<&'static str>,
    pub category: String,
    pub embedded_link: Option<EmbeddedLink>,
    pub featured: bool,
}

impl ProjectRecord {
    /// The TrainingPeaks logo is shown whole on a white background instead of cropped.
    fn is_logo(&self) -> bool {
        self.image.contains("trainingpeaks-logo")
    }
}

const TRAINING_PEAKS_URL: &str = "https://www.trainingpeaks.com/coach/pellegrims#trainingplans";

/// The project list for one locale.
pub fn project_records(tree: &TranslationTree) -> Vec<ProjectRecord> {
    let text = |key: &str| tree.text(key).into_owned();

    vec![
        ProjectRecord {
            image: "/images/pic01.jpg",
            title: text("projects.items.eliteSwimmers.title"),
            description: text("projects.items.eliteSwimmers.description"),
            link: None,
            category: text("projects.categories.eliteTraining"),
            embedded_link: None,
            featured: true,
        },
        ProjectRecord {
            image: "/images/rwanda1.jpg",
            title: text("projects.items.rwanda.title"),
            description: text("projects.items.rwanda.description"),
            link: Some("https://www.rwandanepic.com/"),
            category: text("projects.categories.adventure"),
            embedded_link: None,
            featured: true,
        },
        ProjectRecord {
            image: "/images/trainingpeaks-logo.png",
            title: text("projects.items.trainingPlans.title"),
            description: text("projects.linkTexts.plansAvailableOn"),
            link: Some(TRAINING_PEAKS_URL),
            category: text("projects.categories.trainingPlans"),
            embedded_link: Some(EmbeddedLink {
                url: TRAINING_PEAKS_URL,
                text: "TrainingPeaks.com",
            }),
            featured: true,
        },
        ProjectRecord {
            image: "/images/rgf.jpg",
            title: text("projects.items.startToSwim.title"),
            description: text("projects.items.startToSwim.description"),
            link: None,
            category: text("projects.categories.community"),
            embedded_link: None,
            featured: true,
        },
        ProjectRecord {
            image: "/images/pic03.jpg",
            title: text("projects.items.trainingCamps.title"),
            description: text("projects.items.trainingCamps.description"),
            link: None,
            category: text("projects.categories.camps"),
            embedded_link: None,
            featured: true,
        },
        ProjectRecord {
            image: "/images/rdmlogo.png",
            title: text("projects.items.rocDuMaroc.title"),
            description: text("projects.items.rocDuMaroc.description"),
            link: Some("https://www.rocdumaroc.com/"),
            category: text("projects.categories.adventure"),
            embedded_link: None,
            featured: true,
        },
    ]
}

fn description(project: &ProjectRecord) -> String {
    match &project.embedded_link {
        Some(embedded) => format!(
            "{} {}",
            escape(&project.description),
            external_link(embedded.url, "inline-link", &escape(embedded.text))
        ),
        None => escape(&project.description),
    }
}

fn project_card(tree: &TranslationTree, project: &ProjectRecord) -> String {
    let title = escape(&project.title);
    let image_class = if project.is_logo() {
        "project-image contain"
    } else {
        "project-image cover"
    };

    let (overlay, heading, view) = match project.link {
        Some(link) => (
            format!(
                r#"<div class="project-overlay">{}</div>"#,
                external_link(
                    link,
                    "project-overlay-link",
                    &format!("<span>{}</span>", escape(&tree.text("projects.viewProject")))
                )
            ),
            external_link(link, "project-title-link", &title),
            external_link(
                link,
                "project-view-link",
                &format!("<span>{}</span>", escape(&tree.text("projects.view")))
            ),
        ),
        None => (String::new(), title.clone(), String::new()),
    };

    format!(
        r#"<article class="project-card">
<div class="project-media"><img src="{image}" alt="{title}" class="{image_class}" loading="lazy"><span class="category">{category}</span>{overlay}</div>
<div class="project-body"><h4>{heading}</h4><p>{description}</p>{view}</div>
</article>"#,
        image = project.image,
        title = title,
        image_class = image_class,
        category = escape(&project.category),
        overlay = overlay,
        heading = heading,
        description = description(project),
        view = view,
    )
}

pub fn render(tree: &TranslationTree) -> String {
    let cards: String = project_records(tree)
        .iter()
        .filter(|project| project.featured)
        .map(|project| project_card(tree, project))
        .collect();

    format!(
        r#"<section id="projects" class="section projects" data-reveal>
<div class="section-header"><h2>{title}</h2><p>{intro}</p></div>
<h3 class="featured-heading">{featured}</h3>
<div class="project-grid">{cards}</div>
</section>"#,
        title = escape(&tree.text("projects.title")),
        intro = escape(&tree.text("projects.intro")),
        featured = escape(&tree.text("projects.featuredWork")),
        cards = cards,
    )
}
