use crate::experience::{format_years, YearsDisplay};
use crate::i18n::TranslationTree;
use crate::page::html::escape;

pub fn render(tree: &TranslationTree) -> String {
    let facts = tree.facts();
    let intros: String = ["about.intro1", "about.intro2", "about.intro3", "about.intro4"]
        .iter()
        .map(|key| format!("<p>{}</p>", escape(&tree.text(key))))
        .collect();

    format!(
        r##"<section id="about" class="section about" data-reveal>
<div class="about-banner"><img src="/images/banner_1920.jpg" alt="{banner_alt}" width="1920" height="1080"></div>
<div class="about-content">
<p class="profile">{profile}</p>
<h2>{title}</h2>
<p class="subtitle">{subtitle}</p>
<div class="about-story"><h3>{my_story}</h3>{intros}</div>
<div class="stats">
<div class="stat-card"><div class="stat-value">{years}</div><div class="stat-label">{years_label}</div></div>
<div class="stat-card"><div class="stat-value">{clients}+</div><div class="stat-label">{clients_label}</div></div>
</div>
<div class="cta-row">
<a href="#coaching" class="button button-primary">{explore}</a>
<a href="#contact" class="button button-outline">{get_in_touch}</a>
</div>
</div>
</section>"##,
        banner_alt = escape(&tree.text("about.bannerAlt")),
        profile = escape(&tree.text("profile")),
        title = escape(&tree.text("about.title")),
        subtitle = escape(&tree.text("about.subtitle")),
        my_story = escape(&tree.text("about.myStory")),
        intros = intros,
        years = format_years(facts.years_of_experience, YearsDisplay::OpenEnded),
        years_label = escape(&tree.text("about.yearsExperience")),
        clients = facts.clients_coached,
        clients_label = escape(&tree.text("about.clientsCoached")),
        explore = escape(&tree.text("about.exploreCoaching")),
        get_in_touch = escape(&tree.text("about.getInTouch")),
    )
}
