use crate::contact::ContactSubmission;
use crate::i18n::TranslationTree;
use crate::page::html::escape;
use crate::page::ContactState;

/// Form action for a locale, e.g. `/nl/contact`.
pub fn form_action(tree: &TranslationTree) -> String {
    format!("{}/contact", tree.locale().path())
}

fn banner(tree: &TranslationTree, state: &ContactState) -> String {
    match state {
        ContactState::Idle => String::new(),
        ContactState::Sent => format!(
            r##"<div class="form-status success" role="status"><h4>{}</h4><p>{}</p><a href="{}#contact" class="button button-outline">{}</a></div>"##,
            escape(&tree.text("contact.success")),
            escape(&tree.text("contact.successMsg")),
            tree.locale().path(),
            escape(&tree.text("contact.sendAnother")),
        ),
        ContactState::Failed(_) => format!(
            r#"<div class="form-status error" role="alert"><p>{}</p></div>"#,
            escape(&tree.text("contact.error")),
        ),
    }
}

fn form(tree: &TranslationTree, values: &ContactSubmission, recaptcha_site_key: Option<&str>) -> String {
    let recaptcha = match recaptcha_site_key {
        Some(key) => format!(r#"<div class="g-recaptcha" data-sitekey="{}"></div>"#, escape(key)),
        None => String::new(),
    };

    format!(
        r#"<form method="post" action="{action}" class="contact-form" data-contact-form>
<div class="form-row">
<label for="name">{name_label}</label><input id="name" name="name" type="text" required value="{name}">
<label for="email">{email_label}</label><input id="email" name="email" type="email" required value="{email}">
</div>
<label for="subject">{subject_label}</label><input id="subject" name="subject" type="text" required value="{subject}">
<label for="message">{message_label}</label><textarea id="message" name="message" rows="5" required>{message}</textarea>
{recaptcha}
<button type="submit" class="button button-primary" data-sending-label="{sending}">{send}</button>
</form>"#,
        action = form_action(tree),
        name_label = escape(&tree.text("contact.form.name")),
        name = escape(&values.name),
        email_label = escape(&tree.text("contact.form.email")),
        email = escape(&values.email),
        subject_label = escape(&tree.text("contact.form.subject")),
        subject = escape(&values.subject),
        message_label = escape(&tree.text("contact.form.message")),
        message = escape(&values.message),
        recaptcha = recaptcha,
        sending = escape(&tree.text("contact.form.sending")),
        send = escape(&tree.text("contact.form.send")),
    )
}

/// Contact section. A failed submission keeps what the visitor typed.
pub fn render(tree: &TranslationTree, state: &ContactState, recaptcha_site_key: Option<&str>) -> String {
    let body = match state {
        ContactState::Sent => banner(tree, state),
        ContactState::Failed(values) => {
            format!("{}{}", banner(tree, state), form(tree, values, recaptcha_site_key))
        }
        ContactState::Idle => form(tree, &ContactSubmission::default(), recaptcha_site_key),
    };

    format!(
        r#"<section id="contact" class="section contact" data-reveal>
<div class="section-header"><h2>{title}</h2><p>{intro}</p></div>
<div class="contact-grid">
<aside class="contact-info">
<h3>{lets_connect}</h3>
<div class="info-item"><h4>{email}</h4><p>{email_message}</p></div>
<div class="info-item"><h4>{professional_coach}</h4><p>{expert_title}</p></div>
<div class="info-item"><h4>{response_time}</h4><p>{personalized}</p></div>
</aside>
<div class="contact-form-wrapper">{body}</div>
</div>
</section>"#,
        title = escape(&tree.text("contact.title")),
        intro = escape(&tree.text("contact.intro")),
        lets_connect = escape(&tree.text("contact.letsConnect")),
        email = escape(&tree.text("contact.email")),
        email_message = escape(&tree.text("contact.emailMessage")),
        professional_coach = escape(&tree.text("contact.professionalCoach")),
        expert_title = escape(&tree.text("contact.expertTitle")),
        response_time = escape(&tree.text("contact.responseTime")),
        personalized = escape(&tree.text("contact.personalized")),
        body = body,
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
    fn test_form_posts_to_locale_route() {
        let html = render(&tree(Locale::Nl), &ContactState::Idle, None);
        assert!(html.contains(r#"<form method="post" action="/nl/contact""#));
        assert!(html.contains(">Verstuur bericht</button>"));
    }

    #[test]
    fn test_recaptcha_widget_only_when_configured() {
        let without = render(&tree(Locale::En), &ContactState::Idle, None);
        assert!(!without.contains("g-recaptcha"));

        let with = render(&tree(Locale::En), &ContactState::Idle, Some("site-key-123"));
        assert!(with.contains(r#"<div class="g-recaptcha" data-sitekey="site-key-123"></div>"#));
    }

    #[test]
    fn test_success_replaces_form() {
        let html = render(&tree(Locale::En), &ContactState::Sent, None);
        assert!(html.contains("Thank you for your message!"));
        assert!(html.contains("Send another message"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_failure_keeps_input() {
        let state = ContactState::Failed(ContactSubmission {
            name: "Jan <Peeters>".to_string(),
            email: "jan@example.be".to_string(),
            subject: "Zwemles".to_string(),
            message: "Hallo & goeiedag".to_string(),
            recaptcha_token: None,
        });

        let html = render(&tree(Locale::Nl), &state, None);
        assert!(html.contains("Het is niet gelukt om uw bericht te versturen"));
        assert!(html.contains(r#"value="Jan &lt;Peeters&gt;""#));
        assert!(html.contains(r#"value="jan@example.be""#));
        assert!(html.contains(">Hallo &amp; goeiedag</textarea>"));
    }
}
