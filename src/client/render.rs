use ammonia::clean_text;

use crate::client::{
    ui::Notification,
    view_model::{ProjectCard, SkillCard, SkillGroup},
};

// All interpolated text goes through `clean_text`, which entity-encodes markup and
// attribute delimiters, so output is safe both in element bodies and quoted attributes.

pub fn render_project_grid(cards: &[ProjectCard]) -> String {
    cards.iter().map(render_project_card).collect()
}

pub fn render_project_card(card: &ProjectCard) -> String {
    let title = clean_text(&card.title);

    let mut links = String::new();
    if let Some(demo) = &card.demo_url {
        links.push_str(&format!(
            r#"<a href="{}" target="_blank" class="btn-secondary text-sm">Live Demo</a>"#,
            clean_text(demo)
        ));
    }
    if let Some(github) = &card.github_url {
        links.push_str(&format!(
            r#"<a href="{}" target="_blank" class="btn-secondary text-sm">GitHub</a>"#,
            clean_text(github)
        ));
    }

    let tags: String = card
        .technologies
        .iter()
        .map(|tech| {
            format!(
                r#"<span class="px-3 py-1 bg-portfolio-primary bg-opacity-10 text-portfolio-primary rounded-full text-sm">{}</span>"#,
                clean_text(tech)
            )
        })
        .collect();

    format!(
        concat!(
            r#"<div id="project-{id}" class="project-card fade-in-on-scroll" data-category="{category}">"#,
            r#"<div class="relative overflow-hidden">"#,
            r#"<img src="{image}" alt="{title}" class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500">"#,
            r#"<div class="absolute inset-0 bg-portfolio-primary bg-opacity-0 group-hover:bg-opacity-80 transition-all duration-300 flex items-center justify-center">"#,
            r#"<div class="text-white text-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">"#,
            r#"<h4 class="text-xl font-bold mb-2">{title}</h4>"#,
            r#"<div class="flex space-x-4">{links}</div>"#,
            r#"</div></div></div>"#,
            r#"<div class="p-6">"#,
            r#"<h3 class="text-xl font-bold mb-2">{title}</h3>"#,
            r#"<p class="text-gray-600 mb-4">{description}</p>"#,
            r#"<div class="flex flex-wrap gap-2">{tags}</div>"#,
            r#"</div></div>"#,
        ),
        id = clean_text(&card.id),
        category = clean_text(&card.category),
        image = clean_text(&card.image_url),
        title = title,
        links = links,
        description = clean_text(&card.description),
        tags = tags,
    )
}

pub fn render_skill_groups(groups: &[SkillGroup]) -> String {
    groups.iter().map(render_skill_group).collect()
}

fn render_skill_group(group: &SkillGroup) -> String {
    let cards: String = group.skills.iter().map(render_skill_card).collect();

    format!(
        concat!(
            r#"<div id="skills-{category}" class="mb-8 fade-in-on-scroll">"#,
            r#"<h3 class="text-xl font-bold mb-4 capitalize">{heading}</h3>"#,
            r#"<div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">{cards}</div>"#,
            r#"</div>"#,
        ),
        category = clean_text(&group.category),
        heading = clean_text(&group.heading),
        cards = cards,
    )
}

fn render_skill_card(skill: &SkillCard) -> String {
    format!(
        concat!(
            r#"<div class="skill-card">"#,
            r#"<div class="text-2xl mb-2">{icon}</div>"#,
            r#"<h4 class="font-medium">{name}</h4>"#,
            r#"<div class="mt-2"><div class="bg-gray-200 rounded-full h-2">"#,
            r#"<div class="bg-portfolio-primary rounded-full h-2 transition-all duration-1000" style="width: {width}%"></div>"#,
            r#"</div></div></div>"#,
        ),
        icon = clean_text(&skill.icon),
        name = clean_text(&skill.name),
        width = skill.width,
    )
}

pub fn render_notification(notification: &Notification) -> String {
    format!(
        r#"<div class="fixed top-4 right-4 p-4 rounded-lg text-white z-50 transition-all duration-300 {}">{}</div>"#,
        notification.kind.class(),
        clean_text(&notification.message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{
        ui::NotificationKind,
        view_model::{group_skills, ProjectCard},
    };
    use crate::store::seed;

    fn card() -> ProjectCard {
        ProjectCard::from(&seed::projects()[0])
    }

    #[test]
    fn project_card_carries_category_and_links() {
        let html = render_project_card(&card());

        assert!(html.contains(r#"data-category="fullstack""#));
        assert!(html.contains(">Live Demo</a>"));
        assert!(html.contains(">GitHub</a>"));
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert!(html.contains(&clean_text("E-Commerce Platform")));
        assert_eq!(html.matches("rounded-full text-sm").count(), 5);
    }

    #[test]
    fn missing_links_are_omitted() {
        let mut card = card();
        card.demo_url = None;
        card.github_url = None;

        let html = render_project_card(&card);
        assert!(!html.contains("Live Demo"));
        assert!(!html.contains("GitHub"));
    }

    #[test]
    fn markup_in_data_is_escaped() {
        let mut card = card();
        card.title = "<script>alert(1)</script>".into();
        card.technologies = vec![r#""><img onerror=x>"#.into()];

        let html = render_project_card(&card);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img onerror"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn skill_bars_use_proficiency_width() {
        let html = render_skill_groups(&group_skills(&seed::skills()));

        assert_eq!(html.matches("skill-card").count(), 12);
        assert_eq!(html.matches("width: 95%").count(), 3);
        assert_eq!(html.matches("width: 75%").count(), 5);
        assert_eq!(html.matches("width: 50%").count(), 4);
        assert!(html.contains(&format!(">{}</h3>", clean_text("soft skills"))));
    }

    #[test]
    fn notification_banner_uses_kind_colour() {
        let ok = render_notification(&Notification::new("Sent", NotificationKind::Success));
        assert!(ok.contains("bg-green-500"));

        let err = render_notification(&Notification::new("Failed", NotificationKind::Error));
        assert!(err.contains("bg-red-500"));
        assert!(err.ends_with(">Failed</div>"));
    }
}
