use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{
    about_me::{AboutInfo, SocialLinks},
    project::{Project, ProjectCategory},
    skill::{Proficiency, Skill, SkillCategory},
};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "E-Commerce Platform".into(),
            description: "A full-stack e-commerce solution with modern UI/UX, payment integration, and admin dashboard. Built with React, Node.js, and PostgreSQL.".into(),
            technologies: strings(&["React", "Node.js", "PostgreSQL", "Stripe", "Tailwind CSS"]),
            image_url: Some("/images/projects/ecommerce.jpg".into()),
            demo_url: Some("https://demo-ecommerce.example.com".into()),
            github_url: Some("https://github.com/mary/ecommerce-platform".into()),
            featured: true,
            category: ProjectCategory::Fullstack,
            created_at: date(2024, 1, 15),
        },
        Project {
            id: "2".into(),
            title: "Task Management App".into(),
            description: "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.".into(),
            technologies: strings(&["Vue.js", "Express.js", "MongoDB", "Socket.io", "SCSS"]),
            image_url: Some("/images/projects/taskmanager.jpg".into()),
            demo_url: Some("https://task-manager.example.com".into()),
            github_url: Some("https://github.com/mary/task-manager".into()),
            featured: true,
            category: ProjectCategory::Web,
            created_at: date(2023, 11, 20),
        },
        Project {
            id: "3".into(),
            title: "Weather Dashboard".into(),
            description: "A beautiful weather dashboard with location-based forecasts, interactive maps, and personalized weather alerts.".into(),
            technologies: strings(&["JavaScript", "Chart.js", "OpenWeather API", "CSS3"]),
            image_url: Some("/images/projects/weather.jpg".into()),
            demo_url: Some("https://weather-dashboard.example.com".into()),
            github_url: Some("https://github.com/mary/weather-dashboard".into()),
            featured: false,
            category: ProjectCategory::Web,
            created_at: date(2023, 9, 10),
        },
        Project {
            id: "4".into(),
            title: "Mobile Fitness Tracker".into(),
            description: "A React Native mobile app for tracking workouts, nutrition, and fitness goals with offline capability.".into(),
            technologies: strings(&["React Native", "Redux", "SQLite", "Expo"]),
            image_url: Some("/images/projects/fitness.jpg".into()),
            demo_url: Some("https://fitness-app.example.com".into()),
            github_url: Some("https://github.com/mary/fitness-tracker".into()),
            featured: true,
            category: ProjectCategory::Mobile,
            created_at: date(2023, 7, 5),
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    let skill = |id: &str, name: &str, category: SkillCategory, proficiency: Proficiency, icon: &str| Skill {
        id: id.into(),
        name: name.into(),
        category,
        proficiency,
        icon: Some(icon.into()),
    };

    use Proficiency::*;
    use SkillCategory::*;

    vec![
        skill("1", "JavaScript", Frontend, Expert, "⚡"),
        skill("2", "TypeScript", Frontend, Advanced, "🔷"),
        skill("3", "React", Frontend, Expert, "⚛️"),
        skill("4", "Vue.js", Frontend, Advanced, "💚"),
        skill("5", "Node.js", Backend, Advanced, "🟢"),
        skill("6", "NestJS", Backend, Advanced, "🐺"),
        skill("7", "PostgreSQL", Backend, Intermediate, "🐘"),
        skill("8", "MongoDB", Backend, Intermediate, "🍃"),
        skill("9", "Docker", Tools, Intermediate, "🐳"),
        skill("10", "Git", Tools, Advanced, "📝"),
        skill("11", "Figma", Design, Intermediate, "🎨"),
        skill("12", "Problem Solving", SoftSkills, Expert, "🧩"),
    ]
}

pub fn about_info() -> AboutInfo {
    AboutInfo {
        name: "Mary Johnson".into(),
        title: "Full-Stack Developer & UI/UX Enthusiast".into(),
        bio: "Passionate full-stack developer with 3+ years of experience creating beautiful, functional web applications. \
              I love turning complex problems into simple, beautiful designs. When I'm not coding, you'll find me \
              exploring new technologies, contributing to open source projects, or sketching UI concepts."
            .into(),
        location: "San Francisco, CA".into(),
        email: "mary@example.com".into(),
        social: SocialLinks {
            github: Some("https://github.com/mary".into()),
            linkedin: Some("https://linkedin.com/in/maryjohnson".into()),
            twitter: Some("https://twitter.com/mary_codes".into()),
            website: Some("https://mary.dev".into()),
        },
        profile_image: Some("/images/profile.jpg".into()),
        resume: Some("/documents/mary-johnson-resume.pdf".into()),
    }
}
