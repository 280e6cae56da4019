//! The site owner's profile record, authored as JSON and embedded at build time.

use serde::Deserialize;

use crate::config::is_absolute_url;
use crate::error::ProfileError;

const PROFILE_JSON: &str = include_str!("../assets/profile.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub resume: String,
    pub image: String,
    pub placeholder_image: String,
    pub bio: String,
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub messaging: Option<MessagingLink>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessagingLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub year: u16,
    pub link: String,
    pub image: String,
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_accent() -> String {
    "cyan".to_string()
}

impl Profile {
    pub fn embedded() -> Result<Self, ProfileError> {
        Self::from_json(PROFILE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(raw)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(invalid("title", "must not be empty"));
        }
        if self.tagline.trim().is_empty() {
            return Err(invalid("tagline", "must not be empty"));
        }
        if !looks_like_email(&self.email) {
            return Err(invalid("email", "must look like local@domain"));
        }
        if self.skills.is_empty() {
            return Err(invalid("skills", "must list at least one skill"));
        }
        for social in &self.socials {
            if !is_web_url(&social.url) {
                return Err(invalid(&format!("socials.{}", social.label), "must be http(s)"));
            }
        }
        for project in &self.projects {
            if !is_web_url(&project.link) {
                return Err(invalid(&format!("projects.{}", project.title), "link must be http(s)"));
            }
        }
        Ok(())
    }

    /// Social links plus the messaging link, if one is configured.
    pub fn contact_links(&self, messaging_override: Option<&str>) -> Vec<ContactLink> {
        let mut links: Vec<ContactLink> = self
            .socials
            .iter()
            .map(|social| ContactLink {
                label: social.label.clone(),
                href: social.url.clone(),
                icon: social_icon(&social.icon),
            })
            .collect();

        let messaging = match (messaging_override, &self.messaging) {
            (Some(url), existing) => Some(MessagingLink {
                label: existing
                    .as_ref()
                    .map(|link| link.label.clone())
                    .unwrap_or_else(|| "Message".to_string()),
                url: url.to_string(),
            }),
            (None, existing) => existing.clone(),
        };

        if let Some(messaging) = messaging.filter(|link| is_absolute_url(&link.url)) {
            links.push(ContactLink {
                label: messaging.label,
                href: messaging.url,
                icon: "fa-solid fa-comment-dots",
            });
        }

        links.push(ContactLink {
            label: "Email".to_string(),
            href: format!("mailto:{}", self.email),
            icon: "fa-solid fa-envelope",
        });

        links
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    pub icon: &'static str,
}

fn invalid(field: &str, reason: &'static str) -> ProfileError {
    ProfileError::Invalid {
        field: field.to_string(),
        reason,
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}

fn is_web_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

fn social_icon(key: &str) -> &'static str {
    match key {
        "github" => "fa-brands fa-github",
        "linkedin" => "fa-brands fa-linkedin",
        "x" | "twitter" => "fa-brands fa-x-twitter",
        "instagram" => "fa-brands fa-instagram",
        _ => "fa-solid fa-link",
    }
}

/// Devicon class for a skill label; unknown labels render as plain chips.
pub fn skill_icon(label: &str) -> Option<&'static str> {
    let icon = match label {
        "HTML5" => "devicon-html5-plain",
        "CSS3" => "devicon-css3-plain",
        "JavaScript" => "devicon-javascript-plain",
        "React" => "devicon-react-original",
        "Tailwind CSS" => "devicon-tailwindcss-original",
        "Firebase" => "devicon-firebase-plain",
        "Python" => "devicon-python-plain",
        "Figma" => "devicon-figma-plain",
        "Flutter" => "devicon-flutter-plain",
        "Git" => "devicon-git-plain",
        "Node.js" => "devicon-nodejs-plain",
        "MongoDB" => "devicon-mongodb-plain",
        "Unreal Engine" => "devicon-unrealengine-original",
        "Blender" => "devicon-blender-original",
        _ => return None,
    };
    Some(icon)
}
