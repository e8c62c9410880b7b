use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

pub static PROFILE: LazyLock<Result<Profile, ProfileError>> = LazyLock::new(Profile::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile content not found")]
    Missing,
    #[error("Couldn't parse profile: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Skill '{name}' has level {level}, expected 0-100")]
    SkillLevel { name: String, level: u8 },
    #[error("Skill name can't be empty")]
    EmptySkillName,
}

/// A skill proficiency in percent, never above 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MAX: u8 = 100;

    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::MAX).then_some(Self(level))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> String {
        format!("{}%", self.0)
    }

    pub fn width_style(self) -> String {
        format!("width: {}%", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Deserialize)]
struct RawSkill {
    name: String,
    level: u8,
}

impl TryFrom<RawSkill> for Skill {
    type Error = ProfileError;

    fn try_from(raw: RawSkill) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err(ProfileError::EmptySkillName);
        }
        let level = SkillLevel::new(raw.level).ok_or_else(|| ProfileError::SkillLevel {
            name: raw.name.clone(),
            level: raw.level,
        })?;
        Ok(Skill {
            name: raw.name,
            level,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AboutCard {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub href: String,
    /// Icon class name
    pub icon: String,
}

impl ProfileLink {
    /// In-page anchors stay in the tab, everything else opens a new one.
    pub fn is_external(&self) -> bool {
        !self.href.starts_with('#')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactInfo {
    pub heading: String,
    pub blurb: String,
    pub email: String,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub initials: String,
    pub name: String,
    pub greeting: String,
    pub headline: String,
    pub affiliation: String,
    pub about: Vec<AboutCard>,
    pub skills: Vec<Skill>,
    pub links: Vec<ProfileLink>,
    pub contact: ContactInfo,
    pub copyright_holder: String,
}

#[derive(Deserialize)]
struct RawProfile {
    initials: String,
    name: String,
    greeting: String,
    headline: String,
    affiliation: String,
    about: Vec<AboutCard>,
    skills: Vec<RawSkill>,
    links: Vec<ProfileLink>,
    contact: ContactInfo,
    copyright_holder: String,
}

impl Profile {
    pub fn load() -> Result<Self, ProfileError> {
        let file = Content::get(PROFILE_FILE).ok_or(ProfileError::Missing)?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ProfileError> {
        let raw: RawProfile = serde_json::from_slice(bytes)?;
        let skills = raw
            .skills
            .into_iter()
            .map(Skill::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Profile {
            initials: raw.initials,
            name: raw.name,
            greeting: raw.greeting,
            headline: raw.headline,
            affiliation: raw.affiliation,
            about: raw.about,
            skills,
            links: raw.links,
            contact: raw.contact,
            copyright_holder: raw.copyright_holder,
        })
    }

    pub fn copyright(&self, year: &str) -> String {
        format!("© {} {}. All rights reserved.", year, self.copyright_holder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_json(skills: &str) -> String {
        format!(
            r##"{{
                "initials": "AL",
                "name": "Ada Lovelace",
                "greeting": "hi",
                "headline": "Analyst",
                "affiliation": "Analytical Engine Co.",
                "about": [{{ "icon": "*", "title": "Who", "body": "Me" }}],
                "skills": {skills},
                "links": [
                    {{ "label": "GitHub", "href": "https://github.com/ada", "icon": "devicon-github-plain" }},
                    {{ "label": "Contact", "href": "#contact", "icon": "icon-mail" }}
                ],
                "contact": {{ "heading": "Talk", "blurb": "Say hi", "email": "ada@example.com" }},
                "copyright_holder": "Ada Lovelace"
            }}"##
        )
    }

    #[test]
    fn test_bundled_profile_loads() {
        let profile = Profile::load().expect("bundled profile should be valid");
        let skills: Vec<_> = profile
            .skills
            .iter()
            .map(|s| (s.name.as_str(), s.level.value()))
            .collect();
        assert_eq!(
            skills,
            vec![
                ("Python", 75),
                ("JavaScript", 80),
                ("React", 50),
                (".NET", 50),
                ("Data Scraping", 90),
                ("Cybersecurity", 85),
            ]
        );
        assert_eq!(profile.contact.mailto(), "mailto:zeyadelprns@gmail.com");
        assert!(PROFILE.is_ok());
    }

    #[test]
    fn test_skill_level_bounds() {
        assert_eq!(SkillLevel::new(0).map(SkillLevel::value), Some(0));
        assert_eq!(SkillLevel::new(100).map(SkillLevel::value), Some(100));
        assert!(SkillLevel::new(101).is_none());
    }

    #[test]
    fn test_skill_label_and_width_match_level() {
        for level in [0, 1, 50, 75, 100] {
            let skill = SkillLevel::new(level).expect("level in range");
            assert_eq!(skill.label(), format!("{}%", level));
            assert_eq!(skill.width_style(), format!("width: {}%", level));
        }
    }

    #[test]
    fn test_from_json_rejects_out_of_range_level() {
        let json = profile_json(r#"[{ "name": "Rust", "level": 150 }]"#);
        match Profile::from_json(json.as_bytes()) {
            Err(ProfileError::SkillLevel { name, level }) => {
                assert_eq!(name, "Rust");
                assert_eq!(level, 150);
            }
            other => panic!("expected SkillLevel error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_blank_skill_name() {
        let json = profile_json(r#"[{ "name": "  ", "level": 10 }]"#);
        assert!(matches!(
            Profile::from_json(json.as_bytes()),
            Err(ProfileError::EmptySkillName)
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Profile::from_json(b"{ not json"),
            Err(ProfileError::Parse(_))
        ));
        // negative levels don't fit the type at all
        let json = profile_json(r#"[{ "name": "Rust", "level": -1 }]"#);
        assert!(matches!(
            Profile::from_json(json.as_bytes()),
            Err(ProfileError::Parse(_))
        ));
    }

    #[test]
    fn test_links_and_copyright() {
        let json = profile_json("[]");
        let profile = Profile::from_json(json.as_bytes()).expect("valid profile");
        assert!(profile.skills.is_empty());
        assert!(profile.links[0].is_external());
        assert!(!profile.links[1].is_external());
        assert_eq!(
            profile.copyright("2024"),
            "© 2024 Ada Lovelace. All rights reserved."
        );
    }
}
