// src/models/user.rs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Public profile of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// ISO date, e.g. "2023-01-15".
    pub created_at: String,
    pub stats: UserStats,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub socials: Option<UserSocials>,
}

/// Aggregated solving statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_solved: u32,
    pub total_submissions: u32,
    pub streak: u32,
    pub rank: u32,
    pub points: u32,
    pub easy_problems: u32,
    pub medium_problems: u32,
    pub hard_problems: u32,
    pub expert_problems: u32,
}

impl UserStats {
    /// Percentage of submissions that solved a problem, rounded.
    /// Zero when nothing has been submitted yet.
    pub fn success_rate(&self) -> u32 {
        if self.total_submissions == 0 {
            return 0;
        }
        (self.total_solved as f64 / self.total_submissions as f64 * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon key: "trophy", "fire", "lightning".
    pub icon: String,
    pub rarity: BadgeRarity,
    pub earned_at: String,
}

impl Badge {
    pub fn icon_glyph(&self) -> &'static str {
        match self.icon.as_str() {
            "trophy" => "🏆",
            "fire" => "🔥",
            "lightning" => "⚡",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl BadgeRarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSocials {
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

impl UserSocials {
    /// Resolved profile links as `(label, url)` pairs, in display order.
    pub fn links(&self) -> Vec<(&'static str, String)> {
        let mut links = Vec::new();
        if let Some(github) = &self.github {
            links.push(("GitHub", format!("https://github.com/{}", github)));
        }
        if let Some(twitter) = &self.twitter {
            links.push(("Twitter", format!("https://twitter.com/{}", twitter)));
        }
        if let Some(linkedin) = &self.linkedin {
            links.push(("LinkedIn", format!("https://linkedin.com/in/{}", linkedin)));
        }
        if let Some(website) = &self.website {
            links.push(("Website", website.clone()));
        }
        links
    }
}

/// Login form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AuthFormData {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub password: String,
}

/// Signup form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_passwords_match))]
pub struct SignupFormData {
    #[validate(length(min = 1, max = 50, message = "Please fill in all fields"))]
    pub username: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub password: String,
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub confirm_password: String,
}

fn validate_passwords_match(form: &SignupFormData) -> Result<(), ValidationError> {
    if form.password != form.confirm_password {
        let mut error = ValidationError::new("passwords_do_not_match");
        error.message = Some("Passwords do not match".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let stats = UserStats {
            total_solved: 42,
            total_submissions: 87,
            ..Default::default()
        };
        assert_eq!(stats.success_rate(), 48);
        assert_eq!(UserStats::default().success_rate(), 0);
    }

    #[test]
    fn test_login_form_validation() {
        let ok = AuthFormData {
            email: "john.doe@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty = AuthFormData::default();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_signup_passwords_must_match() {
        let form = SignupFormData {
            username: "codesparker".to_string(),
            email: "john.doe@example.com".to_string(),
            password: "one".to_string(),
            confirm_password: "two".to_string(),
        };
        assert!(form.validate().is_err());

        let form = SignupFormData {
            confirm_password: "one".to_string(),
            ..form
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_social_links() {
        let socials = UserSocials {
            github: Some("johndoe".to_string()),
            website: Some("https://johndoe.com".to_string()),
            ..Default::default()
        };
        let links = socials.links();
        assert_eq!(links[0], ("GitHub", "https://github.com/johndoe".to_string()));
        assert_eq!(links[1].0, "Website");
    }
}
