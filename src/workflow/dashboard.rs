// src/workflow/dashboard.rs

use std::fmt;
use std::str::FromStr;

use crate::{
    error::AppError,
    models::{
        problem::Problem,
        submission::Submission,
        user::{Badge, User},
    },
    utils::format::{format_long_date, format_timestamp, initials},
};

pub const NO_SUBMISSIONS: &str =
    "Start solving problems to track your progress and improve your coding skills.";

/// Tabs of the submissions page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionTab {
    #[default]
    All,
    Accepted,
    /// Every verdict other than accepted.
    Failed,
}

impl FromStr for SubmissionTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "accepted" => Ok(Self::Accepted),
            "failed" => Ok(Self::Failed),
            _ => Err(AppError::BadRequest(format!("Unknown submission tab '{}'", s))),
        }
    }
}

pub fn filter_submissions(submissions: &[Submission], tab: SubmissionTab) -> Vec<&Submission> {
    submissions
        .iter()
        .filter(|s| match tab {
            SubmissionTab::All => true,
            SubmissionTab::Accepted => s.status.is_accepted(),
            SubmissionTab::Failed => !s.status.is_accepted(),
        })
        .collect()
}

/// One row of the submissions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRow {
    pub problem_id: String,
    pub problem_title: String,
    pub status: &'static str,
    pub language: &'static str,
    pub runtime: String,
    pub memory: String,
    pub submitted_at: String,
}

impl SubmissionRow {
    /// Resolves the problem title from `problems`, falling back to the id.
    pub fn new(submission: &Submission, problems: &[Problem]) -> Self {
        let problem_title = problems
            .iter()
            .find(|p| p.object_id == submission.problem_id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| submission.problem_id.clone());

        Self {
            problem_id: submission.problem_id.clone(),
            problem_title,
            status: submission.status.label(),
            language: submission.language.label(),
            runtime: format!("{} ms", submission.runtime),
            memory: format!("{} MB", submission.memory),
            submitted_at: format_timestamp(&submission.submitted_at),
        }
    }
}

impl fmt::Display for SubmissionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<18} {:<48} {:<11} {:>8} {:>7}  {}",
            self.status,
            self.problem_title,
            self.language,
            self.runtime,
            self.memory,
            self.submitted_at
        )
    }
}

pub fn submission_rows(
    submissions: &[Submission],
    tab: SubmissionTab,
    problems: &[Problem],
) -> Vec<SubmissionRow> {
    filter_submissions(submissions, tab)
        .into_iter()
        .map(|s| SubmissionRow::new(s, problems))
        .collect()
}

/// Progress bar of one difficulty on the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyProgress {
    pub label: &'static str,
    pub solved: u32,
    pub max: u32,
}

impl DifficultyProgress {
    /// Fill ratio in percent, capped at 100.
    pub fn percent(&self) -> u32 {
        if self.max == 0 {
            return 0;
        }
        (self.solved.min(self.max) as f64 / self.max as f64 * 100.0).round() as u32
    }
}

/// The profile page.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub display_name: String,
    pub username: String,
    pub initials: String,
    pub bio: Option<String>,
    pub joined: String,
    pub links: Vec<(&'static str, String)>,
    pub total_solved: u32,
    pub success_rate: u32,
    pub streak: u32,
    pub rank: u32,
    pub progress: Vec<DifficultyProgress>,
    pub badges: Vec<BadgeView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub name: String,
    pub glyph: &'static str,
    pub rarity: &'static str,
    pub description: String,
    pub earned: String,
}

impl From<&Badge> for BadgeView {
    fn from(badge: &Badge) -> Self {
        Self {
            name: badge.name.clone(),
            glyph: badge.icon_glyph(),
            rarity: badge.rarity.as_str(),
            description: badge.description.clone(),
            earned: format!("Earned on {}", format_long_date(&badge.earned_at)),
        }
    }
}

impl ProfileView {
    pub fn new(user: &User) -> Self {
        let stats = &user.stats;
        let progress = vec![
            DifficultyProgress {
                label: "Easy",
                solved: stats.easy_problems,
                max: 100,
            },
            DifficultyProgress {
                label: "Medium",
                solved: stats.medium_problems,
                max: 50,
            },
            DifficultyProgress {
                label: "Hard",
                solved: stats.hard_problems,
                max: 30,
            },
            DifficultyProgress {
                label: "Expert",
                solved: stats.expert_problems,
                max: 20,
            },
        ];

        Self {
            display_name: user.display_name.clone(),
            username: user.username.clone(),
            initials: initials(&user.display_name),
            bio: user.bio.clone().filter(|b| !b.is_empty()),
            joined: format!("Joined {}", format_long_date(&user.created_at)),
            links: user
                .socials
                .as_ref()
                .map(|s| s.links())
                .unwrap_or_default(),
            total_solved: stats.total_solved,
            success_rate: stats.success_rate(),
            streak: stats.streak,
            rank: stats.rank,
            progress,
            badges: user.badges.iter().map(BadgeView::from).collect(),
        }
    }
}

impl fmt::Display for ProfileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "({}) {}  @{}", self.initials, self.display_name, self.username)?;
        if let Some(bio) = &self.bio {
            writeln!(f, "{}", bio)?;
        }
        for (label, url) in &self.links {
            writeln!(f, "  {}: {}", label, url)?;
        }
        writeln!(f, "  {}", self.joined)?;
        writeln!(
            f,
            "Solved {} | Success {}% | Streak {} days | Rank #{}",
            self.total_solved, self.success_rate, self.streak, self.rank
        )?;
        for bar in &self.progress {
            writeln!(f, "  {:<7} {:>3} solved ({}%)", bar.label, bar.solved, bar.percent())?;
        }
        for badge in &self.badges {
            writeln!(
                f,
                "  {} {} [{}] {} ({})",
                badge.glyph, badge.name, badge.rarity, badge.description, badge.earned
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, models::submission::SubmissionStatus};

    #[test]
    fn test_failed_is_complement_of_accepted() {
        let submissions = fixtures::sample_submissions();

        let accepted = filter_submissions(&submissions, SubmissionTab::Accepted);
        let failed = filter_submissions(&submissions, SubmissionTab::Failed);

        assert_eq!(accepted.len(), 2);
        assert_eq!(failed.len(), 3);
        assert!(failed.iter().all(|s| s.status != SubmissionStatus::Accepted));
        assert_eq!(filter_submissions(&submissions, SubmissionTab::All).len(), 5);
    }

    #[test]
    fn test_rows_resolve_titles() {
        let submissions = fixtures::sample_submissions();
        let problems = fixtures::sample_problems();

        let rows = submission_rows(&submissions, SubmissionTab::All, &problems);
        assert_eq!(rows[1].problem_title, "Two Sum");
        assert_eq!(rows[1].runtime, "32 ms");
        assert_eq!(rows[0].submitted_at, "Apr 10, 2023, 02:48 PM");

        let rows = submission_rows(&submissions, SubmissionTab::All, &[]);
        assert_eq!(rows[1].problem_title, "1");
    }

    #[test]
    fn test_profile_view() {
        let view = ProfileView::new(&fixtures::sample_user());

        assert_eq!(view.initials, "JD");
        assert_eq!(view.success_rate, 48);
        assert_eq!(view.joined, "Joined January 15, 2023");
        assert_eq!(view.progress[1].percent(), 28);
        assert_eq!(view.progress[3].percent(), 0);
        assert_eq!(view.badges[0].glyph, "🏆");
        assert_eq!(view.badges[2].rarity, "epic");
        assert_eq!(view.links.len(), 4);
    }

    #[test]
    fn test_progress_is_capped() {
        let bar = DifficultyProgress {
            label: "Hard",
            solved: 45,
            max: 30,
        };
        assert_eq!(bar.percent(), 100);
    }
}
