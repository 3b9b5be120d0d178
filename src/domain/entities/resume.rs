use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entities::achievement::{Achievement, AchievementType};
use crate::domain::entities::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resume_template", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResumeTemplate {
    Modern,
    Classic,
    Minimal,
}

impl Default for ResumeTemplate {
    fn default() -> Self {
        ResumeTemplate::Modern
    }
}

/// Snapshot of profile fields, mirrored into the resume rather than joined
/// live at read time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
}

impl From<&User> for PersonalInfo {
    fn from(user: &User) -> Self {
        PersonalInfo {
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            phone: Some(user.phone.clone()),
            location: Some(user.location.clone()),
            linkedin: Some(user.linkedin.clone()),
            github: Some(user.github.clone()),
            portfolio: Some(user.portfolio.clone()),
        }
    }
}

impl PersonalInfo {
    /// Overlays the fields present in `other` onto `self`.
    pub fn merge(&mut self, other: PersonalInfo) {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.email.is_some() {
            self.email = other.email;
        }
        if other.phone.is_some() {
            self.phone = other.phone;
        }
        if other.location.is_some() {
            self.location = other.location;
        }
        if other.linkedin.is_some() {
            self.linkedin = other.linkedin;
        }
        if other.github.is_some() {
            self.github = other.github;
        }
        if other.portfolio.is_some() {
            self.portfolio = other.portfolio;
        }
    }
}

/// Per-achievement-type inclusion toggles for resume previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    #[serde(default = "default_true")]
    pub show_projects: bool,
    #[serde(default = "default_true")]
    pub show_courses: bool,
    #[serde(default = "default_true")]
    pub show_hackathons: bool,
    #[serde(default = "default_true")]
    pub show_internships: bool,
    #[serde(default = "default_true")]
    pub show_certifications: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility {
            show_projects: true,
            show_courses: true,
            show_hackathons: true,
            show_internships: true,
            show_certifications: true,
        }
    }
}

impl Visibility {
    pub fn shows(&self, kind: AchievementType) -> bool {
        match kind {
            AchievementType::Project => self.show_projects,
            AchievementType::Course => self.show_courses,
            AchievementType::Hackathon => self.show_hackathons,
            AchievementType::Internship => self.show_internships,
            AchievementType::Certification => self.show_certifications,
        }
    }
}

/// Partial visibility update; absent toggles keep their current value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVisibility {
    pub show_projects: Option<bool>,
    pub show_courses: Option<bool>,
    pub show_hackathons: Option<bool>,
    pub show_internships: Option<bool>,
    pub show_certifications: Option<bool>,
}

impl UpdateVisibility {
    pub fn apply_to(self, visibility: &mut Visibility) {
        if let Some(v) = self.show_projects {
            visibility.show_projects = v;
        }
        if let Some(v) = self.show_courses {
            visibility.show_courses = v;
        }
        if let Some(v) = self.show_hackathons {
            visibility.show_hackathons = v;
        }
        if let Some(v) = self.show_internships {
            visibility.show_internships = v;
        }
        if let Some(v) = self.show_certifications {
            visibility.show_certifications = v;
        }
    }
}

/// Denormalized per-user resume. `skills`, `summary` and `completeness` are
/// derived from the achievement set and profile, recomputed wholesale on
/// every achievement mutation rather than maintained incrementally.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub personal_info: Json<PersonalInfo>,
    pub summary: String,
    pub skills: Vec<String>,
    pub achievements: Vec<Uuid>,
    pub visibility: Json<Visibility>,
    pub template: ResumeTemplate,
    pub completeness: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ResumeInsert {
    pub user_id: Uuid,
    pub personal_info: PersonalInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResume {
    pub personal_info: Option<PersonalInfo>,
    pub summary: Option<String>,
    pub template: Option<ResumeTemplate>,
}

/// Resume plus its achievement documents, as returned by read endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeView {
    #[serde(flatten)]
    pub resume: Resume,
    #[serde(rename = "achievementDetails")]
    pub achievement_details: Vec<Achievement>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}
