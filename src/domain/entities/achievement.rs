use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::integration::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "achievement_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AchievementType {
    Hackathon,
    Course,
    Internship,
    Project,
    Certification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "achievement_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AchievementStatus {
    Verified,
    Pending,
    Unverified,
}

impl Default for AchievementStatus {
    fn default() -> Self {
        AchievementStatus::Unverified
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "achievement_source", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AchievementSource {
    Manual,
    Devpost,
    Coursera,
    Udemy,
    Github,
    Linkedin,
}

impl Default for AchievementSource {
    fn default() -> Self {
        AchievementSource::Manual
    }
}

impl From<Platform> for AchievementSource {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Devpost => AchievementSource::Devpost,
            Platform::Coursera => AchievementSource::Coursera,
            Platform::Udemy => AchievementSource::Udemy,
            Platform::Github => AchievementSource::Github,
            Platform::Linkedin => AchievementSource::Linkedin,
        }
    }
}

/// Type-dependent metadata bag. The fields are only conventions per
/// achievement type; nothing enforces which subset is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementMetadata {
    // hackathons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<i32>,

    // courses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    // internships
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    // projects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub achievement_type: AchievementType,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub skills: Vec<String>,
    pub certificate_url: String,
    pub status: AchievementStatus,
    pub source: AchievementSource,
    pub metadata: Json<AchievementMetadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    #[serde(rename = "type")]
    pub achievement_type: AchievementType,

    #[validate(length(min = 1, message = "Please add a title"))]
    pub title: String,

    #[validate(length(min = 1, message = "Please add an organization"))]
    pub organization: String,

    #[serde(default)]
    pub description: String,

    pub start_date: DateTime<Utc>,

    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub certificate_url: String,

    #[serde(default)]
    pub status: AchievementStatus,

    #[serde(default)]
    pub source: AchievementSource,

    #[serde(default)]
    pub metadata: AchievementMetadata,
}

/// Row-level insert shape; ownership and provenance are decided by the
/// caller, not taken from the payload.
#[derive(Debug)]
pub struct AchievementInsert {
    pub user_id: Uuid,
    pub achievement_type: AchievementType,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub skills: Vec<String>,
    pub certificate_url: String,
    pub status: AchievementStatus,
    pub source: AchievementSource,
    pub metadata: AchievementMetadata,
}

impl NewAchievement {
    pub fn prepare_for_insert(self, user_id: Uuid) -> AchievementInsert {
        AchievementInsert {
            user_id,
            achievement_type: self.achievement_type,
            title: self.title,
            organization: self.organization,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            skills: self.skills,
            certificate_url: self.certificate_url,
            status: self.status,
            source: self.source,
            metadata: self.metadata,
        }
    }
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAchievement {
    #[serde(rename = "type")]
    pub achievement_type: Option<AchievementType>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub skills: Option<Vec<String>>,
    pub certificate_url: Option<String>,
    pub status: Option<AchievementStatus>,
    pub metadata: Option<AchievementMetadata>,
}

impl UpdateAchievement {
    pub fn apply_to(self, achievement: &mut Achievement) {
        if let Some(kind) = self.achievement_type {
            achievement.achievement_type = kind;
        }
        if let Some(title) = self.title {
            achievement.title = title;
        }
        if let Some(organization) = self.organization {
            achievement.organization = organization;
        }
        if let Some(description) = self.description {
            achievement.description = description;
        }
        if let Some(start_date) = self.start_date {
            achievement.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            achievement.end_date = Some(end_date);
        }
        if let Some(skills) = self.skills {
            achievement.skills = skills;
        }
        if let Some(certificate_url) = self.certificate_url {
            achievement.certificate_url = certificate_url;
        }
        if let Some(status) = self.status {
            achievement.status = status;
        }
        if let Some(metadata) = self.metadata {
            achievement.metadata = Json(metadata);
        }
    }
}

/// Query-string filter for achievement listing.
#[derive(Debug, Default, Deserialize)]
pub struct AchievementFilter {
    #[serde(rename = "type")]
    pub achievement_type: Option<AchievementType>,
    pub status: Option<AchievementStatus>,
    #[serde(default)]
    pub sort: AchievementSort,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AchievementSort {
    /// Newest first, the default.
    #[default]
    Newest,
    Oldest,
    /// Most recent start date first.
    Date,
}

/// Lenient on purpose: an unrecognized sort value falls back to the
/// default instead of failing the request.
impl<'de> Deserialize<'de> for AchievementSort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "oldest" => AchievementSort::Oldest,
            "date" => AchievementSort::Date,
            _ => AchievementSort::Newest,
        })
    }
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct StatsByType {
    pub hackathon: usize,
    pub course: usize,
    pub internship: usize,
    pub project: usize,
    pub certification: usize,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct StatsByStatus {
    pub verified: usize,
    pub pending: usize,
    pub unverified: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStats {
    pub total: usize,
    pub by_type: StatsByType,
    pub by_status: StatsByStatus,
    pub skills: Vec<String>,
}
