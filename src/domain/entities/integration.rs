use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::achievement::NewAchievement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "integration_platform", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Devpost,
    Coursera,
    Udemy,
    Github,
    Linkedin,
}

/// Trust relationship with an external platform. An active integration is
/// what lets a webhook event create pre-verified achievements.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub platform: Platform,
    pub platform_user_id: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub is_active: bool,
    pub last_synced: Option<DateTime<Utc>>,
    pub sync_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectIntegration {
    pub platform: Platform,
    #[serde(default)]
    pub platform_user_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug)]
pub struct IntegrationInsert {
    pub user_id: Uuid,
    pub platform: Platform,
    pub platform_user_id: String,
    pub api_key: String,
}

/// Inbound event from an external platform. Signature verification is a
/// stated non-goal; an active integration record is the only gate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub user_id: Uuid,
    pub platform: Platform,
    pub achievement_data: NewAchievement,
}
