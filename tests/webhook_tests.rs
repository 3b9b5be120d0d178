mod common;

use chrono::Utc;
use mockall::Sequence;
use uuid::Uuid;

use common::{
    active_integration, bare_resume, user_with_name_and_email, MockAchievementRepo,
    MockIntegrationRepo, MockResumeRepo, MockUserRepo,
};
use resume_ecosystem_backend::entities::achievement::{
    Achievement, AchievementMetadata, AchievementSource, AchievementStatus, AchievementType,
    NewAchievement,
};
use resume_ecosystem_backend::entities::integration::{Platform, WebhookPayload};
use resume_ecosystem_backend::errors::AppError;
use resume_ecosystem_backend::use_cases::integrations::IntegrationHandler;
use sqlx::types::Json;

fn webhook_payload(user_id: Uuid, platform: Platform) -> WebhookPayload {
    WebhookPayload {
        user_id,
        platform,
        achievement_data: NewAchievement {
            achievement_type: AchievementType::Hackathon,
            title: "Global Hack Week".to_string(),
            organization: "MLH".to_string(),
            description: "Won the API track".to_string(),
            start_date: Utc::now(),
            end_date: None,
            skills: vec!["Rust".to_string()],
            certificate_url: String::new(),
            status: AchievementStatus::Unverified,
            source: AchievementSource::Manual,
            metadata: AchievementMetadata::default(),
        },
    }
}

fn created_achievement(user_id: Uuid) -> Achievement {
    Achievement {
        id: Uuid::new_v4(),
        user_id,
        achievement_type: AchievementType::Hackathon,
        title: "Global Hack Week".to_string(),
        organization: "MLH".to_string(),
        description: "Won the API track".to_string(),
        start_date: Utc::now(),
        end_date: None,
        skills: vec!["Rust".to_string()],
        certificate_url: String::new(),
        status: AchievementStatus::Verified,
        source: AchievementSource::Github,
        metadata: Json(AchievementMetadata::default()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn happy_refresh_mocks(
    user_id: Uuid,
) -> (MockAchievementRepo, MockResumeRepo, MockUserRepo) {
    let mut achievement_repo = MockAchievementRepo::new();
    achievement_repo
        .expect_all_for_user()
        .returning(|_| Ok(Vec::new()));

    let mut resume_repo = MockResumeRepo::new();
    resume_repo
        .expect_find_by_user()
        .returning(move |_| Ok(Some(bare_resume(user_id))));
    resume_repo
        .expect_save()
        .returning(|resume| Ok(resume.clone()));

    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_get_user_by_id()
        .returning(move |id| Ok(Some(user_with_name_and_email(*id))));

    (achievement_repo, resume_repo, user_repo)
}

#[tokio::test]
async fn webhook_records_achievement_as_verified_with_platform_source() {
    let user_id = Uuid::new_v4();
    let (mut achievement_repo, resume_repo, user_repo) = happy_refresh_mocks(user_id);

    achievement_repo
        .expect_create()
        .times(1)
        .withf(move |insert| {
            insert.user_id == user_id
                && insert.status == AchievementStatus::Verified
                && insert.source == AchievementSource::Github
        })
        .returning(move |insert| Ok(created_achievement(insert.user_id)));

    let mut integration_repo = MockIntegrationRepo::new();
    integration_repo
        .expect_find_by_user_and_platform()
        .withf(move |id, platform| *id == user_id && *platform == Platform::Github)
        .returning(|id, platform| Ok(Some(active_integration(*id, platform))));
    integration_repo
        .expect_save()
        .times(1)
        .withf(|integration| integration.sync_count == 1 && integration.last_synced.is_some())
        .returning(|integration| Ok(integration.clone()));

    let handler =
        IntegrationHandler::new(integration_repo, achievement_repo, resume_repo, user_repo);

    let achievement = handler
        .handle_webhook(webhook_payload(user_id, Platform::Github))
        .await
        .unwrap();

    assert_eq!(achievement.status, AchievementStatus::Verified);
    assert_eq!(achievement.source, AchievementSource::Github);
}

#[tokio::test]
async fn webhook_counts_every_delivery_without_dedup() {
    let user_id = Uuid::new_v4();
    let (mut achievement_repo, resume_repo, user_repo) = happy_refresh_mocks(user_id);

    achievement_repo
        .expect_create()
        .times(2)
        .returning(move |insert| Ok(created_achievement(insert.user_id)));

    let mut seq = Sequence::new();
    let mut integration_repo = MockIntegrationRepo::new();
    for already_synced in [0, 1] {
        integration_repo
            .expect_find_by_user_and_platform()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |id, platform| {
                let mut integration = active_integration(*id, platform);
                integration.sync_count = already_synced;
                Ok(Some(integration))
            });
        integration_repo
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .withf(move |integration| integration.sync_count == already_synced + 1)
            .returning(|integration| Ok(integration.clone()));
    }

    let handler =
        IntegrationHandler::new(integration_repo, achievement_repo, resume_repo, user_repo);

    handler
        .handle_webhook(webhook_payload(user_id, Platform::Github))
        .await
        .unwrap();
    handler
        .handle_webhook(webhook_payload(user_id, Platform::Github))
        .await
        .unwrap();
}

#[tokio::test]
async fn webhook_rejects_inactive_integration() {
    let user_id = Uuid::new_v4();

    let mut integration_repo = MockIntegrationRepo::new();
    integration_repo
        .expect_find_by_user_and_platform()
        .returning(|id, platform| {
            let mut integration = active_integration(*id, platform);
            integration.is_active = false;
            Ok(Some(integration))
        });

    let handler = IntegrationHandler::new(
        integration_repo,
        MockAchievementRepo::new(),
        MockResumeRepo::new(),
        MockUserRepo::new(),
    );

    let err = handler
        .handle_webhook(webhook_payload(user_id, Platform::Github))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn webhook_rejects_unknown_integration() {
    let user_id = Uuid::new_v4();

    let mut integration_repo = MockIntegrationRepo::new();
    integration_repo
        .expect_find_by_user_and_platform()
        .returning(|_, _| Ok(None));

    let handler = IntegrationHandler::new(
        integration_repo,
        MockAchievementRepo::new(),
        MockResumeRepo::new(),
        MockUserRepo::new(),
    );

    let err = handler
        .handle_webhook(webhook_payload(user_id, Platform::Devpost))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn webhook_succeeds_even_when_resume_refresh_fails() {
    let user_id = Uuid::new_v4();

    let mut achievement_repo = MockAchievementRepo::new();
    achievement_repo
        .expect_create()
        .returning(move |insert| Ok(created_achievement(insert.user_id)));
    achievement_repo
        .expect_all_for_user()
        .returning(|_| Err(AppError::InternalError("connection reset".to_string())));

    let mut integration_repo = MockIntegrationRepo::new();
    integration_repo
        .expect_find_by_user_and_platform()
        .returning(|id, platform| Ok(Some(active_integration(*id, platform))));
    integration_repo
        .expect_save()
        .returning(|integration| Ok(integration.clone()));

    let handler = IntegrationHandler::new(
        integration_repo,
        achievement_repo,
        MockResumeRepo::new(),
        MockUserRepo::new(),
    );

    let achievement = handler
        .handle_webhook(webhook_payload(user_id, Platform::Github))
        .await
        .unwrap();

    assert_eq!(achievement.status, AchievementStatus::Verified);
}
