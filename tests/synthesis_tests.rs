mod common;

use uuid::Uuid;

use common::{
    bare_resume, new_achievement_request, project_achievement, user_with_name_and_email,
    MockAchievementRepo, MockResumeRepo, MockUserRepo,
};
use resume_ecosystem_backend::errors::AppError;
use resume_ecosystem_backend::use_cases::achievements::AchievementHandler;
use resume_ecosystem_backend::use_cases::synthesis::refresh_resume_for_user;

#[tokio::test]
async fn refresh_derives_all_resume_fields_from_achievements() {
    let user_id = Uuid::new_v4();
    let achievement = project_achievement(user_id, &["React"], "Built with React and Docker");
    let achievement_id = achievement.id;

    let mut achievement_repo = MockAchievementRepo::new();
    achievement_repo
        .expect_all_for_user()
        .returning(move |_| Ok(vec![achievement.clone()]));

    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_get_user_by_id()
        .returning(move |id| Ok(Some(user_with_name_and_email(*id))));

    let mut resume_repo = MockResumeRepo::new();
    resume_repo
        .expect_find_by_user()
        .returning(move |id| Ok(Some(bare_resume(*id))));
    resume_repo
        .expect_save()
        .returning(|resume| Ok(resume.clone()));

    let resume = refresh_resume_for_user(&achievement_repo, &resume_repo, &user_repo, &user_id)
        .await
        .unwrap();

    assert_eq!(resume.achievements, vec![achievement_id]);
    assert_eq!(resume.skills, vec!["React", "Docker"]);
    assert_eq!(
        resume.summary,
        "Motivated professional with 1 verified achievements. Built 1 project. \
         Proficient in 2+ technologies including React, Docker."
    );
    // name + email (10) + summary (10) + 2 skills (4) + 1 achievement (10)
    assert_eq!(resume.completeness, 34);
}

#[tokio::test]
async fn refresh_is_idempotent_over_derived_fields() {
    let user_id = Uuid::new_v4();
    let achievement = project_achievement(user_id, &["Rust"], "CLI tooling");

    let mut achievement_repo = MockAchievementRepo::new();
    achievement_repo
        .expect_all_for_user()
        .times(2)
        .returning(move |_| Ok(vec![achievement.clone()]));

    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_get_user_by_id()
        .times(2)
        .returning(move |id| Ok(Some(user_with_name_and_email(*id))));

    let stored = bare_resume(user_id);
    let mut resume_repo = MockResumeRepo::new();
    resume_repo
        .expect_find_by_user()
        .times(2)
        .returning(move |_| Ok(Some(stored.clone())));
    resume_repo
        .expect_save()
        .times(2)
        .returning(|resume| Ok(resume.clone()));

    let first = refresh_resume_for_user(&achievement_repo, &resume_repo, &user_repo, &user_id)
        .await
        .unwrap();
    let second = refresh_resume_for_user(&achievement_repo, &resume_repo, &user_repo, &user_id)
        .await
        .unwrap();

    assert_eq!(first.achievements, second.achievements);
    assert_eq!(first.skills, second.skills);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.completeness, second.completeness);
}

#[tokio::test]
async fn refresh_creates_resume_when_none_exists() {
    let user_id = Uuid::new_v4();

    let mut achievement_repo = MockAchievementRepo::new();
    achievement_repo
        .expect_all_for_user()
        .returning(|_| Ok(Vec::new()));

    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_get_user_by_id()
        .returning(move |id| Ok(Some(user_with_name_and_email(*id))));

    let mut resume_repo = MockResumeRepo::new();
    resume_repo.expect_find_by_user().returning(|_| Ok(None));
    resume_repo
        .expect_create()
        .times(1)
        .withf(move |insert| insert.user_id == user_id)
        .returning(|insert| Ok(bare_resume(insert.user_id)));
    resume_repo
        .expect_save()
        .returning(|resume| Ok(resume.clone()));

    let resume = refresh_resume_for_user(&achievement_repo, &resume_repo, &user_repo, &user_id)
        .await
        .unwrap();

    assert!(resume.achievements.is_empty());
    assert!(resume.skills.is_empty());
    assert_eq!(
        resume.summary,
        "Motivated professional with 0 verified achievements. "
    );
}

#[tokio::test]
async fn achievement_create_fails_when_refresh_fails() {
    let user_id = Uuid::new_v4();

    let mut achievement_repo = MockAchievementRepo::new();
    achievement_repo
        .expect_create()
        .returning(|insert| Ok(project_achievement(insert.user_id, &[], "")));
    achievement_repo
        .expect_all_for_user()
        .returning(|_| Err(AppError::InternalError("connection reset".to_string())));

    let handler = AchievementHandler::new(
        achievement_repo,
        MockResumeRepo::new(),
        MockUserRepo::new(),
    );

    let err = handler
        .create(&user_id, new_achievement_request())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InternalError(_)));
}

#[tokio::test]
async fn achievement_delete_fails_when_resume_save_fails() {
    let user_id = Uuid::new_v4();
    let achievement = project_achievement(user_id, &[], "");
    let achievement_id = achievement.id;

    let mut achievement_repo = MockAchievementRepo::new();
    achievement_repo
        .expect_get()
        .returning(move |_| Ok(Some(achievement.clone())));
    achievement_repo.expect_delete().returning(|_| Ok(()));
    achievement_repo
        .expect_all_for_user()
        .returning(|_| Ok(Vec::new()));

    let mut user_repo = MockUserRepo::new();
    user_repo
        .expect_get_user_by_id()
        .returning(move |id| Ok(Some(user_with_name_and_email(*id))));

    let mut resume_repo = MockResumeRepo::new();
    resume_repo
        .expect_find_by_user()
        .returning(move |id| Ok(Some(bare_resume(*id))));
    resume_repo
        .expect_save()
        .returning(|_| Err(AppError::InternalError("write failed".to_string())));

    let handler = AchievementHandler::new(achievement_repo, resume_repo, user_repo);

    let err = handler.delete(&user_id, &achievement_id).await.unwrap_err();
    assert!(matches!(err, AppError::InternalError(_)));
}

#[tokio::test]
async fn refresh_fails_when_user_is_gone() {
    let user_id = Uuid::new_v4();

    let mut achievement_repo = MockAchievementRepo::new();
    achievement_repo
        .expect_all_for_user()
        .returning(|_| Ok(Vec::new()));

    let mut user_repo = MockUserRepo::new();
    user_repo.expect_get_user_by_id().returning(|_| Ok(None));

    let resume_repo = MockResumeRepo::new();

    let err = refresh_resume_for_user(&achievement_repo, &resume_repo, &user_repo, &user_id)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}
