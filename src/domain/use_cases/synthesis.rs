use uuid::Uuid;

use crate::entities::achievement::{Achievement, AchievementType};
use crate::entities::resume::{PersonalInfo, Resume, ResumeInsert};
use crate::entities::user::User;
use crate::errors::AppError;
use crate::repositories::achievement::AchievementRepository;
use crate::repositories::resume::ResumeRepository;
use crate::repositories::user::UserRepository;
use crate::use_cases::skills::extract_skills;

/// Builds the resume summary from per-type achievement tallies. The first
/// sentence reports the TOTAL count as "verified achievements" whatever the
/// individual status fields say, and certifications are tallied but never
/// get a sentence of their own; both quirks are kept deliberately.
pub fn generate_summary(achievements: &[Achievement]) -> String {
    let mut hackathons = 0usize;
    let mut courses = 0usize;
    let mut internships = 0usize;
    let mut projects = 0usize;
    let mut certifications = 0usize;

    for achievement in achievements {
        match achievement.achievement_type {
            AchievementType::Hackathon => hackathons += 1,
            AchievementType::Course => courses += 1,
            AchievementType::Internship => internships += 1,
            AchievementType::Project => projects += 1,
            AchievementType::Certification => certifications += 1,
        }
    }
    let _ = certifications;

    let skills = extract_skills(achievements);

    let mut summary = format!(
        "Motivated professional with {} verified achievements. ",
        achievements.len()
    );

    if internships > 0 {
        summary.push_str(&format!(
            "Completed {} internship{}. ",
            internships,
            plural(internships)
        ));
    }

    if hackathons > 0 {
        summary.push_str(&format!(
            "Participated in {} hackathon{}. ",
            hackathons,
            plural(hackathons)
        ));
    }

    if projects > 0 {
        summary.push_str(&format!("Built {} project{}. ", projects, plural(projects)));
    }

    if courses > 0 {
        summary.push_str(&format!(
            "Completed {} course{}. ",
            courses,
            plural(courses)
        ));
    }

    if !skills.is_empty() {
        summary.push_str(&format!(
            "Proficient in {}+ technologies including {}.",
            skills.len(),
            skills[..skills.len().min(3)].join(", ")
        ));
    }

    summary
}

fn plural(n: usize) -> &'static str {
    if n > 1 { "s" } else { "" }
}

/// Additive completeness score, clamped to 100. The portfolio profile field
/// is intentionally not counted.
pub fn calculate_completeness(resume: &Resume, user: &User) -> i32 {
    let mut score = 0i32;

    // Personal info (30 points)
    if !user.name.is_empty() {
        score += 5;
    }
    if !user.email.is_empty() {
        score += 5;
    }
    if !user.phone.is_empty() {
        score += 5;
    }
    if !user.location.is_empty() {
        score += 5;
    }
    if !user.linkedin.is_empty() {
        score += 5;
    }
    if !user.github.is_empty() {
        score += 5;
    }

    // Summary (10 points)
    if resume.summary.len() > 50 {
        score += 10;
    }

    // Skills (20 points)
    if !resume.skills.is_empty() {
        score += (resume.skills.len() as i32 * 2).min(20);
    }

    // Achievements (40 points)
    if !resume.achievements.is_empty() {
        score += (resume.achievements.len() as i32 * 10).min(40);
    }

    score.min(100)
}

/// Re-derives the user's resume from the full current achievement set and
/// persists it. Runs synchronously after every achievement mutation; the
/// read-modify-write sequence is not transactional, so overlapping
/// refreshes race and the last writer wins.
pub async fn refresh_resume_for_user<A, R, U>(
    achievement_repo: &A,
    resume_repo: &R,
    user_repo: &U,
    user_id: &Uuid,
) -> Result<Resume, AppError>
where
    A: AchievementRepository,
    R: ResumeRepository,
    U: UserRepository,
{
    let achievements = achievement_repo.all_for_user(user_id).await?;

    let user = user_repo
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let mut resume = match resume_repo.find_by_user(user_id).await? {
        Some(resume) => resume,
        None => {
            resume_repo
                .create(&ResumeInsert {
                    user_id: *user_id,
                    personal_info: PersonalInfo::default(),
                })
                .await?
        }
    };

    resume.achievements = achievements.iter().map(|a| a.id).collect();
    resume.skills = extract_skills(&achievements);
    resume.summary = generate_summary(&achievements);
    resume.completeness = calculate_completeness(&resume, &user);

    resume_repo.save(&resume).await
}
