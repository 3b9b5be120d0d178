use std::collections::HashSet;

use crate::constants::SKILL_VOCABULARY;
use crate::entities::achievement::Achievement;

/// Derives the deduplicated skill set for a collection of achievements:
/// explicit skill tags, metadata tech-stack entries, and fixed-vocabulary
/// labels matched case-insensitively against the description. Dedup is
/// case-sensitive on the verbatim labels; output is first-seen order.
pub fn extract_skills(achievements: &[Achievement]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut skills: Vec<String> = Vec::new();

    for achievement in achievements {
        for skill in &achievement.skills {
            push_unique(&mut skills, &mut seen, skill);
        }

        // Structural check only: any achievement carrying a tech stack
        // contributes it, not just projects.
        if let Some(tech_stack) = &achievement.metadata.tech_stack {
            for tech in tech_stack {
                push_unique(&mut skills, &mut seen, tech);
            }
        }

        if !achievement.description.is_empty() {
            let description = achievement.description.to_lowercase();
            for label in SKILL_VOCABULARY {
                if description.contains(&label.to_lowercase()) {
                    push_unique(&mut skills, &mut seen, label);
                }
            }
        }
    }

    skills
}

fn push_unique(skills: &mut Vec<String>, seen: &mut HashSet<String>, label: &str) {
    if seen.insert(label.to_string()) {
        skills.push(label.to_string());
    }
}
