use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Fixed vocabulary scanned against achievement descriptions.
/// Matching is a case-insensitive substring check; the canonical casing
/// below is what lands in the extracted skill set.
pub const SKILL_VOCABULARY: [&str; 33] = [
    "JavaScript", "Python", "Java", "C++", "React", "Node.js",
    "Express", "MongoDB", "SQL", "PostgreSQL", "AWS", "Docker",
    "Kubernetes", "Git", "HTML", "CSS", "TypeScript", "Vue",
    "Angular", "Django", "Flask", "FastAPI", "Machine Learning",
    "Data Science", "TensorFlow", "PyTorch", "Redux", "Next.js",
    "Tailwind", "Bootstrap", "REST API", "GraphQL", "Firebase",
];
