//! Fixed-vocabulary skill detection and skill-overlap scoring.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of skills reported for one description.
pub const MAX_SKILLS: usize = 10;

/// Vocabulary matched against description words, in reporting order.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "javascript", "typescript", "python", "java", "c++", "c#", "go", "rust", "php", "ruby",
    "swift", "kotlin", "scala", "r", "matlab", "perl", "bash", "powershell", "sql", "html",
    "css", "sass", "less",
    // Frameworks & libraries
    "react", "vue", "angular", "node.js", "express", "django", "flask", "fastapi", "spring",
    "laravel", "rails", "asp.net", "jquery", "bootstrap", "tailwind", "material-ui",
    "ant design", "next.js", "nuxt.js", "gatsby", "svelte", "ember", "backbone", "meteor",
    "strapi", "wordpress", "drupal",
    // Databases
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "dynamodb", "cassandra",
    "sqlite", "oracle", "sql server", "mariadb", "neo4j", "influxdb", "couchdb", "firebase",
    "supabase",
    // Cloud & DevOps
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins", "gitlab",
    "github actions", "circleci", "travis ci", "heroku", "vercel", "netlify", "digitalocean",
    "linode", "vultr", "cloudflare", "nginx", "apache", "load balancer", "microservices",
    // AI & ML
    "machine learning", "deep learning", "neural networks", "tensorflow", "pytorch",
    "scikit-learn", "pandas", "numpy", "matplotlib", "seaborn", "opencv", "nltk", "spacy",
    "hugging face", "transformers", "bert", "gpt", "computer vision", "nlp", "data science",
    "statistics",
    // Tools & platforms
    "git", "svn", "jira", "confluence", "slack", "teams", "zoom", "figma", "sketch", "adobe",
    "postman", "insomnia", "swagger", "graphql", "rest api", "soap", "webpack", "vite",
    "babel", "eslint", "prettier", "jest", "mocha", "cypress", "selenium", "playwright",
    // Methodologies
    "agile", "scrum", "kanban", "waterfall", "devops", "ci/cd", "tdd", "bdd",
    "pair programming", "code review", "git flow", "trunk based development", "feature flags",
    "a/b testing",
    // Other
    "blockchain", "ethereum", "bitcoin", "solidity", "web3", "iot", "arduino", "raspberry pi",
    "mobile development", "ios", "android", "react native", "flutter", "xamarin", "ionic",
    "pwa", "spa", "ssr", "jamstack", "headless cms", "ecommerce", "payment processing",
];

/// ASCII words, allowing dotted names such as `node.js`.
static DOTTED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*").expect("valid regex"));

/// Lowercased words of `text`, dotted names kept whole.
pub fn dotted_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    DOTTED_WORD
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True when `term` contains any word or any word contains `term`.
pub fn matches_any_word(term: &str, words: &[String]) -> bool {
    words
        .iter()
        .any(|word| word.contains(term) || term.contains(word.as_str()))
}

/// Vocabulary terms found in the description, in vocabulary order, at most `MAX_SKILLS`.
///
/// Matching is plain bidirectional substring containment, so short words
/// pull in every vocabulary term that contains them.
pub fn extract_skills(description: &str) -> Vec<String> {
    let words = dotted_words(description);
    let mut skills: Vec<String> = Vec::new();

    for term in SKILL_VOCABULARY {
        if matches_any_word(term, &words) && !skills.iter().any(|s| s.as_str() == *term) {
            skills.push((*term).to_string());
        }
    }

    skills.truncate(MAX_SKILLS);
    skills
}

/// Percentage (0–100) of job skills covered by the user's skills.
///
/// A job skill is covered when it contains, or is contained in, any user skill
/// (case-insensitive). Returns 0 when there are no job skills. User skills are
/// compared as given, so an empty one covers every job skill.
pub fn calculate_job_match(job_skills: &[String], user_skills: &[String]) -> u32 {
    if job_skills.is_empty() {
        return 0;
    }

    let user_lower: Vec<String> = user_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let matching = job_skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|skill| {
            user_lower
                .iter()
                .any(|user| user.contains(skill.as_str()) || skill.contains(user.as_str()))
        })
        .count();

    ((matching as f64 / job_skills.len() as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_requirements_line_yields_react_and_node() {
        let skills = extract_skills("Requirements: 5+ years experience, React, Node.js");
        assert!(skills.contains(&"react".to_string()));
        assert!(skills.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_skills_capped_at_ten() {
        let description = "We use JavaScript, TypeScript, Python, Java, Rust, PHP, Ruby, Swift, \
            Kotlin, Scala, Docker, Kubernetes and Terraform.";
        let skills = extract_skills(description);
        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills[0], "javascript");
    }

    #[test]
    fn test_skills_follow_vocabulary_order() {
        let skills = extract_skills("kubernetes then docker");
        let docker = skills.iter().position(|s| s == "docker").unwrap();
        let kubernetes = skills.iter().position(|s| s == "kubernetes").unwrap();
        assert!(docker < kubernetes);
    }

    #[test]
    fn test_no_words_no_skills() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills("!!! ---").is_empty());
    }

    #[test]
    fn test_dotted_words_keep_dots() {
        assert_eq!(
            dotted_words("Next.js and ASP.NET."),
            owned(&["next.js", "and", "asp.net"])
        );
    }

    #[test]
    fn test_job_match_zero_without_job_skills() {
        assert_eq!(calculate_job_match(&[], &owned(&["rust"])), 0);
    }

    #[test]
    fn test_job_match_full_when_every_skill_matches() {
        let job = owned(&["React", "node.js", "sql"]);
        let user = owned(&["react native", "Node.js", "postgresql"]);
        assert_eq!(calculate_job_match(&job, &user), 100);
    }

    #[test]
    fn test_job_match_rounds_percentage() {
        let job = owned(&["rust", "go", "java"]);
        let user = owned(&["rust"]);
        assert_eq!(calculate_job_match(&job, &user), 33);

        let job = owned(&["rust", "go", "java"]);
        let user = owned(&["rust", "golang"]);
        assert_eq!(calculate_job_match(&job, &user), 67);
    }

    #[test]
    fn test_job_match_without_user_skills() {
        assert_eq!(calculate_job_match(&owned(&["rust"]), &[]), 0);
    }

    #[test]
    fn test_empty_user_skill_covers_everything() {
        let job = owned(&["rust", "kubernetes", "aws"]);
        assert_eq!(calculate_job_match(&job, &owned(&[""])), 100);
        assert_eq!(calculate_job_match(&job, &owned(&[" "])), 0);
    }
}
