//! Synthetic person generation for the `users` table.

use fake::{Fake, faker::name::en::Name};
use rand::Rng;

/// Generated person data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedPerson {
    pub name: String,
    pub email: String,
}

/// Configuration for person generation.
#[derive(Debug, Clone)]
pub struct PersonGenConfig {
    /// Email domains to pick from.
    pub domains: Vec<String>,
    /// Upper bound for the numeric suffix appended to email local parts.
    pub suffix_max: u32,
}

impl Default for PersonGenConfig {
    fn default() -> Self {
        Self {
            domains: vec![
                "gmail.com".to_string(),
                "outlook.com".to_string(),
                "yahoo.com".to_string(),
                "proton.me".to_string(),
            ],
            suffix_max: 9999,
        }
    }
}

/// Generates fake name/email pairs.
///
/// Stateless across calls: emails carry a random numeric suffix but there is
/// no uniqueness guarantee beyond what the random source provides. A table
/// with a unique email constraint can reject the occasional collision; that
/// failure surfaces through the normal insert error path.
pub struct PersonGenerator {
    config: PersonGenConfig,
}

impl PersonGenerator {
    /// Creates a generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: PersonGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: PersonGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single person.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedPerson {
        let name: String = Name().fake_with_rng(rng);
        let email = self.generate_email(&name, rng);

        GeneratedPerson { name, email }
    }

    /// Generates an email from a name.
    fn generate_email(&self, name: &str, rng: &mut impl Rng) -> String {
        let normalized: String = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");

        let suffix: u32 = rng.gen_range(1..self.config.suffix_max);
        let domain = &self.config.domains[rng.gen_range(0..self.config.domains.len())];

        format!("{normalized}{suffix}@{domain}")
    }
}

impl Default for PersonGenerator {
    fn default() -> Self {
        Self::new()
    }
}
