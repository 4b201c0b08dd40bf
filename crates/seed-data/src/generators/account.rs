//! Synthetic account generation for the `accounts` table.

use fake::{
    Fake,
    faker::{company::en::CompanyName, internet::en::SafeEmail},
};
use rand::Rng;

/// Generated account data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedAccount {
    pub owner_name: String,
    pub contact_email: String,
}

/// Generates fake account owner/contact pairs.
///
/// Same uniqueness caveat as [`PersonGenerator`](crate::generators::PersonGenerator):
/// nothing beyond the random source keeps contact emails distinct.
#[derive(Debug, Default)]
pub struct AccountGenerator;

impl AccountGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single account.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedAccount {
        GeneratedAccount {
            owner_name: CompanyName().fake_with_rng(rng),
            contact_email: SafeEmail().fake_with_rng(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_account() {
        let account_gen = AccountGenerator::new();
        let mut rng = rand::thread_rng();
        let account = account_gen.generate(&mut rng);

        assert!(!account.owner_name.is_empty());
        assert!(account.contact_email.contains('@'));
    }
}
