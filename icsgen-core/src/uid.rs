//! UID minting.
//!
//! A UID looks like `team-sync-2024-06-01-3f2a9c1b@icsgen`: the summary's
//! slug, the event date, eight random hex digits and a domain.

use chrono::NaiveDate;
use rand::RngCore;
use uuid::Uuid;

/// Longest slug (in characters) kept from the summary.
pub const MAX_SLUG_CHARS: usize = 40;

/// Slug used when the summary has nothing sluggable in it.
const FALLBACK_SLUG: &str = "event";

/// Mint a fresh UID, drawing the random segment from `rng`.
pub fn generate_uid<R: RngCore + ?Sized>(
    rng: &mut R,
    summary: &str,
    date: NaiveDate,
    domain: &str,
) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    let id = uuid::Builder::from_random_bytes(bytes).into_uuid();

    format!(
        "{}-{}-{}@{}",
        summary_slug(summary),
        date.format("%Y-%m-%d"),
        short_id(&id),
        domain
    )
}

/// Lowercase, dash-separated, at most [`MAX_SLUG_CHARS`] characters.
pub fn summary_slug(summary: &str) -> String {
    let slug: String = slug::slugify(summary).chars().take(MAX_SLUG_CHARS).collect();
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

fn short_id(id: &Uuid) -> String {
    id.simple().to_string().chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_uid_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let uid = generate_uid(&mut rng, "Team Sync", date(), "icsgen");

        let (local, domain) = uid.split_once('@').unwrap();
        assert_eq!(domain, "icsgen");
        let random = local
            .strip_prefix("team-sync-2024-06-01-")
            .unwrap_or_else(|| panic!("unexpected UID prefix: {}", uid));
        assert_eq!(random.len(), 8);
        assert!(
            random.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "random segment should be lowercase hex: {}",
            random
        );
    }

    #[test]
    fn test_uid_is_deterministic_for_seeded_rng() {
        let a = generate_uid(&mut StdRng::seed_from_u64(42), "Sync", date(), "icsgen");
        let b = generate_uid(&mut StdRng::seed_from_u64(42), "Sync", date(), "icsgen");
        assert_eq!(a, b);
    }

    #[test]
    fn test_uids_differ_across_draws() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = generate_uid(&mut rng, "Sync", date(), "icsgen");
        let b = generate_uid(&mut rng, "Sync", date(), "icsgen");
        assert_ne!(a, b);
    }

    #[test]
    fn test_summary_slug() {
        assert_eq!(summary_slug("Team Sync"), "team-sync");
        assert_eq!(summary_slug("  Q3 Planning: Budget, Hiring  "), "q3-planning-budget-hiring");
        assert_eq!(summary_slug("snake_case_title"), "snake-case-title");
        assert_eq!(summary_slug("!!!"), "event");
        assert_eq!(summary_slug(""), "event");
    }

    #[test]
    fn test_summary_slug_is_truncated() {
        let slug = summary_slug(&"word ".repeat(30));
        assert!(slug.chars().count() <= MAX_SLUG_CHARS, "{}", slug);
        assert!(!slug.ends_with('-'), "{}", slug);
        assert!(slug.starts_with("word-word"));
    }
}
