//! Person Name Normalization
//!
//! Submitted names arrive in whatever casing the applicant typed. They are
//! stored title-cased, except that Filipino and European surname particles
//! stay lowercase so "dela cruz" does not become "Dela Cruz".
//!
//! The particle exception applies to middle and last names only; a first
//! name spelled like a particle is still title-cased.

/// Surname particles kept lowercase during normalization
pub const NAME_PARTICLES: &[&str] = &[
    "de", "dela", "del", "delos", "van", "von", "der", "da", "di",
];

/// Normalize a first name: every word title-cased
pub fn normalize_given_name(raw: &str) -> String {
    normalize(raw, false)
}

/// Normalize a middle or last name: title-cased, particles lowercase
pub fn normalize_surname(raw: &str) -> String {
    normalize(raw, true)
}

fn normalize(raw: &str, keep_particles: bool) -> String {
    raw.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();

            if keep_particles && NAME_PARTICLES.contains(&lower.as_str()) {
                return lower;
            }

            title_case(&lower)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(lower: &str) -> String {
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
