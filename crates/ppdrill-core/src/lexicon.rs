//! Static word tables and sampling helpers.
//!
//! Everything here is read-only. Sampling is uniform with replacement.

use rand::{Rng, RngCore};

/// A base verb and its irregular past participle (V3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verb {
    pub base: &'static str,
    pub participle: &'static str,
}

const fn verb(base: &'static str, participle: &'static str) -> Verb {
    Verb { base, participle }
}

/// The irregular verbs every generator draws from.
pub const IRREGULAR_VERBS: [Verb; 19] = [
    verb("be", "been"),
    verb("go", "gone"),
    verb("do", "done"),
    verb("eat", "eaten"),
    verb("make", "made"),
    verb("take", "taken"),
    verb("see", "seen"),
    verb("write", "written"),
    verb("have", "had"),
    verb("say", "said"),
    verb("know", "known"),
    verb("give", "given"),
    verb("come", "come"),
    verb("become", "become"),
    verb("buy", "bought"),
    verb("think", "thought"),
    verb("tell", "told"),
    verb("leave", "left"),
    verb("feel", "felt"),
];

/// Subjects that take "has".
pub const SINGULAR_SUBJECTS: [&str; 6] = ["He", "She", "It", "My friend", "The teacher", "Ana"];

/// Subjects that take "have".
pub const PLURAL_SUBJECTS: [&str; 6] = ["I", "You", "We", "They", "My parents", "The students"];

/// Bases used by the For/Since generator.
pub const REGULAR_BASES: [&str; 5] = ["live", "work", "study", "play", "know"];

/// Phrases that express a length of time (take "for").
pub const DURATIONS: [&str; 4] = ["three years", "a long time", "two weeks", "ten minutes"];

/// Phrases that name a starting point (take "since").
pub const START_POINTS: [&str; 4] = ["2022", "last Monday", "January", "8 o'clock"];

/// Whether `subject` belongs to the singular set.
pub fn is_singular(subject: &str) -> bool {
    SINGULAR_SUBJECTS.contains(&subject)
}

/// The auxiliary that agrees with `subject`.
pub fn auxiliary_for(subject: &str) -> &'static str {
    if is_singular(subject) {
        "has"
    } else {
        "have"
    }
}

/// Look up the irregular participle of `base`.
pub fn participle_of(base: &str) -> Option<&'static str> {
    IRREGULAR_VERBS
        .iter()
        .find(|v| v.base == base)
        .map(|v| v.participle)
}

/// Build the participle of a verb from [`REGULAR_BASES`] with the `-ed`
/// suffix rule. Bases in the irregular table ("know") use their table entry.
pub fn regular_participle(base: &str) -> String {
    if let Some(participle) = participle_of(base) {
        return participle.to_string();
    }
    if base.ends_with('e') {
        return format!("{base}d");
    }
    if let Some(stem) = base.strip_suffix('y') {
        let before_y = stem.chars().last();
        if before_y.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ied");
        }
    }
    format!("{base}ed")
}

/// Lowercase a subject for use after an auxiliary, leaving "I" alone.
pub fn subject_in_question(subject: &str) -> String {
    if subject == "I" {
        subject.to_string()
    } else {
        subject.to_lowercase()
    }
}

/// Uppercase the first character of `s`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pick one element uniformly. The tables passed in are never empty.
pub fn pick<'a, T>(rng: &mut dyn RngCore, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

pub fn random_verb(rng: &mut dyn RngCore) -> Verb {
    *pick(rng, &IRREGULAR_VERBS)
}

/// Draw from the concatenation of the singular and plural subject sets.
pub fn random_subject(rng: &mut dyn RngCore) -> &'static str {
    let idx = rng.gen_range(0..SINGULAR_SUBJECTS.len() + PLURAL_SUBJECTS.len());
    if idx < SINGULAR_SUBJECTS.len() {
        SINGULAR_SUBJECTS[idx]
    } else {
        PLURAL_SUBJECTS[idx - SINGULAR_SUBJECTS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn subject_sets_are_disjoint() {
        for s in SINGULAR_SUBJECTS {
            assert!(!PLURAL_SUBJECTS.contains(&s), "{s} is in both sets");
        }
    }

    #[test]
    fn auxiliary_agreement() {
        assert_eq!(auxiliary_for("She"), "has");
        assert_eq!(auxiliary_for("The teacher"), "has");
        assert_eq!(auxiliary_for("They"), "have");
        assert_eq!(auxiliary_for("I"), "have");
    }

    #[test]
    fn irregular_lookup() {
        assert_eq!(IRREGULAR_VERBS.len(), 19);
        assert_eq!(participle_of("go"), Some("gone"));
        assert_eq!(participle_of("become"), Some("become"));
        assert_eq!(participle_of("walk"), None);
    }

    #[test]
    fn regular_suffix_rule() {
        assert_eq!(regular_participle("work"), "worked");
        assert_eq!(regular_participle("live"), "lived");
        assert_eq!(regular_participle("study"), "studied");
        assert_eq!(regular_participle("play"), "played");
        assert_eq!(regular_participle("know"), "known");
        assert_eq!(regular_participle("go"), "gone");
    }

    #[test]
    fn question_casing() {
        assert_eq!(subject_in_question("I"), "I");
        assert_eq!(subject_in_question("My friend"), "my friend");
        assert_eq!(capitalize("have"), "Have");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn subject_sampling_covers_both_sets() {
        let mut rng = StdRng::seed_from_u64(7);
        let drawn: Vec<&str> = (0..500).map(|_| random_subject(&mut rng)).collect();
        assert!(drawn.iter().any(|s| is_singular(s)));
        assert!(drawn.iter().any(|s| !is_singular(s)));
        assert!(drawn
            .iter()
            .all(|s| SINGULAR_SUBJECTS.contains(s) || PLURAL_SUBJECTS.contains(s)));
    }
}
