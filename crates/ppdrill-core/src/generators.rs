//! Item generators, one per topic.
//!
//! Every generator draws its lexical choices from the injected random source
//! and hands them to a deterministic `*_with` builder. Tests use the builders
//! directly to check exact output for a given draw.

use rand::{Rng, RngCore};

use crate::lexicon::{self, Verb};
use crate::model::{Exercise, Topic};

/// A generator produces one exercise from a random source.
pub type Generator = fn(&mut dyn RngCore) -> Exercise;

const AUX_AGREEMENT: &[Generator] = &[aux_agreement];
const IRREGULAR_PARTICIPLES: &[Generator] = &[participle_fill];
const EVER_NEVER: &[Generator] = &[ever_never];
const ALREADY_YET_JUST: &[Generator] = &[already_yet_just];
const FOR_SINCE: &[Generator] = &[for_since];
const QUESTION_ORDER: &[Generator] = &[question_order];

/// The generator variants registered for `topic`. Never empty.
pub fn generators_for(topic: Topic) -> &'static [Generator] {
    match topic {
        Topic::AuxAgreement => AUX_AGREEMENT,
        Topic::IrregularParticiples => IRREGULAR_PARTICIPLES,
        Topic::EverNever => EVER_NEVER,
        Topic::AlreadyYetJust => ALREADY_YET_JUST,
        Topic::ForSince => FOR_SINCE,
        Topic::QuestionOrder => QUESTION_ORDER,
    }
}

fn options(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Auxiliary agreement
// ---------------------------------------------------------------------------

pub fn aux_agreement(rng: &mut dyn RngCore) -> Exercise {
    let subject = lexicon::random_subject(rng);
    let verb = lexicon::random_verb(rng);
    aux_agreement_with(subject, verb)
}

/// The answer depends only on which subject set `subject` belongs to.
pub fn aux_agreement_with(subject: &str, verb: Verb) -> Exercise {
    let aux = lexicon::auxiliary_for(subject);
    let part = verb.participle;
    Exercise::multiple_choice(
        Topic::AuxAgreement,
        format!("{subject} ___ {part}. (choose the correct auxiliary)"),
        options(&["has", "have"]),
        aux,
        format!("With \"{subject}\" use \"{aux}\" + participle: {subject} {aux} {part}."),
    )
}

// ---------------------------------------------------------------------------
// Irregular participles
// ---------------------------------------------------------------------------

pub fn participle_fill(rng: &mut dyn RngCore) -> Exercise {
    let verb = lexicon::random_verb(rng);
    let subject = lexicon::random_subject(rng);
    participle_fill_with(verb, subject)
}

pub fn participle_fill_with(verb: Verb, subject: &str) -> Exercise {
    let aux = lexicon::auxiliary_for(subject);
    Exercise::fill_in(
        Topic::IrregularParticiples,
        format!(
            "Write the past participle of \"{}\": \"{subject} {aux} ___.\"",
            verb.base
        ),
        verb.participle,
        format!(
            "The past participle (V3) of \"{}\" is \"{}\".",
            verb.base, verb.participle
        ),
    )
}

// ---------------------------------------------------------------------------
// Ever / Never
// ---------------------------------------------------------------------------

pub fn ever_never(rng: &mut dyn RngCore) -> Exercise {
    let subject = lexicon::random_subject(rng);
    let verb = lexicon::random_verb(rng);
    let ever = rng.gen_bool(0.5);
    ever_never_with(subject, verb, ever)
}

/// `ever` picks the designated answer. Questions take "ever", statements
/// take "never", so the frame follows the designation.
pub fn ever_never_with(subject: &str, verb: Verb, ever: bool) -> Exercise {
    let aux = lexicon::auxiliary_for(subject);
    let part = verb.participle;
    let (correct, blank, full) = if ever {
        let aux_cap = lexicon::capitalize(aux);
        let subj = lexicon::subject_in_question(subject);
        (
            "ever",
            format!("{aux_cap} {subj} ___ {part} it?"),
            format!("{aux_cap} {subj} ever {part} it?"),
        )
    } else {
        (
            "never",
            format!("{subject} {aux} ___ {part} it."),
            format!("{subject} {aux} never {part} it."),
        )
    };
    Exercise::multiple_choice(
        Topic::EverNever,
        format!("Choose ever or never: \"{blank}\""),
        options(&["ever", "never"]),
        correct,
        format!(
            "\"ever\" asks about experiences at any time; \"never\" means not at any time. \
             Both go with the Present Perfect, and here the answer is \"{correct}\": {full}"
        ),
    )
}

// ---------------------------------------------------------------------------
// Already / Yet / Just
// ---------------------------------------------------------------------------

/// Sentence pattern for the Already/Yet/Just generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPattern {
    /// Affirmative sentence; `just` selects "just" over "already".
    Affirmative { just: bool },
    /// Question; the answer is always "already".
    Question,
    /// Negative sentence; the answer is always "yet".
    Negative,
}

pub fn already_yet_just(rng: &mut dyn RngCore) -> Exercise {
    let subject = lexicon::random_subject(rng);
    let verb = lexicon::random_verb(rng);
    let pattern = match rng.gen_range(0..3) {
        0 => MarkerPattern::Affirmative {
            just: rng.gen_bool(0.5),
        },
        1 => MarkerPattern::Question,
        _ => MarkerPattern::Negative,
    };
    already_yet_just_with(subject, verb, pattern)
}

pub fn already_yet_just_with(subject: &str, verb: Verb, pattern: MarkerPattern) -> Exercise {
    let aux = lexicon::auxiliary_for(subject);
    match pattern {
        MarkerPattern::Affirmative { just } => Exercise::multiple_choice(
            Topic::AlreadyYetJust,
            format!(
                "Choose already or just: \"{subject} {aux} ___ {} it.\"",
                verb.participle
            ),
            options(&["already", "just"]),
            if just { "just" } else { "already" },
            "\"already\" means before now; \"just\" means a moment ago. \
             Both go before the participle in affirmative sentences.",
        ),
        MarkerPattern::Question => Exercise::multiple_choice(
            Topic::AlreadyYetJust,
            format!(
                "Choose the best option: \"{} {} ___ finished?\"",
                lexicon::capitalize(aux),
                lexicon::subject_in_question(subject)
            ),
            options(&["already", "yet", "just"]),
            "already",
            "\"already\" in a question shows surprise that something is done; \
             \"yet\" would go at the end (...finished yet?).",
        ),
        MarkerPattern::Negative => Exercise::multiple_choice(
            Topic::AlreadyYetJust,
            format!("Choose the best option: \"{subject} {aux}n't finished ___.\""),
            options(&["already", "yet", "just"]),
            "yet",
            "\"yet\" is used in negative sentences and goes at the end: \
             haven't/hasn't finished yet.",
        ),
    }
}

// ---------------------------------------------------------------------------
// For / Since
// ---------------------------------------------------------------------------

/// The time expression closing a For/Since sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePhrase {
    /// A length of time, answered with "for".
    Duration(&'static str),
    /// A starting point, answered with "since".
    StartPoint(&'static str),
}

pub fn for_since(rng: &mut dyn RngCore) -> Exercise {
    let subject = lexicon::random_subject(rng);
    let base = *lexicon::pick(rng, &lexicon::REGULAR_BASES);
    let phrase = if rng.gen_bool(0.5) {
        TimePhrase::Duration(*lexicon::pick(rng, &lexicon::DURATIONS))
    } else {
        TimePhrase::StartPoint(*lexicon::pick(rng, &lexicon::START_POINTS))
    };
    for_since_with(subject, base, phrase)
}

pub fn for_since_with(subject: &str, base: &str, phrase: TimePhrase) -> Exercise {
    let aux = lexicon::auxiliary_for(subject);
    let part = lexicon::regular_participle(base);
    let (correct, time, explanation) = match phrase {
        TimePhrase::Duration(t) => (
            "for",
            t,
            "\"for\" gives a length of time; \"since\" gives the starting point.",
        ),
        TimePhrase::StartPoint(t) => (
            "since",
            t,
            "\"since\" introduces a point in time when the action started.",
        ),
    };
    Exercise::multiple_choice(
        Topic::ForSince,
        format!("Choose for or since: \"{subject} {aux} {part} ___ {time}.\""),
        options(&["for", "since"]),
        correct,
        explanation,
    )
}

// ---------------------------------------------------------------------------
// Question word order
// ---------------------------------------------------------------------------

pub fn question_order(rng: &mut dyn RngCore) -> Exercise {
    let subject = lexicon::random_subject(rng);
    let verb = lexicon::random_verb(rng);
    question_order_with(subject, verb)
}

/// The first option (auxiliary, subject, participle) is always correct.
pub fn question_order_with(subject: &str, verb: Verb) -> Exercise {
    let aux = lexicon::auxiliary_for(subject);
    let aux_cap = lexicon::capitalize(aux);
    let subj = lexicon::subject_in_question(subject);
    let part = verb.participle;
    let choices = vec![
        format!("{aux_cap} {subj} {part}?"),
        format!("{subject} {aux} {part}?"),
        format!("{aux_cap} {part} {subj}?"),
    ];
    let correct = choices[0].clone();
    Exercise::multiple_choice(
        Topic::QuestionOrder,
        format!(
            "Choose the correct word order for the question: {subject} / {aux} / {part}"
        ),
        choices,
        correct,
        "Question = Have/Has + subject + participle.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExerciseKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const GO: Verb = Verb {
        base: "go",
        participle: "gone",
    };

    fn assert_answer_in_options(ex: &Exercise) {
        if ex.kind == ExerciseKind::MultipleChoice {
            assert!(
                ex.options.contains(&ex.answer),
                "answer {:?} not in options {:?}",
                ex.answer,
                ex.options
            );
        } else {
            assert!(ex.options.is_empty());
        }
    }

    #[test]
    fn every_topic_has_a_generator() {
        for topic in Topic::ALL {
            assert!(!generators_for(topic).is_empty());
        }
    }

    #[test]
    fn generators_label_their_own_topic() {
        let mut rng = StdRng::seed_from_u64(1);
        for topic in Topic::ALL {
            for generate in generators_for(topic) {
                for _ in 0..50 {
                    let ex = generate(&mut rng);
                    assert_eq!(ex.topic, topic);
                    assert_answer_in_options(&ex);
                    assert!(!ex.explanation.is_empty());
                }
            }
        }
    }

    #[test]
    fn aux_agreement_follows_subject() {
        for verb in lexicon::IRREGULAR_VERBS {
            assert_eq!(aux_agreement_with("She", verb).answer, "has");
            assert_eq!(aux_agreement_with("They", verb).answer, "have");
        }
    }

    #[test]
    fn aux_agreement_exact_output() {
        let ex = aux_agreement_with("She", GO);
        assert_eq!(ex.prompt, "She ___ gone. (choose the correct auxiliary)");
        assert_eq!(ex.options, vec!["has", "have"]);
        assert_eq!(
            ex.explanation,
            "With \"She\" use \"has\" + participle: She has gone."
        );
    }

    #[test]
    fn participle_fill_expects_lexicon_value() {
        let ex = participle_fill_with(
            Verb {
                base: "write",
                participle: "written",
            },
            "We",
        );
        assert_eq!(ex.kind, ExerciseKind::FillIn);
        assert_eq!(ex.answer, "written");
        assert_eq!(
            ex.prompt,
            "Write the past participle of \"write\": \"We have ___.\""
        );
    }

    #[test]
    fn ever_never_echoes_designated_answer() {
        let ever = ever_never_with("You", GO, true);
        assert_eq!(ever.answer, "ever");
        assert_eq!(ever.prompt, "Choose ever or never: \"Have you ___ gone it?\"");
        assert!(ever.explanation.contains("Have you ever gone it?"));

        let never = ever_never_with("Ana", GO, false);
        assert_eq!(never.answer, "never");
        assert!(never.prompt.contains("Ana has ___ gone it."));
        assert!(never.explanation.contains("\"never\""));
    }

    #[test]
    fn already_yet_just_patterns() {
        let affirm = already_yet_just_with("I", GO, MarkerPattern::Affirmative { just: true });
        assert_eq!(affirm.answer, "just");
        assert_eq!(affirm.options, vec!["already", "just"]);

        let affirm = already_yet_just_with("I", GO, MarkerPattern::Affirmative { just: false });
        assert_eq!(affirm.answer, "already");

        let question = already_yet_just_with("The teacher", GO, MarkerPattern::Question);
        assert_eq!(question.answer, "already");
        assert_eq!(question.options, vec!["already", "yet", "just"]);
        assert!(question.prompt.contains("Has the teacher ___ finished?"));

        let negative = already_yet_just_with("They", GO, MarkerPattern::Negative);
        assert_eq!(negative.answer, "yet");
        assert!(negative.prompt.contains("They haven't finished ___."));
    }

    #[test]
    fn for_since_depends_on_phrase() {
        let dur = for_since_with("He", "live", TimePhrase::Duration("three years"));
        assert_eq!(dur.answer, "for");
        assert_eq!(
            dur.prompt,
            "Choose for or since: \"He has lived ___ three years.\""
        );

        let start = for_since_with("We", "know", TimePhrase::StartPoint("2022"));
        assert_eq!(start.answer, "since");
        assert!(start.prompt.contains("We have known ___ 2022."));
    }

    #[test]
    fn question_order_canonical_first() {
        let ex = question_order_with("My parents", GO);
        assert_eq!(
            ex.options,
            vec![
                "Have my parents gone?",
                "My parents have gone?",
                "Have gone my parents?"
            ]
        );
        assert_eq!(ex.answer, ex.options[0]);

        let ex = question_order_with("I", GO);
        assert_eq!(ex.answer, "Have I gone?");
    }

    #[test]
    fn same_seed_same_exercise() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for topic in Topic::ALL {
            let generate = generators_for(topic)[0];
            assert_eq!(generate(&mut a), generate(&mut b));
        }
    }
}
