//! The quick-reference lesson shown before practice.

use crate::lexicon::IRREGULAR_VERBS;

const INTRO: &str = "\
# Present Perfect

Structure: have/has + past participle (V3)
  - I / you / we / they + have + V3  ->  I have finished.
  - he / she / it + has + V3         ->  She has finished.

Main uses:
  1. Life experiences, without saying when: ever / never
     Have you ever eaten sushi?  /  I have never been to London.
  2. Recent results that matter now: just / already / yet
     I have just finished my homework.  (just = a moment ago)
     She has already eaten.             (already = before now)
     Have you finished yet?  /  I haven't finished yet.
  3. Unfinished time: for (a length of time) / since (a starting point)
     I have lived here for three years.
     He has worked here since 2022.
  4. Questions and negatives
     Question: Have/Has + subject + V3?   ->  Have they arrived?
     Negative: haven't/hasn't + V3        ->  She hasn't finished.

Regular participles add -ed: work -> worked, live -> lived, study -> studied.
";

const KEY_RULE: &str = "\
Key rule: if you say when it happened (yesterday, in 2023, last week), use the
Past Simple. If the experience or present result matters and you do not say
when, use the Present Perfect.
";

/// Render the full lesson, including the irregular participle table.
pub fn lesson_text() -> String {
    let mut text = String::from(INTRO);
    text.push_str("\nIrregular participles (V3):\n");
    for pair in IRREGULAR_VERBS.chunks(4) {
        let line: Vec<String> = pair
            .iter()
            .map(|v| format!("{:<18}", format!("{} - {}", v.base, v.participle)))
            .collect();
        text.push_str("  ");
        text.push_str(line.join("").trim_end());
        text.push('\n');
    }
    text.push('\n');
    text.push_str(KEY_RULE);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_lists_every_irregular_verb() {
        let text = lesson_text();
        for v in IRREGULAR_VERBS {
            assert!(
                text.contains(&format!("{} - {}", v.base, v.participle)),
                "missing {}",
                v.base
            );
        }
        assert!(text.contains("Past Simple"));
    }
}
