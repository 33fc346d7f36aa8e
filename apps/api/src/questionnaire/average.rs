use std::collections::BTreeMap;

/// Raw questionnaire answers keyed by question id.
pub type Answers = BTreeMap<String, u8>;

const LIKERT_MIN: u8 = 1;
const LIKERT_MAX: u8 = 5;

/// Mean of the answered items in `question_ids`, with items listed in
/// `reversed_ids` inverted as `6 - value` first.
///
/// Unanswered ids are skipped rather than counted as zero, and so are values
/// outside 1–5. Returns exactly 0.0 when nothing in the set was answered.
/// Because every valid answer is at least 1, callers can read 0.0 as
/// "no data" and never confuse it with a genuinely low score.
pub fn average(answers: &Answers, question_ids: &[&str], reversed_ids: &[&str]) -> f64 {
    let values: Vec<f64> = question_ids
        .iter()
        .filter_map(|id| {
            let value = *answers.get(*id)?;
            if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
                return None;
            }
            let value = if reversed_ids.contains(id) {
                LIKERT_MAX + LIKERT_MIN - value
            } else {
                value
            };
            Some(f64::from(value))
        })
        .collect();

    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, u8)]) -> Answers {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_reverse_scored_item() {
        assert_eq!(average(&answers(&[("q1", 5)]), &["q1"], &["q1"]), 1.0);
    }

    #[test]
    fn test_no_answers_is_zero() {
        assert_eq!(average(&Answers::new(), &["q1", "q2"], &[]), 0.0);
    }

    #[test]
    fn test_unanswered_ids_are_skipped() {
        let a = answers(&[("q1", 4), ("q3", 2)]);
        assert_eq!(average(&a, &["q1", "q2", "q3"], &[]), 3.0);
    }

    #[test]
    fn test_mixed_reversed_and_plain() {
        // 5, 6-2=4, 3
        let a = answers(&[("q1", 5), ("q2", 2), ("q3", 3)]);
        assert_eq!(average(&a, &["q1", "q2", "q3"], &["q2"]), 4.0);
    }

    #[test]
    fn test_answers_outside_set_are_ignored() {
        let a = answers(&[("q1", 2), ("other", 5)]);
        assert_eq!(average(&a, &["q1"], &[]), 2.0);
    }

    #[test]
    fn test_out_of_range_values_count_as_unanswered() {
        let a = answers(&[("q1", 0), ("q2", 9)]);
        assert_eq!(average(&a, &["q1", "q2"], &[]), 0.0);
    }

    #[test]
    fn test_lowest_genuine_score_is_one() {
        let a = answers(&[("q1", 1), ("q2", 5)]);
        assert_eq!(average(&a, &["q1", "q2"], &["q2"]), 1.0);
    }
}
