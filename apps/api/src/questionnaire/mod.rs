// Questionnaire scoring: reduces raw Likert answers (1–5, some items
// reverse-scored) into the per-axis score maps stored on profiles.

pub mod average;
pub mod bank;
pub mod handlers;

use serde::Serialize;

use crate::models::profile::ScoreMap;
use crate::questionnaire::average::{average, Answers};
use crate::questionnaire::bank::{QuestionSet, COMPETENCY_QUESTIONS, CULTURE_QUESTIONS};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuestionnaireScores {
    pub competency_scores: ScoreMap,
    pub culture_scores: ScoreMap,
}

pub fn score_competencies(answers: &Answers) -> ScoreMap {
    score_sets(COMPETENCY_QUESTIONS, answers)
}

pub fn score_culture(answers: &Answers) -> ScoreMap {
    score_sets(CULTURE_QUESTIONS, answers)
}

pub fn score_questionnaire(answers: &Answers) -> QuestionnaireScores {
    QuestionnaireScores {
        competency_scores: score_competencies(answers),
        culture_scores: score_culture(answers),
    }
}

/// Sets with no answered item are left out of the map (average 0.0 means
/// "no data"), so the scorers fall back to the neutral midpoint for them.
fn score_sets(sets: &[QuestionSet], answers: &Answers) -> ScoreMap {
    sets.iter()
        .filter_map(|set| {
            let score = average(answers, set.question_ids, set.reversed_ids);
            (score > 0.0).then(|| (set.code.to_string(), score))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, u8)]) -> Answers {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_unanswered_sets_are_omitted() {
        let scores = score_competencies(&answers(&[("communication_1", 4)]));
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get("communication"), Some(&4.0));
    }

    #[test]
    fn test_reverse_items_are_applied_per_set() {
        // communication_3 is reverse-scored: 6 - 1 = 5
        let scores = score_competencies(&answers(&[
            ("communication_1", 5),
            ("communication_3", 1),
        ]));
        assert_eq!(scores.get("communication"), Some(&5.0));
    }

    #[test]
    fn test_culture_and_competency_are_separate() {
        let scores = score_questionnaire(&answers(&[
            ("culture_relation_1", 2),
            ("creativity_1", 3),
        ]));
        assert_eq!(scores.culture_scores.get("relation"), Some(&2.0));
        assert_eq!(scores.competency_scores.get("creativity"), Some(&3.0));
        assert!(!scores.culture_scores.contains_key("creativity"));
    }

    #[test]
    fn test_empty_answers_give_empty_maps() {
        let scores = score_questionnaire(&Answers::new());
        assert!(scores.competency_scores.is_empty());
        assert!(scores.culture_scores.is_empty());
    }
}
