//! Static question bank: which questionnaire items feed which axis, and which
//! of them are phrased negatively (reverse-scored).

#[derive(Debug, Clone, Copy)]
pub struct QuestionSet {
    /// Competency or culture-dimension code the set produces a score for.
    pub code: &'static str,
    pub question_ids: &'static [&'static str],
    pub reversed_ids: &'static [&'static str],
}

pub const COMPETENCY_QUESTIONS: &[QuestionSet] = &[
    QuestionSet {
        code: "communication",
        question_ids: &[
            "communication_1",
            "communication_2",
            "communication_3",
            "communication_4",
            "communication_5",
        ],
        reversed_ids: &["communication_3"],
    },
    QuestionSet {
        code: "analytical_thinking",
        question_ids: &[
            "analytical_1",
            "analytical_2",
            "analytical_3",
            "analytical_4",
            "analytical_5",
        ],
        reversed_ids: &["analytical_4"],
    },
    QuestionSet {
        code: "creativity",
        question_ids: &[
            "creativity_1",
            "creativity_2",
            "creativity_3",
            "creativity_4",
            "creativity_5",
        ],
        reversed_ids: &["creativity_2", "creativity_5"],
    },
    QuestionSet {
        code: "determination",
        question_ids: &[
            "determination_1",
            "determination_2",
            "determination_3",
            "determination_4",
            "determination_5",
        ],
        reversed_ids: &["determination_3"],
    },
    QuestionSet {
        code: "adaptability",
        question_ids: &[
            "adaptability_1",
            "adaptability_2",
            "adaptability_3",
            "adaptability_4",
            "adaptability_5",
        ],
        reversed_ids: &["adaptability_2"],
    },
];

pub const CULTURE_QUESTIONS: &[QuestionSet] = &[
    QuestionSet {
        code: "relation",
        question_ids: &[
            "culture_relation_1",
            "culture_relation_2",
            "culture_relation_3",
            "culture_relation_4",
        ],
        reversed_ids: &["culture_relation_4"],
    },
    QuestionSet {
        code: "flexibility",
        question_ids: &[
            "culture_flexibility_1",
            "culture_flexibility_2",
            "culture_flexibility_3",
            "culture_flexibility_4",
        ],
        reversed_ids: &["culture_flexibility_3"],
    },
    QuestionSet {
        code: "results",
        question_ids: &[
            "culture_results_1",
            "culture_results_2",
            "culture_results_3",
            "culture_results_4",
        ],
        reversed_ids: &[],
    },
    QuestionSet {
        code: "stability",
        question_ids: &[
            "culture_stability_1",
            "culture_stability_2",
            "culture_stability_3",
            "culture_stability_4",
        ],
        reversed_ids: &["culture_stability_2"],
    },
    QuestionSet {
        code: "autonomy",
        question_ids: &[
            "culture_autonomy_1",
            "culture_autonomy_2",
            "culture_autonomy_3",
            "culture_autonomy_4",
        ],
        reversed_ids: &["culture_autonomy_4"],
    },
    QuestionSet {
        code: "work_life_balance",
        question_ids: &[
            "culture_balance_1",
            "culture_balance_2",
            "culture_balance_3",
            "culture_balance_4",
        ],
        reversed_ids: &["culture_balance_3"],
    },
];
