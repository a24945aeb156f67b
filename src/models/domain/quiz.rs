use serde::{Deserialize, Serialize};

/// One multiple-choice question as the generation service produces it and as
/// the frontend consumes it. `correct_answer` is trusted to be an exact match
/// for one of `options`; scoring compares strings and never repairs a
/// mismatch, so a question the model got wrong stays wrong all the way down.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}
