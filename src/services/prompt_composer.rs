use rand::Rng;

use crate::constants::flashcard_prompts::{
    BASE_TEMPLATE, EASY_MIX, FLASHCARD_CONCEPT_SAMPLE, FLASHCARD_FACT_SAMPLE,
    FLASHCARD_VOCABULARY_SAMPLE, HARD_MIX, MEDIUM_MIX,
};
use crate::constants::quiz_prompts::{
    CONCEPTS_LABEL, CONTENT_HEADER, EASY_CLAUSE, EXCLUSION_PREFIX, FACTS_LABEL, FORMAT_CONSTRAINT,
    HARD_CLAUSE, MAX_EXCLUSIONS_IN_PROMPT, MEDIUM_CLAUSE, QUESTION_TYPE_OPENERS,
    QUIZ_CONCEPT_SAMPLE, QUIZ_FACT_SAMPLE, QUIZ_VOCABULARY_SAMPLE, VARIATION_TEMPLATES,
    VOCABULARY_LABEL,
};
use crate::models::domain::{CurriculumTopic, Difficulty};
use crate::services::sampler::random_subset;

/// Build one quiz prompt: random variation, random opener, fresh curriculum
/// sample, the recognized difficulty's clause (or none), and the do-not-repeat
/// tail when there is history.
pub fn compose_quiz_prompt(
    topic: &str,
    difficulty: &str,
    curriculum: &CurriculumTopic,
    excluded: &[String],
) -> String {
    let mut rng = rand::thread_rng();
    let variation = rng.gen_range(0..VARIATION_TEMPLATES.len());
    let opener = rng.gen_range(0..QUESTION_TYPE_OPENERS.len());
    quiz_prompt_with_selection(variation, opener, topic, difficulty, curriculum, excluded)
}

/// Deterministic core of `compose_quiz_prompt`, with the variation and opener
/// chosen by the caller. Content sampling is still random.
pub fn quiz_prompt_with_selection(
    variation_index: usize,
    opener_index: usize,
    topic: &str,
    difficulty: &str,
    curriculum: &CurriculumTopic,
    excluded: &[String],
) -> String {
    let facts = random_subset(&curriculum.facts, QUIZ_FACT_SAMPLE);
    let vocabulary = random_subset(&curriculum.vocabulary, QUIZ_VOCABULARY_SAMPLE);
    let concepts = random_subset(&curriculum.concepts, QUIZ_CONCEPT_SAMPLE);

    // Unrecognized difficulty composes without a clause, never fails.
    let clause = difficulty_clause(difficulty)
        .map(|clause| format!("{} ", clause))
        .unwrap_or_default();

    let lead_in = VARIATION_TEMPLATES[variation_index % VARIATION_TEMPLATES.len()]
        .replace("{topic}", topic)
        .replace("{difficulty}", difficulty)
        .replace("{difficulty_clause}", &clause)
        .replace(
            "{question_type}",
            QUESTION_TYPE_OPENERS[opener_index % QUESTION_TYPE_OPENERS.len()],
        );

    let mut prompt = format!(
        "{}\n\n{}\n{}{}\n{}{}\n{}{}\n\n{}",
        lead_in,
        CONTENT_HEADER,
        FACTS_LABEL,
        facts.join("; "),
        VOCABULARY_LABEL,
        vocabulary.join(", "),
        CONCEPTS_LABEL,
        concepts.join("; "),
        FORMAT_CONSTRAINT,
    );

    if !excluded.is_empty() {
        let newest = excluded.len().saturating_sub(MAX_EXCLUSIONS_IN_PROMPT);
        prompt.push_str("\n\n");
        prompt.push_str(EXCLUSION_PREFIX);
        prompt.push_str(&excluded[newest..].join("; "));
    }

    prompt
}

/// Build one flashcard prompt: base template with a fresh curriculum sample,
/// plus the difficulty's card-mix block. No exclusion machinery; history is
/// quiz-only.
pub fn compose_flashcard_prompt(
    topic: &str,
    difficulty: &str,
    curriculum: &CurriculumTopic,
) -> String {
    let facts = random_subset(&curriculum.facts, FLASHCARD_FACT_SAMPLE);
    let vocabulary = random_subset(&curriculum.vocabulary, FLASHCARD_VOCABULARY_SAMPLE);
    let concepts = random_subset(&curriculum.concepts, FLASHCARD_CONCEPT_SAMPLE);

    let base = BASE_TEMPLATE
        .replace("{topic}", topic)
        .replace("{facts}", &facts.join("; "))
        .replace("{vocabulary}", &vocabulary.join(", "))
        .replace("{concepts}", &concepts.join("; "));

    match Difficulty::parse(difficulty) {
        Some(Difficulty::Easy) => format!("{}{}", base, EASY_MIX),
        Some(Difficulty::Medium) => format!("{}{}", base, MEDIUM_MIX),
        Some(Difficulty::Hard) => format!("{}{}", base, HARD_MIX),
        None => base,
    }
}

fn difficulty_clause(difficulty: &str) -> Option<&'static str> {
    Difficulty::parse(difficulty).map(|difficulty| match difficulty {
        Difficulty::Easy => EASY_CLAUSE,
        Difficulty::Medium => MEDIUM_CLAUSE,
        Difficulty::Hard => HARD_CLAUSE,
    })
}
