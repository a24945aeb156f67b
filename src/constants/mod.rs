pub mod flashcard_prompts;
pub mod quiz_prompts;

/// The one sentence a learner sees when quiz generation fails, whatever
/// actually went wrong underneath.
pub const QUIZ_GENERATION_FAILED_MESSAGE: &str =
    "Kon nie die vrae genereer nie. Probeer asseblief weer.";

/// Flashcard counterpart.
pub const FLASHCARD_GENERATION_FAILED_MESSAGE: &str =
    "Kon nie flitskaarte genereer nie. Probeer asseblief weer.";
