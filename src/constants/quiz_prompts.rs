//! Prompt text for quiz generation. Everything the model sees is Afrikaans,
//! pitched at Graad 4. Templates carry `{topic}`, `{difficulty}`,
//! `{difficulty_clause}` and `{question_type}` slots filled in by the
//! composer.

/// Openers sprinkled into the first variation template to push the model
/// toward a different question style per run.
pub const QUESTION_TYPE_OPENERS: [&str; 8] = [
    "Wat is die definisie van",
    "Watter van die volgende is waar oor",
    "Gee n voorbeeld van",
    "Wat gebeur wanneer",
    "Watter eienskap beskryf",
    "Hoekom is",
    "Watter proses",
    "Wat is die verskil tussen",
];

pub const EASY_CLAUSE: &str =
    "Gebruik eenvoudige taal en basiese konsepte. Fokus op definisies en eenvoudige feite.";
pub const MEDIUM_CLAUSE: &str =
    "Gebruik meer detail en verlang begrip van konsepte. Sluit voorbeelde in.";
pub const HARD_CLAUSE: &str =
    "Verlang dieper begrip, verbande tussen konsepte, en toepassing van kennis.";

/// The four interchangeable lead-ins. Each carries the difficulty clause
/// slot; only the first asks for a specific question opener.
pub const VARIATION_TEMPLATES: [&str; 4] = [
    "Skep 5 unieke verrassing-vrae oor {topic} vir Graad 4 leerders in Afrikaans. Moeilikheidsgraad: {difficulty}. {difficulty_clause}Begin party vrae met \"{question_type}\". Maak elke vraag anders en interessant.",
    "Genereer 5 uitdagende {topic} vrae wat Graad 4 kinders sal opgewonde maak! Moeilikheidsgraad: {difficulty}. {difficulty_clause}Gebruik verskillende vraag-style: definisies, voorbeelde, vergelykings, oorsaak-en-gevolg. Wees kreatief!",
    "Maak 5 boeiende vrae oor {topic} wat leerders se nuuskierigheid sal prikkel. Moeilikheidsgraad: {difficulty}. {difficulty_clause}Sluit scenario-gebaseerde vrae in en vra hulle om na te dink oor alledaagse voorbeelde.",
    "Skep 5 interaktiewe {topic} vrae wat leerders sal uitdaag om verder te dink. Moeilikheidsgraad: {difficulty}. {difficulty_clause}Kombineer feite, konsepte en praktiese toepassings. Maak dit pret!",
];

pub const CONTENT_HEADER: &str = "Curriculum inhoud om te gebruik:";
pub const FACTS_LABEL: &str = "Feite: ";
pub const VOCABULARY_LABEL: &str = "Sleutelwoorde: ";
pub const CONCEPTS_LABEL: &str = "Konsepte: ";

pub const FORMAT_CONSTRAINT: &str = "Elke vraag moet presies 4 opsies hê. Die 'correctAnswer' moet 'n presiese string-passing wees met een van die 'options' waardes.";

/// Prefixed to the joined tail of recent question texts when there are any.
pub const EXCLUSION_PREFIX: &str = "VERBELANGRIK: Moenie hierdie vorige vrae herhaal nie: ";

/// How many facts/vocabulary/concepts are sampled into each quiz prompt.
pub const QUIZ_FACT_SAMPLE: usize = 8;
pub const QUIZ_VOCABULARY_SAMPLE: usize = 12;
pub const QUIZ_CONCEPT_SAMPLE: usize = 4;

/// Only the newest slice of history is spelled out in the prompt.
pub const MAX_EXCLUSIONS_IN_PROMPT: usize = 20;
