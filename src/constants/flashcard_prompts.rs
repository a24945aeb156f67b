//! Prompt text for flashcard generation. One base template plus a
//! per-difficulty card-mix block; an unrecognized difficulty gets the base
//! prompt alone and the model decides the count.

pub const BASE_TEMPLATE: &str = "Skep flitskaarte in Afrikaans vir Graad 4 leerders oor {topic}. Gebruik hierdie kurrikulum inhoud:\n\nFeite: {facts}\nWoordeskaat: {vocabulary}\nKonsepte: {concepts}";

pub const EASY_MIX: &str = "\n\nSkep 8 eenvoudige flitskaarte:\n- 5 woordeskat kaarte: \"Wat beteken [woord]?\" met duidelike, eenvoudige antwoorde\n- 3 basiese definisie kaarte met maklike konsepte\nHou antwoorde kort en eenvoudig.";

pub const MEDIUM_MIX: &str = "\n\nSkep 10 gemiddelde flitskaarte:\n- 3 woordeskat kaarte met meer detail\n- 4 konsep kaarte wat begrip toets\n- 3 voorbeeld kaarte: \"Gee 'n voorbeeld van...\"\nSluit praktiese voorbeelde in.";

pub const HARD_MIX: &str = "\n\nSkep 12 uitdagende flitskaarte:\n- 2 gevorderde woordeskat\n- 5 diep konsep vrae wat kritiese denke verlang\n- 3 vergelyking kaarte: \"Wat is die verskil tussen...\"\n- 2 toepassing kaarte: \"Hoekom gebeur dit...\"\nVerlang dieper begrip en analise.";

/// How many facts/vocabulary/concepts are sampled into each flashcard prompt.
pub const FLASHCARD_FACT_SAMPLE: usize = 10;
pub const FLASHCARD_VOCABULARY_SAMPLE: usize = 8;
pub const FLASHCARD_CONCEPT_SAMPLE: usize = 4;
