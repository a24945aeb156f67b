use serde::{Deserialize, Serialize};

/// One two-sided study card. The id is assigned at generation time as
/// `{topic}-{difficulty}-{position}` with the request's raw difficulty
/// string, so it is only unique within its own batch.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashcardItem {
    pub id: String,
    pub front: String,
    pub back: String,
    pub topic: String,
    pub difficulty: String,
}

impl FlashcardItem {
    pub fn batch_id(topic: &str, difficulty: &str, position: usize) -> String {
        format!("{}-{}-{}", topic, difficulty, position)
    }
}
