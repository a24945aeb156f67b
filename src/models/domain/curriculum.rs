use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The knowledge-base document as published for the frontend: one science
/// subject with an advertised topic list and per-topic curriculum content.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct KnowledgeBase {
    pub subjects: Subjects,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Subjects {
    pub science: SubjectArea,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SubjectArea {
    pub topics: Vec<String>,
    pub content: HashMap<String, TopicContent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicContent {
    pub facts: Vec<String>,
    pub vocabulary: Vec<String>,
    pub concepts: Vec<String>,
}

/// Content for one topic, detached from the document for use in prompts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurriculumTopic {
    pub topic: String,
    pub facts: Vec<String>,
    pub vocabulary: Vec<String>,
    pub concepts: Vec<String>,
}

impl KnowledgeBase {
    pub fn topics(&self) -> &[String] {
        &self.subjects.science.topics
    }

    pub fn topic_content(&self, topic: &str) -> Option<CurriculumTopic> {
        self.subjects
            .science
            .content
            .get(topic)
            .map(|content| CurriculumTopic {
                topic: topic.to_string(),
                facts: content.facts.clone(),
                vocabulary: content.vocabulary.clone(),
                concepts: content.concepts.clone(),
            })
    }
}
