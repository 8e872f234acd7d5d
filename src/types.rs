//! Semantic discriminant types resolved from raw wire values.
//!
//! The member lists below are provisional. The authoritative sets belong to
//! the content framework that consumes decoded contexts; unknown values
//! always resolve to the "none" variant instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of content a context represents, resolved from `typeInt`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ContextKind {
    #[default]
    None,
    App,
    Chapter,
    Section,
    Level,
    Page,
    Task,
    Challenge,
    Quiz,
    Exercise,
    Lesson,
    Book,
    Game,
    Document,
    Audio,
    Video,
    Course,
    Custom,
}

impl ContextKind {
    /// Every recognized kind, in discriminant order.
    pub const ALL: [ContextKind; 18] = [
        ContextKind::None,
        ContextKind::App,
        ContextKind::Chapter,
        ContextKind::Section,
        ContextKind::Level,
        ContextKind::Page,
        ContextKind::Task,
        ContextKind::Challenge,
        ContextKind::Quiz,
        ContextKind::Exercise,
        ContextKind::Lesson,
        ContextKind::Book,
        ContextKind::Game,
        ContextKind::Document,
        ContextKind::Audio,
        ContextKind::Video,
        ContextKind::Course,
        ContextKind::Custom,
    ];

    /// Look up a raw discriminant. Never fails; unknown codes map to `None`.
    pub fn from_raw(raw: i64) -> Self {
        Self::try_from_raw(raw).unwrap_or(ContextKind::None)
    }

    /// Strict lookup, `None` when the code is not a recognized discriminant.
    pub fn try_from_raw(raw: i64) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn raw(self) -> i64 {
        self as i64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::None => "none",
            ContextKind::App => "app",
            ContextKind::Chapter => "chapter",
            ContextKind::Section => "section",
            ContextKind::Level => "level",
            ContextKind::Page => "page",
            ContextKind::Task => "task",
            ContextKind::Challenge => "challenge",
            ContextKind::Quiz => "quiz",
            ContextKind::Exercise => "exercise",
            ContextKind::Lesson => "lesson",
            ContextKind::Book => "book",
            ContextKind::Game => "game",
            ContextKind::Document => "document",
            ContextKind::Audio => "audio",
            ContextKind::Video => "video",
            ContextKind::Course => "course",
            ContextKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject-area tag resolved from `topicString`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextTopic {
    Math,
    Science,
    LiteracyAndWriting,
    WorldLanguage,
    SocialScience,
    ComputerScienceAndEngineering,
    ArtsAndMusic,
    HealthAndFitness,
}

impl ContextTopic {
    pub const ALL: [ContextTopic; 8] = [
        ContextTopic::Math,
        ContextTopic::Science,
        ContextTopic::LiteracyAndWriting,
        ContextTopic::WorldLanguage,
        ContextTopic::SocialScience,
        ContextTopic::ComputerScienceAndEngineering,
        ContextTopic::ArtsAndMusic,
        ContextTopic::HealthAndFitness,
    ];

    /// Look up a raw topic string. Absent and unrecognized input both yield `None`.
    pub fn from_raw(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        Self::ALL.into_iter().find(|topic| topic.as_str() == raw)
    }

    /// Wire value of this topic.
    pub fn as_str(self) -> &'static str {
        match self {
            ContextTopic::Math => "math",
            ContextTopic::Science => "science",
            ContextTopic::LiteracyAndWriting => "literacyAndWriting",
            ContextTopic::WorldLanguage => "worldLanguage",
            ContextTopic::SocialScience => "socialScience",
            ContextTopic::ComputerScienceAndEngineering => "computerScienceAndEngineering",
            ContextTopic::ArtsAndMusic => "artsAndMusic",
            ContextTopic::HealthAndFitness => "healthAndFitness",
        }
    }
}

impl fmt::Display for ContextTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
