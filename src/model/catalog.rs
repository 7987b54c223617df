use crossterm::style::Color;
use std::collections::HashMap;

/// Markup glyphs.
pub mod glyphs {
    pub const NEW: &str = "\u{2728}";
    pub const WORK: &str = "\u{1F528}";
    pub const TEST: &str = "\u{1F9EA}";
    pub const DONE: &str = "\u{1F3C1}";
    pub const CLOSED: &str = "\u{1F947}";
    pub const PAUSED: &str = "\u{1F40C}";
    pub const REVIEW: &str = "\u{1F441}";
    /// Prefix of a blocker line.
    pub const BLOCK: &str = "\u{1F6A7}";
    /// Prefix of an external blocker line.
    pub const DAMN: &str = "\u{1F92C}";

    pub const BLOCKER: &str = "\u{26D4}";
    pub const CRITICAL: &str = "\u{1F525}";
    pub const HIGH: &str = "\u{2757}";
    pub const NORMAL: &str = "\u{1F53D}";
    pub const LOW: &str = "\u{23EC}";
}

/// Canonical lifecycle stage, ordered by its counter slot.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Stage {
    New,
    InProgress,
    Testing,
    Done,
    Closed,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::New,
        Stage::InProgress,
        Stage::Testing,
        Stage::Done,
        Stage::Closed,
    ];

    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn is_active(self) -> bool {
        matches!(self, Stage::New | Stage::InProgress | Stage::Testing)
    }

    /// Testing is active but its points are not counted as active effort.
    pub fn counts_active_points(self) -> bool {
        matches!(self, Stage::New | Stage::InProgress)
    }

    pub fn alias(self) -> StatusAlias {
        match self {
            Stage::New => StatusAlias::New,
            Stage::InProgress => StatusAlias::Work,
            Stage::Testing => StatusAlias::Test,
            Stage::Done => StatusAlias::Done,
            Stage::Closed => StatusAlias::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum StatusAlias {
    New,
    Work,
    Test,
    Done,
    Paused,
    Review,
    Closed,
}

impl StatusAlias {
    pub fn glyph(self) -> &'static str {
        match self {
            StatusAlias::New => glyphs::NEW,
            StatusAlias::Work => glyphs::WORK,
            StatusAlias::Test => glyphs::TEST,
            StatusAlias::Done => glyphs::DONE,
            StatusAlias::Paused => glyphs::PAUSED,
            StatusAlias::Review => glyphs::REVIEW,
            StatusAlias::Closed => glyphs::CLOSED,
        }
    }

    /// Whether a blocker with this alias is worth a markup blocker line.
    pub fn is_open_work(self) -> bool {
        matches!(self, StatusAlias::New | StatusAlias::Work | StatusAlias::Test)
    }
}

#[derive(Debug, Clone)]
struct StatusEntry {
    stage: Option<Stage>,
    alias: StatusAlias,
    color: Option<Color>,
}

/// Lookup tables for status and priority display names.
///
/// Names are matched exactly. Anything not registered is simply unknown:
/// no slot, not active, no color, empty glyph.
#[derive(Debug, Clone)]
pub struct Catalog {
    statuses: HashMap<String, StatusEntry>,
    priorities: HashMap<String, &'static str>,
}

// Create
impl Catalog {
    pub fn empty() -> Self {
        Self {
            statuses: HashMap::new(),
            priorities: HashMap::new(),
        }
    }

    pub fn with_status(
        mut self,
        name: impl ToString,
        stage: Option<Stage>,
        alias: StatusAlias,
        color: Option<Color>,
    ) -> Self {
        let entry = StatusEntry {
            stage,
            alias,
            color,
        };
        self.statuses.insert(name.to_string(), entry);
        self
    }

    pub fn with_priority(mut self, name: impl ToString, glyph: &'static str) -> Self {
        self.priorities.insert(name.to_string(), glyph);
        self
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
            .with_status("Новая", Some(Stage::New), StatusAlias::New, Some(Color::Green))
            .with_status(
                "В Работе",
                Some(Stage::InProgress),
                StatusAlias::Work,
                Some(Color::Yellow),
            )
            .with_status(
                "Тестирование",
                Some(Stage::Testing),
                StatusAlias::Test,
                Some(Color::Magenta),
            )
            .with_status("Сделана", Some(Stage::Done), StatusAlias::Done, Some(Color::Blue))
            .with_status("Закрыта", Some(Stage::Closed), StatusAlias::Closed, Some(Color::Red))
            .with_status("Ожидание", None, StatusAlias::Paused, None)
            .with_status("In Review", None, StatusAlias::Review, None)
            .with_priority("Блокирующий", glyphs::BLOCKER)
            .with_priority("Критический", glyphs::CRITICAL)
            .with_priority("Высокий", glyphs::HIGH)
            .with_priority("Обычный", glyphs::NORMAL)
            .with_priority("Не критичный", glyphs::NORMAL)
            .with_priority("Влияющий", glyphs::LOW)
            .with_priority("Низкий", glyphs::LOW)
    }
}

// Lookup
impl Catalog {
    pub fn stage(&self, status: &str) -> Option<Stage> {
        self.statuses.get(status).and_then(|entry| entry.stage)
    }

    pub fn is_active(&self, status: &str) -> bool {
        self.stage(status).is_some_and(Stage::is_active)
    }

    pub fn alias(&self, status: &str) -> Option<StatusAlias> {
        self.statuses.get(status).map(|entry| entry.alias)
    }

    pub fn color(&self, status: &str) -> Option<Color> {
        self.statuses.get(status).and_then(|entry| entry.color)
    }

    pub fn stage_color(&self, stage: Stage) -> Option<Color> {
        self.statuses
            .values()
            .find(|entry| entry.stage == Some(stage))
            .and_then(|entry| entry.color)
    }

    pub fn status_glyph(&self, status: &str) -> &'static str {
        self.alias(status).map(StatusAlias::glyph).unwrap_or("")
    }

    pub fn priority_glyph(&self, priority: &str) -> &'static str {
        self.priorities.get(priority).copied().unwrap_or("")
    }
}
