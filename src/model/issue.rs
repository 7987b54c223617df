#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum LinkDirection {
    BlockedBy,
    Blocks,
}

/// One side of a dependency link, as seen from the issue that owns it.
///
/// `status` is whatever Jira reported for the other issue at fetch time.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct LinkFact {
    pub direction: LinkDirection,
    pub key: String,
    pub status: String,
    pub label: String,
}

impl LinkFact {
    pub fn blocked_by(key: impl ToString, status: impl ToString, label: impl ToString) -> Self {
        Self::new(LinkDirection::BlockedBy, key, status, label)
    }

    pub fn blocks(key: impl ToString, status: impl ToString, label: impl ToString) -> Self {
        Self::new(LinkDirection::Blocks, key, status, label)
    }

    fn new(
        direction: LinkDirection,
        key: impl ToString,
        status: impl ToString,
        label: impl ToString,
    ) -> Self {
        Self {
            direction,
            key: key.to_string(),
            status: status.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssueSnapshot {
    pub key: String,
    pub assignee: String,
    pub status: String,
    pub priority: String,
    pub points: Option<f64>,
    pub links: Vec<LinkFact>,
}

// Create
impl IssueSnapshot {
    pub fn new(key: impl ToString, assignee: impl ToString, status: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            assignee: assignee.to_string(),
            status: status.to_string(),
            priority: String::new(),
            points: None,
            links: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: impl ToString) -> Self {
        self.priority = priority.to_string();
        self
    }

    pub fn with_points(mut self, points: f64) -> Self {
        self.points = Some(points);
        self
    }

    pub fn with_link(mut self, link: LinkFact) -> Self {
        self.links.push(link);
        self
    }
}

impl IssueSnapshot {
    /// Effort points rounded half away from zero, as counted and displayed.
    pub fn rounded_points(&self) -> Option<i64> {
        self.points.map(|points| points.round() as i64)
    }

    pub fn links_in(&self, direction: LinkDirection) -> impl Iterator<Item = &LinkFact> {
        self.links
            .iter()
            .filter(move |link| link.direction == direction)
    }
}
