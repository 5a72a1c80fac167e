//! RSVP confirmation entity.

/// A guest's attendance confirmation, as persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Rsvp {
    pub name: String,
    pub bringing_companion: bool,
    /// Companion details exactly as the client sent them
    pub companions: Option<serde_json::Value>,
    pub has_restriction: bool,
    pub restriction: Option<String>,
}

impl Rsvp {
    /// Empty restriction text is stored as NULL.
    pub fn normalized(mut self) -> Self {
        self.restriction = self
            .restriction
            .filter(|r| !r.trim().is_empty());
        self
    }
}
