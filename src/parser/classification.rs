/// Purpose category of a cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Functional,
    Marketing,
    Performance,
    Essential,
    /// Fallback when the model's text names none of the categories
    Other,
}

impl Classification {
    /// Labels tried by `normalize`, in priority order. `Other` is never matched.
    pub const MATCH_ORDER: [Classification; 4] = [
        Classification::Functional,
        Classification::Marketing,
        Classification::Performance,
        Classification::Essential,
    ];

    /// Map free text to a category by case-insensitive substring match.
    ///
    /// When several labels occur, the earliest in `MATCH_ORDER` wins regardless
    /// of where it appears in the text.
    pub fn normalize(text: &str) -> Self {
        let text = text.to_lowercase();
        Self::MATCH_ORDER
            .into_iter()
            .find(|label| text.contains(&label.as_str().to_lowercase()))
            .unwrap_or(Classification::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Functional => "Functional",
            Classification::Marketing => "Marketing",
            Classification::Performance => "Performance",
            Classification::Essential => "Essential",
            Classification::Other => "Other",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
