use serde::{Deserialize, Serialize};

/// Which panes the editor shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Edit,
    Preview,
    #[default]
    Split,
}

impl ViewMode {
    /// Cycle edit → split → preview → edit.
    pub fn next(self) -> Self {
        match self {
            Self::Edit => Self::Split,
            Self::Split => Self::Preview,
            Self::Preview => Self::Edit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Preview => "Preview",
            Self::Split => "Split",
        }
    }

    pub fn shows_editor(self) -> bool {
        matches!(self, Self::Edit | Self::Split)
    }

    pub fn shows_preview(self) -> bool {
        matches!(self, Self::Preview | Self::Split)
    }
}
