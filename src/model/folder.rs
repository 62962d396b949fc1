use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Palette used when a folder is created without an explicit color.
pub const FOLDER_COLORS: [&str; 7] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4",
];

/// A named, colored bucket of notes. Folders are flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update for a [`Folder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl FolderPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: None,
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            name: None,
            color: Some(color.into()),
        }
    }

    pub(crate) fn apply_to(self, folder: &mut Folder) {
        if let Some(name) = self.name {
            folder.name = name;
        }
        if let Some(color) = self.color {
            folder.color = color;
        }
    }
}

/// Uniformly pick one of [`FOLDER_COLORS`].
pub fn random_folder_color() -> &'static str {
    FOLDER_COLORS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FOLDER_COLORS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_color_comes_from_palette() {
        for _ in 0..50 {
            assert!(FOLDER_COLORS.contains(&random_folder_color()));
        }
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut folder = Folder {
            id: "f".to_string(),
            name: "Work".to_string(),
            color: FOLDER_COLORS[0].to_string(),
            created_at: Utc::now(),
        };
        FolderPatch::color("#000000").apply_to(&mut folder);
        assert_eq!(folder.name, "Work");
        assert_eq!(folder.color, "#000000");
    }
}
