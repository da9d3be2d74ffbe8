use serde::{Deserialize, Serialize};

/// Title shown when none has been configured.
pub const DEFAULT_APP_TITLE: &str = "Mehfil Artsfest Leaderboard";

/// Gallery slides accepted by the settings form.
pub const MAX_GALLERY_IMAGES: usize = 10;

#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            primary: "#6a11cb".to_string(),
            secondary: "#2575fc".to_string(),
            accent: "gold".to_string(),
        }
    }
}

/// Display configuration for the public board.
///
/// Each field lives under its own store key (`appTitle`, `appTheme`,
/// `logoImage`, `galleryImages`); this struct only groups them.
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub app_title: String,
    pub app_theme: AppTheme,
    pub logo_image: Option<String>,
    pub gallery_images: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
            app_theme: AppTheme::default(),
            logo_image: None,
            gallery_images: Vec::new(),
        }
    }
}
