/// Every key the festival data is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Events,
    Teams,
    Students,
    Programs,
    Results,
    Categories,
    Points,
    CategoryPoints,
    GradePoints,
    TeamManagers,
    AdminPassword,
    AvailableGrades,
    Initialized,
    AppTitle,
    AppTheme,
    LogoImage,
    GalleryImages,
}

impl StoreKey {
    pub const ALL: [StoreKey; 17] = [
        StoreKey::Events,
        StoreKey::Teams,
        StoreKey::Students,
        StoreKey::Programs,
        StoreKey::Results,
        StoreKey::Categories,
        StoreKey::Points,
        StoreKey::CategoryPoints,
        StoreKey::GradePoints,
        StoreKey::TeamManagers,
        StoreKey::AdminPassword,
        StoreKey::AvailableGrades,
        StoreKey::Initialized,
        StoreKey::AppTitle,
        StoreKey::AppTheme,
        StoreKey::LogoImage,
        StoreKey::GalleryImages,
    ];

    /// The key as written to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Events => "events",
            StoreKey::Teams => "teams",
            StoreKey::Students => "students",
            StoreKey::Programs => "programs",
            StoreKey::Results => "results",
            StoreKey::Categories => "categories",
            StoreKey::Points => "points",
            StoreKey::CategoryPoints => "categoryPoints",
            StoreKey::GradePoints => "gradePoints",
            StoreKey::TeamManagers => "teamManagers",
            StoreKey::AdminPassword => "adminPassword",
            StoreKey::AvailableGrades => "availableGrades",
            StoreKey::Initialized => "initialized",
            StoreKey::AppTitle => "appTitle",
            StoreKey::AppTheme => "appTheme",
            StoreKey::LogoImage => "logoImage",
            StoreKey::GalleryImages => "galleryImages",
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
