macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned API route definitions shared by the server and its tests
pub mod v1 {
    pub const LISTING: &str = v1_path!("/listing");
}

/// Routes kept for pages that still call `list.php`.
pub mod legacy {
    pub const LIST: &str = "/api/list.php";
}

pub mod pages {
    pub const INDEX: &str = "/";
    pub const BROWSE: &str = "/browse/{category}";

    /// Concrete page path for a category.
    pub fn browse(category: &str) -> String {
        BROWSE.replace("{category}", category)
    }
}

pub mod service {
    pub const PING: &str = "/ping";
    pub const HEALTH: &str = "/health";
}
