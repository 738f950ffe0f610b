//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }
}

// ============================================================================
// [listing] Section Defaults
// ============================================================================

pub mod listing {
    /// Items per listing page, matching the reference site's page size.
    pub fn per_page() -> usize {
        5
    }

    /// Number of latest articles shown on the front page.
    pub fn front_page() -> usize {
        5
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn posts() -> PathBuf {
        "content/posts.json".into()
    }

    pub fn projects() -> PathBuf {
        "content/projects.json".into()
    }
}
