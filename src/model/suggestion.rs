//! Smart-suggestion menu
//!
//! A fixed enumerated list of prompt strings with icon tags. Static data,
//! never derived from task state.

use serde::Serialize;

/// One suggestion entry
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub id: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

/// The full suggestion menu served by `GET /api/suggestions`
pub const SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        id: "1",
        text: "Review weekly goals",
        icon: "lightbulb",
    },
    Suggestion {
        id: "2",
        text: "Take a break",
        icon: "coffee",
    },
    Suggestion {
        id: "3",
        text: "Read documentation",
        icon: "book-open",
    },
    Suggestion {
        id: "4",
        text: "Update project status",
        icon: "clipboard",
    },
    Suggestion {
        id: "5",
        text: "Plan tomorrow",
        icon: "calendar",
    },
];
