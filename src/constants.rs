/// Common constants used across the formfold project.
///
/// These defaults are used when explicit values are not provided.

/// Storage slot under which the generated schema document is persisted.
pub const SCHEMA_KEY: &str = "questions_schema";

/// Sentinel category for rows that are not grouped under a container.
///
/// Ungrouped rows carry this value explicitly rather than an absent
/// category, so the grouping branch is a plain equality check.
pub const GENERAL_HISTORY: &str = "General History";

/// Category labels offered to a selection UI.
///
/// The core treats row categories as opaque strings and does not validate
/// them against this list.
pub const CATEGORIES: &[&str] = &[
    GENERAL_HISTORY,
    "Medical History",
    "Family History",
    "Social History",
    "Lifestyle",
];
