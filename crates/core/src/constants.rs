/// Number of entries a list call returns when no limit is configured
pub const DEFAULT_LIST_MATCH_LIMIT: usize = 5;

/// Environment variable overriding the list match limit
pub const LIST_MATCH_LIMIT_ENV: &str = "KEYSTASH_LIST_MATCH_LIMIT";

/// Class marker attached to every item query
pub const GENERIC_PASSWORD_CLASS: &str = "genp";

/// Identifier reserved by the platform store for its per-namespace index
pub const NAMESPACE_INDEX_IDENTIFIER: &str = "__keystash_index__";
