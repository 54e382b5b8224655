//! Versioned keyword tables for heuristic classification.
//!
//! These tables are policy configuration, not algorithm: the classifier's
//! control flow never changes when a table is extended. Membership tests are
//! case-insensitive substring checks against the lower-cased request text,
//! except [`REASONING_CONNECTIVES`], which is matched as space-delimited
//! whole words. Bump [`TABLES_VERSION`] when editing a table so downstream
//! consumers can track policy changes.

/// Version of the keyword tables below.
pub const TABLES_VERSION: u32 = 1;

/// Phrases indicating simple conversational traffic.
pub const SIMPLE_KEYWORDS: &[&str] = &[
    "hello", "hi", "hey", "thanks", "thank you", "bye", "yes", "no", "what is", "who is",
    "when is", "where is", "define",
];

/// Phrases indicating analytically complex traffic.
pub const COMPLEX_KEYWORDS: &[&str] = &[
    "analyze",
    "compare",
    "evaluate",
    "explain why",
    "reasoning",
    "strategy",
    "optimize",
    "design",
    "architecture",
    "algorithm",
    "prove",
    "derive",
    "calculate",
    "solve",
];

/// Phrases indicating coding or engineering traffic.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "code",
    "function",
    "class",
    "debug",
    "error",
    "bug",
    "implement",
    "python",
    "javascript",
    "java",
    "api",
    "sql",
    "database",
    "refactor",
    "test",
    "deploy",
];

/// Phrases indicating creative generation traffic.
pub const CREATIVE_KEYWORDS: &[&str] = &[
    "write",
    "story",
    "poem",
    "creative",
    "imagine",
    "generate",
    "brainstorm",
    "idea",
    "design",
    "compose",
    "draft",
];

/// Phrases that mark a request as needing reasoning capability.
pub const REASONING_PATTERNS: &[&str] = &[
    "why", "explain", "compare", "analyze", "evaluate", "reasoning", "logic", "proof", "derive",
];

/// Connectives that signal conditional or multi-clause reasoning.
///
/// Matched as whole words, space-delimited.
pub const REASONING_CONNECTIVES: &[&str] = &[
    "if",
    "then",
    "because",
    "since",
    "therefore",
    "however",
    "although",
    "but",
    "yet",
    "nevertheless",
];

/// Keywords that push the reasoning score toward its ceiling.
pub const ADVANCED_REASONING_KEYWORDS: &[&str] = &[
    "prove", "derive", "theorem", "logic", "deduce", "infer", "strategy", "optimize", "algorithm",
];

/// Words marking enumerated multi-step requests.
pub const STEP_INDICATORS: &[&str] = &["first", "then", "next", "finally", "step"];

/// Prefixes that mark a plain question.
pub const QUESTION_PREFIXES: &[&str] = &["what", "who", "when", "where", "why", "how"];
