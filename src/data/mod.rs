// ============================================================
// Layer 4 — Data Access
// ============================================================
// Everything that turns bytes into domain topics, and checks
// what came back:
//
//   topic files (.json / .yaml)      embedded corpus
//            │                              │
//            ▼                              ▼
//        DirLoader                   EmbeddedSource
//            └──────────┬───────────────────┘
//                       ▼
//                 Vec<Topic>  ──► Validator
//
// Preprocessor lives here too: it normalises text for search.
//
// Reference: Rust Book §8 (Collections), §9 (Error Handling)

/// JSON and YAML topic file encoding
pub mod format;

/// The corpus compiled into the binary
pub mod embedded;

/// Loads topic files from a directory
pub mod loader;

/// Shape checks for loaded topics
pub mod validator;

/// Normalises free text into search terms
pub mod preprocessor;
