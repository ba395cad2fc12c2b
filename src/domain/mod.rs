// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define what a
// question bank IS:
//
//   question.rs — one interview question with its explanation
//                 and follow-up questions
//   topic.rs    — a named, ordered list of questions
//   catalog.rs  — every topic, looked up by identifier
//   traits.rs   — seams the data layer implements
//
// Rules for this layer:
//   - NO file I/O
//   - NO CLI types
//   - Records are never mutated after they are loaded
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A single interview question record
pub mod question;

// A topic file: identifier plus ordered records
pub mod topic;

// Read-only lookup over all topics
pub mod catalog;

// Core abstractions (traits) that other layers implement
pub mod traits;
