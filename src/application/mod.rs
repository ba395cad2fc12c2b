// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Each use case coordinates the domain and data layers to do
// one thing a user asks for.
//
// Rules for this layer:
//   - No printing here (that's Layer 1)
//   - No parsing of file formats (that's Layer 4)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Opening the bank, listing and showing topics, validation
pub mod catalog_use_case;

// Keyword search across records
pub mod search_use_case;

// Random practice drills
pub mod quiz_use_case;

// JSON / YAML re-serialisation
pub mod export_use_case;
