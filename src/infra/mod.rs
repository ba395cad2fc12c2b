// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting filesystem concerns that don't belong in the
// domain or the use cases:
//
//   exporter.rs — writes topics to disk as JSON or YAML and
//                 reads them back. An exported directory can
//                 be loaded again with --data-dir.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

/// Topic export and re-import
pub mod exporter;
