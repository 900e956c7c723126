//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber used by every store and client.
//!
//! The store task logs with structured fields rather than formatted strings:
//!
//! ```text
//! INFO Store started entity_type="LineItem"
//! INFO Inserted entity_type="LineItem" id=pizza_1 size=1 revision=1
//! INFO Action ok entity_type="LineItem" id=pizza_1 changed=true revision=2
//! INFO Removed entity_type="LineItem" id=pizza_1 size=0 revision=3
//! INFO Shutdown entity_type="LineItem" size=0
//! ```
//!
//! Levels are picked with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per mutation
//! RUST_LOG=debug cargo run     # every request, with payloads
//! RUST_LOG=store_actor=debug,pizzeria=info cargo run
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Module paths are hidden (`with_target(false)`); the `entity_type` field already says
/// which store a line came from. Calling this more than once is harmless, so tests and
/// binaries can both call it.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
