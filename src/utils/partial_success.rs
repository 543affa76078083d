//! Result shape for operations that complete despite individual failures.
//! A pass that leaves some modules waiting still finishes; what went wrong is
//! reported next to what succeeded rather than instead of it.

/// Represents a completed operation where some parts failed without stopping the rest.
/// The `Vec<E>` contains the parts that failed, reported for diagnostics.
pub type PartialSuccess<T, E> = ( T, Vec<E> );
