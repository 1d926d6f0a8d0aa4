//! Splitting a filename into stem and extension.

/// Splits `name` at its last `.` into `(stem, extension)`.
///
/// The extension keeps its dot and its case. Leading dots never start an
/// extension, so `.mp4` and `...` have none.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => (&name[..dot], &name[dot..]),
        _ => (name, ""),
    }
}
