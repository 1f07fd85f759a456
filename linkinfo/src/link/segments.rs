//! File name and extension boundary detection.
//!
//! Given a canonical link path, this module locates where the file name
//! starts and where its extension separator sits. Both offsets are byte
//! offsets; the separators searched for are ASCII so every offset is a valid
//! char boundary.

/// Compute `(name_start, name_end)` for a canonical path.
///
/// - `name_start` is 0 when there is no `/`, the index after the last `/`
///   otherwise, or the index of the `/` itself when the path ends with one.
/// - `name_end` is the index of the last `.` when it lies strictly after
///   `name_start`, otherwise the length of the path.
///
/// # Examples
///
/// ```
/// use linkinfo::link::segments::name_bounds;
///
/// assert_eq!(name_bounds("dir/file.txt"), (4, 8));
/// assert_eq!(name_bounds("file"), (0, 4));
/// assert_eq!(name_bounds("dir/.hidden"), (4, 11));
/// ```
#[must_use]
pub fn name_bounds(path: &str) -> (usize, usize) {
    let name_start = match path.rfind('/') {
        None => 0,
        Some(sep) if sep + 1 < path.len() => sep + 1,
        Some(sep) => sep,
    };

    let name_end = match path.rfind('.') {
        Some(dot) if dot > name_start => dot,
        _ => path.len(),
    };

    (name_start, name_end)
}
