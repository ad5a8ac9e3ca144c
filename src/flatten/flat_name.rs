use std::{
    ffi::{OsStr, OsString},
    path::{Component, Path},
};

/// Builds the flat file name for a file found at `relative` below the root.
///
/// The root prefix comes first, then every normal component of `relative`,
/// all joined by `marker`. `presets` + `accommodation/basic_hut.svg` gives
/// `presets+accommodation+basic_hut.svg`.
pub fn compose_flat_name(prefix: &OsStr, relative: &Path, marker: char) -> OsString {
    let mut marker_buf = [0u8; 4];
    let marker: &str = marker.encode_utf8(&mut marker_buf);

    let mut flat = OsString::new();
    let segments = std::iter::once(prefix)
        .filter(|segment| !segment.is_empty())
        .chain(relative.components().filter_map(|component| match component {
            Component::Normal(segment) => Some(segment),
            _ => None,
        }));

    for (index, segment) in segments.enumerate() {
        if index > 0 {
            flat.push(marker);
        }
        flat.push(segment);
    }

    flat
}
