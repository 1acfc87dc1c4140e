/// Declared types of an in-flight drag. File contents are not readable
/// mid-drag, so only type strings are inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragPayload {
    /// Types advertised by the drag as a whole (e.g. `Files`, `public.file-url`)
    pub types: Vec<String>,
    /// Declared type of each dragged item
    pub item_types: Vec<String>,
}

/// macOS marker advertised when Finder files are dragged.
pub const FILE_URL_MARKER: &str = "public.file-url";
const FILES_ITEM_TYPE: &str = "Files";

impl DragPayload {
    pub fn new<T, I>(types: T, item_types: I) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            item_types: item_types.into_iter().map(Into::into).collect(),
        }
    }
}

/// True when the drag likely carries an image: an item declares an
/// `image/*` type, or a generic `Files` item travels with the file-URL marker.
pub fn drag_contains_image(payload: &DragPayload) -> bool {
    if payload.types.is_empty() {
        return false;
    }
    let has_file_url = payload.types.iter().any(|t| t == FILE_URL_MARKER);
    payload
        .item_types
        .iter()
        .any(|t| t.starts_with("image/") || (t == FILES_ITEM_TYPE && has_file_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_item_is_recognized() {
        let payload = DragPayload::new(["Files"], ["image/png"]);
        assert!(drag_contains_image(&payload));
    }

    #[test]
    fn test_files_with_file_url_marker() {
        let payload = DragPayload::new(["Files", FILE_URL_MARKER], ["Files"]);
        assert!(drag_contains_image(&payload));
    }

    #[test]
    fn test_files_without_marker_is_not_an_image() {
        let payload = DragPayload::new(["Files"], ["Files"]);
        assert!(!drag_contains_image(&payload));
    }

    #[test]
    fn test_text_drag() {
        let payload = DragPayload::new(["text/plain"], ["text/plain"]);
        assert!(!drag_contains_image(&payload));
    }

    #[test]
    fn test_no_declared_types() {
        let payload = DragPayload::new(Vec::<String>::new(), ["image/png"]);
        assert!(!drag_contains_image(&payload));
    }
}
