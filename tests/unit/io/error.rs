//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use autotile_combos::AutotileError;
    use autotile_combos::io::error::{invalid_parameter, invalid_source};
    use autotile_combos::spatial::SubtileCoord;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AutotileError::FileSystem {
            path: "/tmp/sheet.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/sheet.png"));
    }

    #[test]
    fn test_table_errors_have_no_source() {
        let error = AutotileError::DuplicateTargetIndex { index: 12 };
        assert!(error.source().is_none());
        assert!(error.to_string().contains("target index 12"));

        let error = AutotileError::DuplicateSourceIndex { index: 3 };
        assert!(error.to_string().contains("source index 3"));
    }

    #[test]
    fn test_underflow_message_uses_tuple_notation() {
        let error = AutotileError::CoordinateUnderflow {
            coord: SubtileCoord::new(2, 1),
            shift: 2,
        };
        let message = error.to_string();
        assert!(message.contains("(2, 1)"));
        assert!(message.contains("2 rows"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tile_size", &"33", &"must be even");
        let message = error.to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains("33"));
        assert!(message.contains("must be even"));
    }

    #[test]
    fn test_invalid_source_error() {
        let error = invalid_source(&"sheet too small");
        assert!(matches!(error, AutotileError::InvalidSourceData { .. }));
        assert!(error.to_string().contains("sheet too small"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::other("boom");
        let error: AutotileError = io_error.into();
        assert!(matches!(error, AutotileError::FileSystem { .. }));
        assert!(error.source().is_some());
    }

    // Image errors always carry the path they occurred on
    #[test]
    fn test_image_errors_keep_their_path() {
        let error = AutotileError::ImageLoad {
            path: PathBuf::from("tiles/grass.png"),
            source: image::ImageError::IoError(std::io::Error::other("bad")),
        };
        assert!(error.to_string().contains("tiles/grass.png"));
        assert!(error.source().is_some());
    }
}
