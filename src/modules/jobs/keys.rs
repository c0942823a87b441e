//! Output-key derivation shared by the submission path and the
//! transformation worker. Both sides must call this one function so a
//! client can predict the result location without a status callback.

/// Maps `(input_key, operation)` to the canonical result location
/// under `processed/`. Deterministic and infallible; callers validate
/// `input_key` non-empty before getting here.
pub fn derive_output_key(input_key: &str, operation: i64) -> String {
    let filename = input_key.rsplit('/').next().unwrap_or(input_key);

    let (base_name, ext) = match filename.rsplit_once('.') {
        Some((base, ext)) => (base, ext),
        None => (filename, "mp4"),
    };

    // Extraction operations change the container; everything else
    // keeps the input's.
    let ext = match operation {
        5 => "jpg", // frame extraction
        6 => "mp3", // audio extraction
        _ => ext,
    };

    format!("processed/{base_name}_op{operation}.{ext}")
}

#[cfg(test)]
mod tests {
    use super::derive_output_key;

    #[test]
    fn extraction_operations_rewrite_the_extension() {
        assert_eq!(derive_output_key("clip.mov", 5), "processed/clip_op5.jpg");
        assert_eq!(derive_output_key("a/b/clip", 6), "processed/clip_op6.mp3");
    }

    #[test]
    fn other_operations_keep_the_input_extension() {
        assert_eq!(derive_output_key("clip.mov", 1), "processed/clip_op1.mov");
        assert_eq!(
            derive_output_key("uploads/abc-video.mkv", 2),
            "processed/abc-video_op2.mkv"
        );
    }

    #[test]
    fn missing_extension_defaults_to_mp4() {
        assert_eq!(derive_output_key("noext", 2), "processed/noext_op2.mp4");
    }

    #[test]
    fn only_the_last_path_segment_survives() {
        assert_eq!(
            derive_output_key("uploads/2024/raw.file.mov", 1),
            "processed/raw.file_op1.mov"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = derive_output_key("uploads/x.webm", 3);
        let b = derive_output_key("uploads/x.webm", 3);
        assert_eq!(a, b);
    }
}
