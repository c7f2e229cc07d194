//! Output key, metadata and result URL derivation.

use crate::config::Config;
use crate::event::FileReference;
use crate::size::SizeSpec;

use super::decode::CONTENT_TYPE;

/// User-metadata key carrying the configured description.
pub const DESCRIPTION_METADATA_KEY: &str = "x-amz-meta-description";

/// Where and how a resized image is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDescriptor {
    /// Same bucket as the source object
    pub bucket: String,
    pub key: String,
    pub description: String,
    pub content_type: &'static str,
}

impl TargetDescriptor {
    pub fn for_source(source: &FileReference, config: &Config) -> Self {
        Self {
            bucket: source.bucket.clone(),
            key: derive_key(&source.key, &config.size, &config.extension),
            description: config.description.clone(),
            content_type: CONTENT_TYPE,
        }
    }
}

/// Split `key` into `(stem, extension)` the way `os.path.splitext` does.
///
/// Only the final path component is considered and dots leading that
/// component do not start an extension, so `.bashrc` has none.
pub fn split_extension(key: &str) -> (&str, &str) {
    let name_start = key.rfind('/').map_or(0, |i| i + 1);
    let name = &key[name_start..];
    let leading_dots = name.len() - name.trim_start_matches('.').len();

    match name[leading_dots..].rfind('.') {
        Some(dot) => key.split_at(name_start + leading_dots + dot),
        None => (key, ""),
    }
}

/// `stem + "_" + size + extension`; the source extension is dropped.
pub fn derive_key(source_key: &str, size: &SizeSpec, extension: &str) -> String {
    let (stem, _) = split_extension(source_key);
    format!("{stem}_{size}{extension}")
}

/// Human-readable location of an uploaded object.
pub fn result_url(region: &str, bucket: &str, key: &str) -> String {
    format!("https://s3-{region}.amazonaws.com/{bucket}/{key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResizeFilter;

    fn size(spec: &str) -> SizeSpec {
        spec.parse().unwrap()
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("images/image1.jpg"), ("images/image1", ".jpg"));
        assert_eq!(split_extension("file.tar.gz"), ("file.tar", ".gz"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension("a.b/c"), ("a.b/c", ""));
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
        assert_eq!(split_extension("dir/..hidden.jpg"), ("dir/..hidden", ".jpg"));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
        assert_eq!(split_extension("dir/"), ("dir/", ""));
        assert_eq!(split_extension(""), ("", ""));
    }

    #[test]
    fn test_derive_key() {
        assert_eq!(
            derive_key("images/image1.jpg", &size("50x50"), ".jpeg"),
            "images/image1_50x50.jpeg"
        );
        assert_eq!(derive_key("image2.jpg", &size("50x50"), ".jpeg"), "image2_50x50.jpeg");
        assert_eq!(derive_key("raw", &size("10x20"), ".jpg"), "raw_10x20.jpg");
    }

    #[test]
    fn test_derive_key_is_deterministic() {
        let s = size("640x480");
        let first = derive_key("a/b/c.JPG", &s, ".jpeg");
        for _ in 0..3 {
            assert_eq!(derive_key("a/b/c.JPG", &s, ".jpeg"), first);
        }
        assert_eq!(first, "a/b/c_640x480.jpeg");
    }

    #[test]
    fn test_result_url() {
        assert_eq!(
            result_url("eu-west-1", "images_bucket", "image1_50x50.jpeg"),
            "https://s3-eu-west-1.amazonaws.com/images_bucket/image1_50x50.jpeg"
        );
    }

    #[test]
    fn test_target_for_source() {
        let config = Config {
            region: "eu-west-1".into(),
            size: size("50x50"),
            description: "awesome image".into(),
            extension: ".jpeg".into(),
            filter: ResizeFilter::default(),
        };
        let target =
            TargetDescriptor::for_source(&FileReference::new("images_bucket", "image1.jpg"), &config);
        assert_eq!(target.bucket, "images_bucket");
        assert_eq!(target.key, "image1_50x50.jpeg");
        assert_eq!(target.description, "awesome image");
        assert_eq!(target.content_type, "image/jpeg");
    }
}
