use std::path::{Path, PathBuf};

use crate::bmi::ImageKey;

/// 이미지 파일로 인정하는 확장자. 앞에 있을수록 우선한다.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// 이미지 키를 `<dir>/<key>.<ext>` 파일로 해석한다. 없으면 None.
pub fn resolve_image(dir: &Path, key: ImageKey) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{ext}", key.as_str())))
        .find(|p| p.is_file())
}
