//! Logical path derivation and separator normalization.

use std::path::{Component, Path, PathBuf};

/// Derive the logical (reported) path of a matched file.
///
/// Matches from relative patterns are reported relative to the collection
/// root, climbing out of it with `..` when a pattern reached outside. If the
/// match shares no root with the collection root it is reported as is.
/// Matches from absolute patterns keep their full path minus the volume
/// prefix and the leading separator.
pub fn logical_path(absolute: &Path, root: Option<&Path>, origin_is_absolute: bool) -> PathBuf {
    if origin_is_absolute {
        return strip_root(&lexical_clean(absolute));
    }
    root.and_then(|root| relative_to(absolute, root))
        .unwrap_or_else(|| lexical_clean(absolute))
}

/// Express `path` relative to `base`. Returns `None` when the two do not
/// share a volume and root.
fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    let path = lexical_clean(path);
    let base = lexical_clean(base);
    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if common < leading_anchors(&path_parts) || common < leading_anchors(&base_parts) {
        return None;
    }

    let mut relative = PathBuf::new();
    for _ in &base_parts[common..] {
        relative.push(Component::ParentDir);
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }
    Some(relative)
}

fn leading_anchors(parts: &[Component]) -> usize {
    parts
        .iter()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .count()
}

/// Resolve `.` and `..` components without touching the filesystem
pub fn lexical_clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let ends_in_name =
                    matches!(cleaned.components().next_back(), Some(Component::Normal(_)));
                if ends_in_name {
                    cleaned.pop();
                } else if !cleaned.has_root() {
                    cleaned.push(Component::ParentDir);
                }
                // `/..` is `/`
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// Drop the volume prefix and root separator from a path
pub fn strip_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}

/// Render a logical path, optionally with `/` as the only separator
pub fn normalize(path: &Path, use_forward_slash: bool) -> String {
    if !use_forward_slash {
        return path.to_string_lossy().into_owned();
    }

    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
