use std::collections::HashSet;

/// Strip one leading and one trailing slash from a resource segment.
pub fn normalize_segment(segment: &str) -> &str {
    let segment = segment.strip_prefix('/').unwrap_or(segment);
    segment.strip_suffix('/').unwrap_or(segment)
}

/// Split a raw segment into its non-empty path elements.
pub fn split_elements(segment: &str) -> impl Iterator<Item = &str> {
    normalize_segment(segment)
        .split('/')
        .filter(|element| !element.is_empty())
}

/// Join path elements (without the leading root marker) into an absolute path.
pub fn join_elements<S: AsRef<str>>(elements: &[S]) -> String {
    let mut path = String::from("/");
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            path.push('/');
        }
        path.push_str(element.as_ref());
    }
    path
}

/// Name of a `{name}` or `{name: regex}` template element.
pub fn parameter_name(element: &str) -> Option<&str> {
    let inner = element.strip_prefix('{')?.strip_suffix('}')?;
    let name = match inner.split_once(':') {
        Some((name, _pattern)) => name,
        None => inner,
    }
    .trim();

    if name.is_empty() { None } else { Some(name) }
}

pub fn extract_parameters_from_path(path: &str) -> Vec<String> {
    let mut params: Vec<String> = path
        .split('/')
        .filter_map(parameter_name)
        .map(str::to_string)
        .collect();

    // Remove duplicates while preserving order
    let mut seen = HashSet::new();
    params.retain(|param| seen.insert(param.clone()));

    params
}
