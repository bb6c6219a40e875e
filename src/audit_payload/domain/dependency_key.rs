/// Directory npm installs packages into.
pub const NODE_MODULES_DIRNAME: &str = "node_modules";

/// Path marker preceding a package name inside a nested install path.
const NODE_MODULES_MARKER: &str = "node_modules/";

/// Reduces a lockfile dependency key to the package name.
///
/// v2/v3 `packages` keys are install paths such as
/// `node_modules/a/node_modules/@scope/b`; only the part after the last
/// `node_modules/` names the package. Keys without the marker are returned
/// unchanged.
pub fn normalize_dependency_key(key: &str) -> &str {
    match key.rfind(NODE_MODULES_MARKER) {
        Some(index) => &key[index + NODE_MODULES_MARKER.len()..],
        None => key,
    }
}
