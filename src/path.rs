//! Path and mosaic derivation — validation plus the chained level fold.

use crate::error::InvalidIdentifier;
use crate::hash::generate_id;
use crate::name::{split_namespace_name, validate_part};
use crate::{LevelId, ROOT_PARENT_ID};

/// Derive the IDs of every level of a dotted namespace name, root first.
///
/// `path[0]` hashes the root under [`ROOT_PARENT_ID`]; each later level
/// hashes under the level before it.
///
/// ```
/// let path = nem_id::generate_namespace_path("nem.xem").unwrap();
/// assert_eq!(path, [-8884663987180930485, -3087871471161192663]);
/// ```
pub fn generate_namespace_path(name: &str) -> Result<Vec<LevelId>, InvalidIdentifier> {
    let parts = split_namespace_name(name)?;

    let mut path = Vec::with_capacity(parts.len());
    let mut parent = ROOT_PARENT_ID;
    for part in parts {
        parent = generate_id(part, parent);
        path.push(parent);
    }
    Ok(path)
}

/// Derive the ID of the deepest level of a namespace name.
pub fn generate_namespace_id(name: &str) -> Result<LevelId, InvalidIdentifier> {
    let parts = split_namespace_name(name)?;
    Ok(parts
        .into_iter()
        .fold(ROOT_PARENT_ID, |parent, part| generate_id(part, parent)))
}

/// Derive the ID of mosaic `mosaic_name` owned by namespace `namespace_name`.
///
/// The mosaic is one more level chained from the namespace's deepest ID, so
/// `generate_mosaic_id("nem", "xem")` equals the last element of
/// `generate_namespace_path("nem.xem")`.
pub fn generate_mosaic_id(
    namespace_name: &str,
    mosaic_name: &str,
) -> Result<LevelId, InvalidIdentifier> {
    let mosaic_name = validate_part(mosaic_name)?;
    let namespace_id = generate_namespace_id(namespace_name)?;
    Ok(generate_id(mosaic_name, namespace_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidReason;

    #[test]
    fn path_length_matches_levels() {
        assert_eq!(generate_namespace_path("a").unwrap().len(), 1);
        assert_eq!(generate_namespace_path("a.b").unwrap().len(), 2);
        assert_eq!(generate_namespace_path("a.b.c").unwrap().len(), 3);
    }

    #[test]
    fn each_level_chains_from_previous() {
        let path = generate_namespace_path("foo.bar.baz").unwrap();
        assert_eq!(path[0], generate_id("foo", ROOT_PARENT_ID));
        assert_eq!(path[1], generate_id("bar", path[0]));
        assert_eq!(path[2], generate_id("baz", path[1]));
    }

    #[test]
    fn namespace_id_is_last_level() {
        let path = generate_namespace_path("foo.bar.baz").unwrap();
        assert_eq!(generate_namespace_id("foo.bar.baz").unwrap(), path[2]);
    }

    #[test]
    fn mosaic_is_extra_level() {
        let ns = generate_namespace_id("foo.bar").unwrap();
        assert_eq!(generate_mosaic_id("foo.bar", "coin").unwrap(), generate_id("coin", ns));
    }

    #[test]
    fn mosaic_leaf_checked_before_namespace() {
        let err = generate_mosaic_id("BAD", "").unwrap_err();
        assert_eq!(err.reason, InvalidReason::Empty);
        assert_eq!(err.name, "");
    }

    #[test]
    fn sibling_prefixes_diverge() {
        let a = generate_namespace_path("foo.bar").unwrap();
        let b = generate_namespace_path("foo.baz").unwrap();
        assert_eq!(a[0], b[0]);
        assert_ne!(a[1], b[1]);
    }
}
