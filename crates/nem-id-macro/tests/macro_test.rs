//! Compile-time IDs agree with runtime derivation.

use nem_id::{MosaicId, NamespaceId};
use nem_id_macro::{mosaic_id, namespace_id, namespace_path};

const NEM: NamespaceId = namespace_id!("nem");
const XEM: MosaicId = mosaic_id!("nem:xem");
const FOO_BAR_BAZ: [i64; 3] = namespace_path!("foo.bar.baz");

#[test]
fn usable_in_const_context() {
    assert_eq!(NEM, NamespaceId::NEM);
    assert_eq!(XEM, MosaicId::XEM);
    assert_eq!(
        FOO_BAR_BAZ.to_vec(),
        nem_id::generate_namespace_path("foo.bar.baz").unwrap()
    );
}

#[test]
fn namespace_id_is_deepest_level() {
    assert_eq!(
        namespace_id!("foo.bar.baz"),
        NamespaceId::from_name("foo.bar.baz").unwrap()
    );
    assert_eq!(namespace_id!("foo.bar.baz").id(), FOO_BAR_BAZ[2]);
}

#[test]
fn mosaic_two_argument_form() {
    assert_eq!(mosaic_id!("nem", "xem"), XEM);
    assert_eq!(
        mosaic_id!("foo.bar.baz", "tokens"),
        MosaicId::from_names("foo.bar.baz", "tokens").unwrap()
    );
}

#[test]
fn single_level_path() {
    let path: [i64; 1] = namespace_path!("nem");
    assert_eq!(path, [NamespaceId::NEM.id()]);
}
