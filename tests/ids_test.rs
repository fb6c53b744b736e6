//! Typed IDs: serde and conversions.

use nem_id::{MosaicId, NamespaceId};

#[test]
fn namespace_id_serializes_as_signed_integer() {
    let json = serde_json::to_string(&NamespaceId::NEM).unwrap();
    assert_eq!(json, "-8884663987180930485");

    let back: NamespaceId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, NamespaceId::NEM);
}

#[test]
fn mosaic_id_in_a_struct() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Transfer {
        mosaic: MosaicId,
        amount: u64,
    }

    let transfer = Transfer {
        mosaic: MosaicId::from_full_name("nem:xem").unwrap(),
        amount: 10,
    };
    let json = serde_json::to_string(&transfer).unwrap();
    assert_eq!(json, r#"{"mosaic":-3087871471161192663,"amount":10}"#);
    assert_eq!(serde_json::from_str::<Transfer>(&json).unwrap(), transfer);
}

#[test]
fn namespace_child_matches_mosaic_with_same_name() {
    // A mosaic and a sub-namespace of the same name share an ID.
    let ns = NamespaceId::from_name("nem.xem").unwrap();
    assert_eq!(ns.id(), MosaicId::XEM.id());
}
