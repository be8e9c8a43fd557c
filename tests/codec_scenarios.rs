//! End-to-end codec scenarios: wire JSON in, typed entities out, and back.

use bourse_sdk::codec::registry;
use bourse_sdk::prelude::*;
use serde_json::{json, Value};

mod null_handling {
    use super::*;

    #[test]
    fn test_null_scalar_field_decodes_empty() {
        let token = json!({"cash": null, "id": "x1"});
        let account = BankAccount::from_wire(&token, registry::global()).unwrap();
        assert!(account.cash.is_empty());
        assert_eq!(account.id.get().map(String::as_str), Some("x1"));
    }

    #[test]
    fn test_null_delegating_field_is_container_without_value() {
        let token = json!({"id": "br-1", "license": null});
        let broker = Broker::from_wire(&token, registry::global()).unwrap();
        // The wrapped container itself exists; holding nothing is its state.
        assert_eq!(broker.license.get(), None);
        assert!(broker.license.is_empty());
    }

    #[test]
    fn test_entity_with_every_field_null_decodes() {
        let token = json!({
            "id": null,
            "securityIdentifier": null,
            "side": null,
            "type": null,
            "securityType": null,
            "limit": null,
            "size": null,
            "executedSize": null,
            "created": null,
            "ownerId": null
        });
        let order = Order::from_wire(&token, registry::global()).unwrap();
        assert!(order.id.is_empty());
        assert!(order.side.is_empty());
        assert!(order.created.is_empty());
        assert_eq!(order.open_size(), None);
    }

    #[test]
    fn test_empty_object_decodes_all_fields_empty() {
        // Absent keys and explicit nulls are the same wire statement.
        let order = Order::from_wire(&json!({}), registry::global()).unwrap();
        assert!(order.id.is_empty());
        assert!(order.limit.is_empty());
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn test_decode_encode_decode_is_identity_under_id_equality() {
        let token = json!({
            "id": "o-42",
            "securityIdentifier": "DE000A1EXCH9",
            "side": "SELL",
            "type": "LIMIT",
            "securityType": "BOND",
            "limit": 101.30000000000001,
            "size": 200,
            "executedSize": null,
            "created": 1700000000000i64,
            "ownerId": "sa-9"
        });
        let codecs = registry::global();

        let first = Order::from_wire(&token, codecs).unwrap();
        let encoded = first.to_wire(codecs).unwrap();
        let second = Order::from_wire(&encoded, codecs).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.side.get(), Some(&OrderSide::Sell));
        assert!(second.executed_size.is_empty());
    }

    #[test]
    fn test_nulls_survive_the_encode_direction() {
        let codecs = registry::global();
        let account = BankAccount::from_wire(&json!({"id": "x1"}), codecs).unwrap();
        let encoded = account.to_wire(codecs).unwrap();
        assert_eq!(encoded, json!({"id": "x1", "cash": null}));
    }
}

mod identity {
    use super::*;

    #[test]
    fn test_independently_decoded_entities_with_same_id_are_equal() {
        let codecs = registry::global();
        let a = Company::from_wire(
            &json!({"id": "c-7", "name": "Mondbahn AG", "listedSince": 1700000000000i64}),
            codecs,
        )
        .unwrap();
        let b = Company::from_wire(&json!({"id": "c-7", "name": "Umbenannt SE"}), codecs).unwrap();

        assert_eq!(a, b);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_different_ids_are_not_equal() {
        let codecs = registry::global();
        let a = BankAccount::from_wire(&json!({"id": "x1", "cash": 5.0}), codecs).unwrap();
        let b = BankAccount::from_wire(&json!({"id": "x2", "cash": 5.0}), codecs).unwrap();
        assert_ne!(a, b);
    }
}

mod dispatch {
    use super::*;

    #[test]
    fn test_object_wrapper_of_scalar_stays_scalar() {
        let codecs = registry::global();
        let shape = TypeDescriptor::object_of(TypeDescriptor::Double);
        let decoded = codecs.read(&shape, &json!(2)).unwrap();
        assert_eq!(decoded.into_double().unwrap().get(), Some(&2.0));
    }

    #[test]
    fn test_unknown_shape_is_declined_not_raised() {
        let codecs = registry::global();
        assert!(codecs.resolve(&TypeDescriptor::opaque("NotAWrapper")).is_none());
    }

    #[test]
    fn test_nested_wrapper_chain_decodes_null_at_the_top() {
        let codecs = registry::global();
        let shape = TypeDescriptor::object_of(TypeDescriptor::object_of(
            TypeDescriptor::list_of(TypeDescriptor::opaque("Order")),
        ));
        let decoded = codecs.read(&shape, &Value::Null).unwrap();
        // The innermost shape is a collection, so null surfaces as its
        // present zero-element form.
        let list = decoded.into_list().unwrap();
        assert_eq!(list.get().map(Vec::len), Some(0));
    }
}

mod wire_shapes {
    use super::*;

    #[test]
    fn test_scalar_where_object_expected_fails_decode() {
        let result = Company::from_wire(&json!("just a string"), registry::global());
        assert!(result.is_err());
    }

    #[test]
    fn test_fractional_and_integral_numbers_both_parse() {
        let codecs = registry::global();
        let a = BankAccount::from_wire(&json!({"id": "x", "cash": 100}), codecs).unwrap();
        let b = BankAccount::from_wire(&json!({"id": "x", "cash": 100.0}), codecs).unwrap();
        assert_eq!(a.cash, b.cash);
    }
}
