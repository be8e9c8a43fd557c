//! Wire conversions for orders.
//!
//! The enum fields ride through the dispatch layer as object wrappers of
//! their enum type: the delegating codec passes the uppercase token to the
//! base serializer untouched.

use serde_json::{Map as JsonMap, Value};

use crate::codec::{field, object, CodecRegistry, Decoded, FromWire, ToWire, TypeDescriptor};
use crate::error::CodecError;
use crate::shared::{from_epoch_millis, to_epoch_millis};

use super::{Order, OrderKind, OrderSide, SecurityKind};

fn side_shape() -> TypeDescriptor {
    TypeDescriptor::object_of(TypeDescriptor::opaque("OrderSide"))
}

fn kind_shape() -> TypeDescriptor {
    TypeDescriptor::object_of(TypeDescriptor::opaque("OrderKind"))
}

fn security_kind_shape() -> TypeDescriptor {
    TypeDescriptor::object_of(TypeDescriptor::opaque("SecurityKind"))
}

impl FromWire for Order {
    fn from_wire(token: &Value, codecs: &CodecRegistry) -> Result<Self, CodecError> {
        let body = object(token)?;
        Ok(Self {
            id: codecs.read(&TypeDescriptor::Text, field(body, "id"))?.into_text()?,
            security_identifier: codecs
                .read(&TypeDescriptor::Text, field(body, "securityIdentifier"))?
                .into_text()?,
            side: codecs.read(&side_shape(), field(body, "side"))?.into_entity()?,
            kind: codecs.read(&kind_shape(), field(body, "type"))?.into_entity()?,
            security_kind: codecs
                .read(&security_kind_shape(), field(body, "securityType"))?
                .into_entity()?,
            limit: codecs
                .read(&TypeDescriptor::Double, field(body, "limit"))?
                .into_double()?,
            size: codecs.read(&TypeDescriptor::Long, field(body, "size"))?.into_long()?,
            executed_size: codecs
                .read(&TypeDescriptor::Long, field(body, "executedSize"))?
                .into_long()?,
            created: codecs
                .read(&TypeDescriptor::Long, field(body, "created"))?
                .into_long()?
                .filter_map(from_epoch_millis),
            owner_id: codecs
                .read(&TypeDescriptor::Text, field(body, "ownerId"))?
                .into_text()?,
        })
    }
}

impl ToWire for Order {
    fn to_wire(&self, codecs: &CodecRegistry) -> Result<Value, CodecError> {
        let mut body = JsonMap::new();
        body.insert(
            "id".to_string(),
            codecs.write(&TypeDescriptor::Text, &Decoded::Text(self.id.clone()))?,
        );
        body.insert(
            "securityIdentifier".to_string(),
            codecs.write(
                &TypeDescriptor::Text,
                &Decoded::Text(self.security_identifier.clone()),
            )?,
        );
        body.insert(
            "side".to_string(),
            codecs.write(&side_shape(), &Decoded::raw_from(&self.side)?)?,
        );
        body.insert(
            "type".to_string(),
            codecs.write(&kind_shape(), &Decoded::raw_from(&self.kind)?)?,
        );
        body.insert(
            "securityType".to_string(),
            codecs.write(&security_kind_shape(), &Decoded::raw_from(&self.security_kind)?)?,
        );
        body.insert(
            "limit".to_string(),
            codecs.write(&TypeDescriptor::Double, &Decoded::Double(self.limit.clone()))?,
        );
        body.insert(
            "size".to_string(),
            codecs.write(&TypeDescriptor::Long, &Decoded::Long(self.size.clone()))?,
        );
        body.insert(
            "executedSize".to_string(),
            codecs.write(&TypeDescriptor::Long, &Decoded::Long(self.executed_size.clone()))?,
        );
        body.insert(
            "created".to_string(),
            codecs.write(
                &TypeDescriptor::Long,
                &Decoded::Long(self.created.as_ref().map(to_epoch_millis)),
            )?,
        );
        body.insert(
            "ownerId".to_string(),
            codecs.write(&TypeDescriptor::Text, &Decoded::Text(self.owner_id.clone()))?,
        );
        Ok(Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::registry;
    use serde_json::json;

    fn order_token() -> Value {
        json!({
            "id": "o-42",
            "securityIdentifier": "DE000A1EXCH9",
            "side": "BUY",
            "type": "LIMIT",
            "securityType": "STOCK",
            "limit": 101.5,
            "size": 200,
            "executedSize": 50,
            "created": 1700000000000i64,
            "ownerId": "sa-9"
        })
    }

    #[test]
    fn test_decode_enums_from_uppercase_tokens() {
        let order = Order::from_wire(&order_token(), registry::global()).unwrap();
        assert_eq!(order.side.get(), Some(&OrderSide::Buy));
        assert_eq!(order.kind.get(), Some(&OrderKind::Limit));
        assert_eq!(order.security_kind.get(), Some(&SecurityKind::Stock));
        assert_eq!(order.open_size(), Some(150));
    }

    #[test]
    fn test_market_order_has_empty_limit() {
        let mut token = order_token();
        token["type"] = json!("MARKET");
        token["limit"] = Value::Null;
        let order = Order::from_wire(&token, registry::global()).unwrap();
        assert_eq!(order.kind.get(), Some(&OrderKind::Market));
        assert!(order.limit.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let codecs = registry::global();
        let order = Order::from_wire(&order_token(), codecs).unwrap();
        let encoded = order.to_wire(codecs).unwrap();
        assert_eq!(encoded["side"], json!("BUY"));
        let again = Order::from_wire(&encoded, codecs).unwrap();
        assert_eq!(order, again);
    }
}
