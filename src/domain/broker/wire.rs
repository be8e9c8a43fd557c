//! Wire conversions for brokers.

use serde_json::{Map as JsonMap, Value};

use crate::codec::{field, object, CodecRegistry, Decoded, FromWire, ToWire, TypeDescriptor};
use crate::error::CodecError;

use super::Broker;

fn license_shape() -> TypeDescriptor {
    TypeDescriptor::object_of(TypeDescriptor::opaque("BrokerLicense"))
}

impl FromWire for Broker {
    fn from_wire(token: &Value, codecs: &CodecRegistry) -> Result<Self, CodecError> {
        let body = object(token)?;
        Ok(Self {
            id: codecs.read(&TypeDescriptor::Text, field(body, "id"))?.into_text()?,
            name: codecs.read(&TypeDescriptor::Text, field(body, "name"))?.into_text()?,
            owner_id: codecs
                .read(&TypeDescriptor::Text, field(body, "ownerId"))?
                .into_text()?,
            license: codecs
                .read(&license_shape(), field(body, "license"))?
                .into_entity()?,
        })
    }
}

impl ToWire for Broker {
    fn to_wire(&self, codecs: &CodecRegistry) -> Result<Value, CodecError> {
        let mut body = JsonMap::new();
        body.insert(
            "id".to_string(),
            codecs.write(&TypeDescriptor::Text, &Decoded::Text(self.id.clone()))?,
        );
        body.insert(
            "name".to_string(),
            codecs.write(&TypeDescriptor::Text, &Decoded::Text(self.name.clone()))?,
        );
        body.insert(
            "ownerId".to_string(),
            codecs.write(&TypeDescriptor::Text, &Decoded::Text(self.owner_id.clone()))?,
        );
        body.insert(
            "license".to_string(),
            codecs.write(&license_shape(), &Decoded::raw_from(&self.license)?)?,
        );
        Ok(Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::registry;
    use serde_json::json;

    #[test]
    fn test_null_license_is_present_container_empty_value() {
        let token = json!({"id": "br-1", "name": "Atlas Broking", "license": null});
        let broker = Broker::from_wire(&token, registry::global()).unwrap();
        // The container exists; it just holds nothing.
        assert!(broker.license.is_empty());
        assert_eq!(broker.license.get(), None);
    }

    #[test]
    fn test_nested_license_decodes() {
        let token = json!({
            "id": "br-1",
            "name": "Atlas Broking",
            "ownerId": "pl-3",
            "license": {"id": "lic-9", "issued": 1690000000000i64, "partnerId": "p-2"}
        });
        let broker = Broker::from_wire(&token, registry::global()).unwrap();
        let license = broker.license.get().unwrap();
        assert_eq!(license.id.get().map(String::as_str), Some("lic-9"));
        assert!(license.issued.is_present());
        assert_eq!(license.partner_id.get().map(String::as_str), Some("p-2"));
    }

    #[test]
    fn test_round_trip_with_nested_entity() {
        let token = json!({
            "id": "br-1",
            "name": "Atlas Broking",
            "ownerId": "pl-3",
            "license": {"id": "lic-9", "issued": 1690000000000i64, "partnerId": "p-2"}
        });
        let codecs = registry::global();
        let broker = Broker::from_wire(&token, codecs).unwrap();
        let encoded = broker.to_wire(codecs).unwrap();
        let again = Broker::from_wire(&encoded, codecs).unwrap();
        assert_eq!(broker, again);
        assert_eq!(
            again.license.get().unwrap().id.get().map(String::as_str),
            Some("lic-9")
        );
    }
}
