//! Wire conversions for portfolios.

use serde_json::{Map as JsonMap, Value};

use crate::codec::{field, object, CodecRegistry, Decoded, FromWire, ToWire, TypeDescriptor};
use crate::error::CodecError;

use super::Portfolio;

fn positions_shape() -> TypeDescriptor {
    TypeDescriptor::list_of(TypeDescriptor::opaque("Position"))
}

impl FromWire for Portfolio {
    fn from_wire(token: &Value, codecs: &CodecRegistry) -> Result<Self, CodecError> {
        let body = object(token)?;
        Ok(Self {
            id: codecs.read(&TypeDescriptor::Text, field(body, "id"))?.into_text()?,
            positions: codecs
                .read(&positions_shape(), field(body, "positions"))?
                .into_list_of()?,
        })
    }
}

impl ToWire for Portfolio {
    fn to_wire(&self, codecs: &CodecRegistry) -> Result<Value, CodecError> {
        let mut body = JsonMap::new();
        body.insert(
            "id".to_string(),
            codecs.write(&TypeDescriptor::Text, &Decoded::Text(self.id.clone()))?,
        );
        body.insert(
            "positions".to_string(),
            codecs.write(&positions_shape(), &Decoded::list_from(&self.positions)?)?,
        );
        Ok(Value::Object(body))
    }
}
