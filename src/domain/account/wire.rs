//! Wire conversions for bank accounts.

use serde_json::{Map as JsonMap, Value};

use crate::codec::{field, object, CodecRegistry, Decoded, FromWire, ToWire, TypeDescriptor};
use crate::error::CodecError;

use super::BankAccount;

impl FromWire for BankAccount {
    fn from_wire(token: &Value, codecs: &CodecRegistry) -> Result<Self, CodecError> {
        let body = object(token)?;
        Ok(Self {
            id: codecs.read(&TypeDescriptor::Text, field(body, "id"))?.into_text()?,
            cash: codecs
                .read(&TypeDescriptor::Double, field(body, "cash"))?
                .into_double()?,
        })
    }
}

impl ToWire for BankAccount {
    fn to_wire(&self, codecs: &CodecRegistry) -> Result<Value, CodecError> {
        let mut body = JsonMap::new();
        body.insert(
            "id".to_string(),
            codecs.write(&TypeDescriptor::Text, &Decoded::Text(self.id.clone()))?,
        );
        body.insert(
            "cash".to_string(),
            codecs.write(&TypeDescriptor::Double, &Decoded::Double(self.cash.clone()))?,
        );
        Ok(Value::Object(body))
    }
}
