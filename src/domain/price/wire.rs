//! Wire conversions for price spreads.

use serde_json::{Map as JsonMap, Value};

use crate::codec::{field, object, CodecRegistry, Decoded, FromWire, ToWire, TypeDescriptor};
use crate::error::CodecError;
use crate::shared::{from_epoch_millis, to_epoch_millis};

use super::PriceSpread;

impl FromWire for PriceSpread {
    fn from_wire(token: &Value, codecs: &CodecRegistry) -> Result<Self, CodecError> {
        let body = object(token)?;
        Ok(Self {
            security_identifier: codecs
                .read(&TypeDescriptor::Text, field(body, "securityIdentifier"))?
                .into_text()?,
            bid_price: codecs
                .read(&TypeDescriptor::Double, field(body, "bidPrice"))?
                .into_double()?,
            bid_size: codecs
                .read(&TypeDescriptor::Long, field(body, "bidSize"))?
                .into_long()?,
            ask_price: codecs
                .read(&TypeDescriptor::Double, field(body, "askPrice"))?
                .into_double()?,
            ask_size: codecs
                .read(&TypeDescriptor::Long, field(body, "askSize"))?
                .into_long()?,
            date: codecs
                .read(&TypeDescriptor::Long, field(body, "date"))?
                .into_long()?
                .filter_map(from_epoch_millis),
        })
    }
}

impl ToWire for PriceSpread {
    fn to_wire(&self, codecs: &CodecRegistry) -> Result<Value, CodecError> {
        let mut body = JsonMap::new();
        body.insert(
            "securityIdentifier".to_string(),
            codecs.write(
                &TypeDescriptor::Text,
                &Decoded::Text(self.security_identifier.clone()),
            )?,
        );
        body.insert(
            "bidPrice".to_string(),
            codecs.write(&TypeDescriptor::Double, &Decoded::Double(self.bid_price.clone()))?,
        );
        body.insert(
            "bidSize".to_string(),
            codecs.write(&TypeDescriptor::Long, &Decoded::Long(self.bid_size.clone()))?,
        );
        body.insert(
            "askPrice".to_string(),
            codecs.write(&TypeDescriptor::Double, &Decoded::Double(self.ask_price.clone()))?,
        );
        body.insert(
            "askSize".to_string(),
            codecs.write(&TypeDescriptor::Long, &Decoded::Long(self.ask_size.clone()))?,
        );
        body.insert(
            "date".to_string(),
            codecs.write(
                &TypeDescriptor::Long,
                &Decoded::Long(self.date.as_ref().map(to_epoch_millis)),
            )?,
        );
        Ok(Value::Object(body))
    }
}
