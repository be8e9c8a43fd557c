//! Wire conversions for bonds.

use serde_json::{Map as JsonMap, Value};

use crate::codec::{field, object, CodecRegistry, Decoded, FromWire, ToWire, TypeDescriptor};
use crate::error::CodecError;
use crate::shared::{from_epoch_millis, to_epoch_millis};

use super::Bond;

impl FromWire for Bond {
    fn from_wire(token: &Value, codecs: &CodecRegistry) -> Result<Self, CodecError> {
        let body = object(token)?;
        Ok(Self {
            id: codecs.read(&TypeDescriptor::Text, field(body, "id"))?.into_text()?,
            name: codecs.read(&TypeDescriptor::Text, field(body, "name"))?.into_text()?,
            issuer_id: codecs
                .read(&TypeDescriptor::Text, field(body, "issuerId"))?
                .into_text()?,
            face_value: codecs
                .read(&TypeDescriptor::Double, field(body, "faceValue"))?
                .into_double()?,
            interest_rate: codecs
                .read(&TypeDescriptor::Double, field(body, "interestRate"))?
                .into_double()?,
            issue_date: codecs
                .read(&TypeDescriptor::Long, field(body, "issueDate"))?
                .into_long()?
                .filter_map(from_epoch_millis),
            maturity_date: codecs
                .read(&TypeDescriptor::Long, field(body, "maturityDate"))?
                .into_long()?
                .filter_map(from_epoch_millis),
            volume: codecs
                .read(&TypeDescriptor::Long, field(body, "volume"))?
                .into_long()?,
        })
    }
}

impl ToWire for Bond {
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
            "issuerId".to_string(),
            codecs.write(&TypeDescriptor::Text, &Decoded::Text(self.issuer_id.clone()))?,
        );
        body.insert(
            "faceValue".to_string(),
            codecs.write(&TypeDescriptor::Double, &Decoded::Double(self.face_value.clone()))?,
        );
        body.insert(
            "interestRate".to_string(),
            codecs.write(
                &TypeDescriptor::Double,
                &Decoded::Double(self.interest_rate.clone()),
            )?,
        );
        body.insert(
            "issueDate".to_string(),
            codecs.write(
                &TypeDescriptor::Long,
                &Decoded::Long(self.issue_date.as_ref().map(to_epoch_millis)),
            )?,
        );
        body.insert(
            "maturityDate".to_string(),
            codecs.write(
                &TypeDescriptor::Long,
                &Decoded::Long(self.maturity_date.as_ref().map(to_epoch_millis)),
            )?,
        );
        body.insert(
            "volume".to_string(),
            codecs.write(&TypeDescriptor::Long, &Decoded::Long(self.volume.clone()))?,
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
    fn test_integral_literal_for_double_field() {
        // The backend emits face values without a decimal point.
        let token = json!({"id": "b-1", "faceValue": 100, "interestRate": 0.035});
        let bond = Bond::from_wire(&token, registry::global()).unwrap();
        assert_eq!(bond.face_value.get(), Some(&100.0));
        assert_eq!(bond.interest_rate.get(), Some(&0.035));
    }

    #[test]
    fn test_round_trip() {
        let token = json!({
            "id": "b-1",
            "name": "Staatsanleihe 2030",
            "issuerId": null,
            "faceValue": 100.0,
            "interestRate": 0.035,
            "issueDate": 1600000000000i64,
            "maturityDate": 1900000000000i64,
            "volume": 5000
        });
        let codecs = registry::global();
        let bond = Bond::from_wire(&token, codecs).unwrap();
        let encoded = bond.to_wire(codecs).unwrap();
        let again = Bond::from_wire(&encoded, codecs).unwrap();
        assert_eq!(bond, again);
        assert_eq!(again.volume.get(), Some(&5000));
    }
}
