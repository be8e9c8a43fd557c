//! Wire conversions for companies.

use serde_json::{Map as JsonMap, Value};

use crate::codec::{field, object, CodecRegistry, Decoded, FromWire, ToWire, TypeDescriptor};
use crate::error::CodecError;
use crate::shared::{from_epoch_millis, to_epoch_millis};

use super::Company;

impl FromWire for Company {
    fn from_wire(token: &Value, codecs: &CodecRegistry) -> Result<Self, CodecError> {
        let body = object(token)?;
        Ok(Self {
            id: codecs.read(&TypeDescriptor::Text, field(body, "id"))?.into_text()?,
            name: codecs.read(&TypeDescriptor::Text, field(body, "name"))?.into_text()?,
            securities_account_id: codecs
                .read(&TypeDescriptor::Text, field(body, "securitiesAccountId"))?
                .into_text()?,
            bank_account_id: codecs
                .read(&TypeDescriptor::Text, field(body, "bankAccountId"))?
                .into_text()?,
            listed_since: codecs
                .read(&TypeDescriptor::Long, field(body, "listedSince"))?
                .into_long()?
                .filter_map(from_epoch_millis),
        })
    }
}

impl ToWire for Company {
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
            "securitiesAccountId".to_string(),
            codecs.write(
                &TypeDescriptor::Text,
                &Decoded::Text(self.securities_account_id.clone()),
            )?,
        );
        body.insert(
            "bankAccountId".to_string(),
            codecs.write(
                &TypeDescriptor::Text,
                &Decoded::Text(self.bank_account_id.clone()),
            )?,
        );
        body.insert(
            "listedSince".to_string(),
            codecs.write(
                &TypeDescriptor::Long,
                &Decoded::Long(self.listed_since.as_ref().map(to_epoch_millis)),
            )?,
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
    fn test_decode_full_company() {
        let token = json!({
            "id": "c-77",
            "name": "Mondbahn AG",
            "securitiesAccountId": "sa-1",
            "bankAccountId": "ba-1",
            "listedSince": 1700000000123i64
        });
        let company = Company::from_wire(&token, registry::global()).unwrap();
        assert_eq!(company.name(), Some("Mondbahn AG"));
        assert!(company.listed_since.is_present());
    }

    #[test]
    fn test_null_fields_decode_empty() {
        let token = json!({"id": "c-77", "name": null, "listedSince": null});
        let company = Company::from_wire(&token, registry::global()).unwrap();
        assert!(company.name.is_empty());
        assert!(company.listed_since.is_empty());
        assert!(company.securities_account_id.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_identity() {
        let token = json!({
            "id": "c-77",
            "name": "Mondbahn AG",
            "securitiesAccountId": null,
            "bankAccountId": null,
            "listedSince": 1700000000123i64
        });
        let codecs = registry::global();
        let company = Company::from_wire(&token, codecs).unwrap();
        let encoded = company.to_wire(codecs).unwrap();
        let again = Company::from_wire(&encoded, codecs).unwrap();
        assert_eq!(company, again);
    }
}
