//! Member enumeration over plain data records.
//!
//! Any `Serialize` type whose serialized form is an object counts as a record:
//! its members are the object's fields, in declaration order.
//!
//! ```
//! use ordered_enum::MemberEnumerable;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let point = Point { x: 1, y: 2 };
//! assert_eq!(point.members()?, ["x", "y"]);
//! assert_eq!(point.values_at(["y"])?, [serde_json::json!(2)]);
//! # Ok::<(), ordered_enum::Error>(())
//! ```
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub trait MemberEnumerable: Serialize {
    /// The record's fields as an ordered map. Unit structs are empty records.
    fn member_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            _ => Err(Error::NotARecord { record: std::any::type_name::<Self>().to_string() }),
        }
    }

    fn members(&self) -> Result<Vec<String>> {
        Ok(self.member_map()?.into_iter().map(|(name, _)| name).collect())
    }

    fn each_pair(&self) -> Result<Vec<(String, Value)>> {
        Ok(self.member_map()?.into_iter().collect())
    }

    fn values(&self) -> Result<Vec<Value>> {
        Ok(self.member_map()?.into_iter().map(|(_, value)| value).collect())
    }

    /// Values of `names`, in the order asked for.
    fn values_at<I, N>(&self, names: I) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let map = self.member_map()?;
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                // repeated names are allowed, so read rather than take
                map.get(name).cloned().ok_or_else(|| Error::NoMember {
                    member: name.to_string(),
                    record: std::any::type_name::<Self>().to_string(),
                })
            })
            .collect()
    }

    fn size(&self) -> Result<usize> {
        Ok(self.member_map()?.len())
    }
}

impl<T: Serialize + ?Sized> MemberEnumerable for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Serialize)]
    struct Response {
        status: u16,
        body: String,
        cached: bool,
    }

    #[derive(Serialize)]
    struct Nothing;

    fn response() -> Response {
        Response { status: 200, body: "ok".into(), cached: false }
    }

    #[test]
    fn enumerates_fields_in_declaration_order() {
        let record = response();
        assert_eq!(record.members().unwrap(), ["status", "body", "cached"]);
        assert_eq!(record.values().unwrap(), [json!(200), json!("ok"), json!(false)]);
        assert_eq!(
            record.each_pair().unwrap(),
            [
                ("status".to_string(), json!(200)),
                ("body".to_string(), json!("ok")),
                ("cached".to_string(), json!(false)),
            ]
        );
        assert_eq!(record.size().unwrap(), 3);
    }

    #[test]
    fn values_at_follows_the_requested_order() {
        let record = response();
        assert_eq!(record.values_at(["cached", "status", "cached"]).unwrap(), [
            json!(false),
            json!(200),
            json!(false),
        ]);
        assert!(record.values_at(Vec::<String>::new()).unwrap().is_empty());
    }

    #[test]
    fn unknown_members_are_errors() {
        let err = response().values_at(["status", "headers"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Record);
        assert!(err.to_string().starts_with("undefined member `headers` for "), "{err}");
    }

    #[test]
    fn unit_structs_are_empty_records() {
        assert_eq!(Nothing.size().unwrap(), 0);
        assert!(Nothing.members().unwrap().is_empty());
    }

    #[test]
    fn scalars_are_not_records() {
        let err = 42i64.members().unwrap_err();
        assert_eq!(err, Error::NotARecord { record: "i64".into() });
    }
}
