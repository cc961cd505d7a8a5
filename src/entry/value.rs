use super::ParseItem;
use crate::error::ParseValueError;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// A raw value, as written in the file with surrounding quotes removed.
///
/// No type conversion happens while parsing, use [`Value::to`] to reinterpret the text.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(transparent)]
pub struct Value(String);

impl Value {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Try to convert the value to the given type.
    pub fn to<T: ParseItem>(&self) -> Result<T, ParseValueError> {
        T::from_str(&self.0)
    }
}

impl From<&'_ str> for Value {
    fn from(value: &str) -> Value {
        Value(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value(value)
    }
}

impl From<Value> for String {
    fn from(value: Value) -> Self {
        value.0
    }
}

impl Deref for Value {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[test]
fn test_value_to() {
    assert_eq!(Value::from("42").to::<u16>(), Ok(42));
    assert_eq!(Value::from("-7").to::<i64>(), Ok(-7));
    assert_eq!(Value::from("true").to::<bool>(), Ok(true));
    assert_eq!(Value::from("false").to::<bool>(), Ok(false));
    assert_eq!(Value::from("1.5").to::<f32>(), Ok(1.5));
    assert_eq!(
        Value::from("127.0.0.1").to::<std::net::Ipv4Addr>(),
        Ok(std::net::Ipv4Addr::LOCALHOST)
    );
    assert_eq!(
        Value::from("some text").to::<String>(),
        Ok("some text".to_string())
    );

    let err = Value::from("yes").to::<bool>().unwrap_err();
    assert_eq!(err.ty, "bool");
    assert_eq!(err.value, "yes");
    assert_eq!(err.to_string(), r#"Can't parse "yes" as bool"#);

    assert!(Value::from("300").to::<u8>().is_err());
}
