mod table;
mod value;

use crate::error::ParseValueError;
use std::any::type_name;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
pub use table::Table;
pub use value::Value;

/// Types a stored value can be reinterpreted as.
pub trait ParseItem: Sized {
    /// Try to cast the string into a concrete type
    fn from_str(item: &str) -> Result<Self, ParseValueError>;
}

macro_rules! from_str {
	(for) => ();

	(for $ty:ident $($rest:tt)*) => (
		from_str!($ty);
		from_str!(for $($rest)*);
	);

	($ty:ident) => (
		impl ParseItem for $ty {
            fn from_str(item: &str) -> Result<Self, ParseValueError> {
                item.parse::<$ty>().map_err(|_| ParseValueError::new(type_name::<Self>(), item))
            }
		}
	);
}

from_str!(for IpAddr Ipv4Addr Ipv6Addr SocketAddr SocketAddrV4 SocketAddrV6);
from_str!(for i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64 char);

impl ParseItem for bool {
    fn from_str(item: &str) -> Result<Self, ParseValueError> {
        match item {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ParseValueError::new(type_name::<Self>(), item)),
        }
    }
}

impl ParseItem for String {
    fn from_str(item: &str) -> Result<Self, ParseValueError> {
        Ok(item.into())
    }
}
