//! The "next value" capability used by [`crate::Sequence`].
use std::net::{Ipv4Addr, Ipv6Addr};

use serde_json::Value;

use crate::error::{Error, Result};

/// A value that knows what comes after it.
///
/// Implement this for custom ordered types to drive a [`crate::Sequence`]
/// with them. Types that only sometimes have a successor (dynamic values)
/// return [`Error::NoSuccessor`].
pub trait Successor: Sized {
    fn successor(&self) -> Result<Self>;
}

macro_rules! impl_successor_for_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Successor for $ty {
            fn successor(&self) -> Result<Self> {
                self.checked_add(1).ok_or_else(|| Error::Overflow { value: self.to_string() })
            }
        }
    )*};
}

impl_successor_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Successor for char {
    fn successor(&self) -> Result<Self> {
        // skip the surrogate gap
        let next = match *self as u32 {
            0xD7FF => 0xE000,
            n => n + 1,
        };
        char::from_u32(next).ok_or_else(|| Error::Overflow { value: format!("{self:?}") })
    }
}

impl Successor for String {
    fn successor(&self) -> Result<Self> {
        succ_str(self)
    }
}

impl Successor for Ipv4Addr {
    fn successor(&self) -> Result<Self> {
        u32::from(*self)
            .checked_add(1)
            .map(Ipv4Addr::from)
            .ok_or_else(|| Error::Overflow { value: self.to_string() })
    }
}

impl Successor for Ipv6Addr {
    fn successor(&self) -> Result<Self> {
        u128::from(*self)
            .checked_add(1)
            .map(Ipv6Addr::from)
            .ok_or_else(|| Error::Overflow { value: self.to_string() })
    }
}

/// Integers and strings advance; every other JSON value has no successor.
impl Successor for Value {
    fn successor(&self) -> Result<Self> {
        match self {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return i.successor().map(Value::from);
                }
                if let Some(u) = n.as_u64() {
                    return u.successor().map(Value::from);
                }
                Err(Error::NoSuccessor { value: self.to_string() })
            }
            Value::String(s) => succ_str(s).map(Value::String),
            _ => Err(Error::NoSuccessor { value: self.to_string() }),
        }
    }
}

// ------------------------------ Strings ---------------------------------- //

/// Alphanumeric carry-increment: `"az"` → `"ba"`, `"zz"` → `"aaa"`,
/// `"a9"` → `"b0"`, `"1.9"` → `"2.0"`. Non-alphanumerics are carried over.
/// A string with no ASCII alphanumerics increments its last character.
fn succ_str(s: &str) -> Result<String> {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return Ok(String::new());
    }

    let Some(mut i) = chars.iter().rposition(|c| c.is_ascii_alphanumeric()) else {
        let last = chars.len() - 1;
        chars[last] = chars[last].successor()?;
        return Ok(chars.into_iter().collect());
    };

    loop {
        let (next, carry) = match chars[i] {
            'z' => ('a', Some('a')),
            'Z' => ('A', Some('A')),
            '9' => ('0', Some('1')),
            c => (char::from(c as u8 + 1), None),
        };
        chars[i] = next;
        let Some(carried) = carry else { break };

        match chars[..i].iter().rposition(|c| c.is_ascii_alphanumeric()) {
            Some(j) => i = j,
            None => {
                chars.insert(i, carried);
                break;
            }
        }
    }

    Ok(chars.into_iter().collect())
}
