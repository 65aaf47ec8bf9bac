//! `serde` support.
//!
//! Both deques serialize as a sequence of their live elements. Deserializing
//! a `FixedDeque<T, N>` rejects sequences longer than `N`; an `EmptyDeque`
//! only accepts an empty sequence.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::{EmptyDeque, FixedDeque};

impl<T: Serialize, const N: usize> Serialize for FixedDeque<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedDeque<T, N>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DequeVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> Visitor<'de> for DequeVisitor<T, N>
        where
            T: Deserialize<'de> + Default,
        {
            type Value = FixedDeque<T, N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of at most {} elements", N)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut deque = FixedDeque::new();
                while let Some(item) = seq.next_element()? {
                    if deque.try_append(item).is_err() {
                        return Err(de::Error::invalid_length(N + 1, &self));
                    }
                }
                Ok(deque)
            }
        }

        deserializer.deserialize_seq(DequeVisitor::<T, N>(PhantomData))
    }
}

impl<T> Serialize for EmptyDeque<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_seq(Some(0))?.end()
    }
}

impl<'de, T> Deserialize<'de> for EmptyDeque<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EmptyVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for EmptyVisitor<T> {
            type Value = EmptyDeque<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an empty sequence")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(1, &self));
                }
                Ok(EmptyDeque::new())
            }
        }

        deserializer.deserialize_seq(EmptyVisitor(PhantomData))
    }
}
