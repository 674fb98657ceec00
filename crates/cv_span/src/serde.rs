use serde_core::{Serialize, Serializer};

use crate::{View, ViewMut};

// Views serialize as plain sequences. There is no `Deserialize`: a view
// cannot own the elements a deserializer would produce.

impl<T: Serialize, const E: usize> Serialize for View<'_, T, E> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<T: Serialize, const E: usize> Serialize for ViewMut<'_, T, E> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::{View, ViewMut};

    #[test]
    fn serialize_as_sequence() {
        let v = vec![1, 2, 3, 4, 5];
        let view = View::from(&v);

        assert_eq!(serde_json::to_string(&view).unwrap(), "[1,2,3,4,5]");
        assert_eq!(serde_json::to_string(&view.subspan(1, 3)).unwrap(), "[2,3,4]");
        assert_eq!(serde_json::to_string(&View::<u8>::empty()).unwrap(), "[]");
    }

    #[test]
    fn serialize_mutable_view() {
        let mut arr = ["a", "b"];
        let view = ViewMut::from_array(&mut arr);

        assert_eq!(serde_json::to_string(&view).unwrap(), r#"["a","b"]"#);
    }
}
