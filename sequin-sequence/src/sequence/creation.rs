use super::sequence_core::Sequence;
use super::value::Value;

impl<T> Sequence<T> {
    /// Construct an empty sequence.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Construct a sequence from an ordered collection of values.
    ///
    /// The values are moved into a fresh backing store; later changes to
    /// the source cannot affect the sequence.
    pub fn of(values: impl IntoIterator<Item = T>) -> Self {
        values.into_iter().collect()
    }

    pub(crate) fn new(values: Vec<T>) -> Self {
        let value = match values.len() {
            0 => Value::Empty,
            1 => Value::One(values.into_iter().next().unwrap()),
            _ => Value::Many(values.into()),
        };
        Sequence { value }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        Self::new(values.into())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
