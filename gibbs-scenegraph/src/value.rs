use serde::{Deserialize, Serialize};

/// Mark channel holding either one value broadcast to every item or one value per item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ScalarOrArray<T: Clone> {
    Scalar(T),
    Array(Vec<T>),
}

impl<T: Clone> ScalarOrArray<T> {
    pub fn as_iter(&self, scalar_len: usize) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            ScalarOrArray::Scalar(value) => Box::new(std::iter::repeat(value).take(scalar_len)),
            ScalarOrArray::Array(values) => Box::new(values.iter()),
        }
    }

    /// Number of stored values for arrays, `None` for scalars
    pub fn array_len(&self) -> Option<usize> {
        match self {
            ScalarOrArray::Scalar(_) => None,
            ScalarOrArray::Array(values) => Some(values.len()),
        }
    }
}

impl<T: Clone> From<Vec<T>> for ScalarOrArray<T> {
    fn from(values: Vec<T>) -> Self {
        ScalarOrArray::Array(values)
    }
}

impl<T: Clone> From<T> for ScalarOrArray<T> {
    fn from(value: T) -> Self {
        ScalarOrArray::Scalar(value)
    }
}

impl From<&str> for ScalarOrArray<String> {
    fn from(value: &str) -> Self {
        ScalarOrArray::Scalar(value.to_string())
    }
}
