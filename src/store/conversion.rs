// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::{AxonError, Value};

impl TryFrom<Value> for String {
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(AxonError::TypeError {
                message: format!("Expected string, got {:?}", value),
                line: 0,
                column: 0,
                hint: Some("Use a string value in your parameter file".into()),
                code: Some(401),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(AxonError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                column: 0,
                hint: Some("Use a number value in your parameter file".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as f32),
            _ => Err(AxonError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                column: 0,
                hint: Some("Use a number value in your parameter file".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i32),
            _ => Err(AxonError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                column: 0,
                hint: Some("Use a number value in your parameter file".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i64),
            _ => Err(AxonError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                column: 0,
                hint: Some("Use a number value in your parameter file".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u32::MAX as f64 {
                    Ok(n as u32)
                } else {
                    Err(AxonError::TypeError {
                        message: format!("Number {} out of range for u32", n),
                        line: 0,
                        column: 0,
                        hint: Some("Use a number between 0 and 4294967295".into()),
                        code: Some(403),
                    })
                }
            }
            _ => Err(AxonError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                column: 0,
                hint: Some("Use a number value in your parameter file".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u64::MAX as f64 {
                    Ok(n as u64)
                } else {
                    Err(AxonError::TypeError {
                        message: format!("Number {} out of range for u64", n),
                        line: 0,
                        column: 0,
                        hint: Some("Use a positive number within u64 range".into()),
                        code: Some(404),
                    })
                }
            }
            _ => Err(AxonError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                column: 0,
                hint: Some("Use a number value in your parameter file".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for usize {
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n.is_finite() {
                    Ok(n as usize)
                } else {
                    Err(AxonError::TypeError {
                        message: format!("Number {} out of range for usize", n),
                        line: 0,
                        column: 0,
                        hint: Some("Use a positive integer".into()),
                        code: Some(405),
                    })
                }
            }
            _ => Err(AxonError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                column: 0,
                hint: Some("Use a number value in your parameter file".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(AxonError::TypeError {
                message: format!("Expected boolean, got {:?}", value),
                line: 0,
                column: 0,
                hint: None,
                code: Some(406),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = AxonError>,
{
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Sequence(items) => {
                let mut result = Vec::new();
                for item in items {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            _ => Err(AxonError::TypeError {
                message: format!("Expected sequence, got {:?}", value),
                line: 0,
                column: 0,
                hint: Some("Use a sequence [...] in your parameter file".into()),
                code: Some(407),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = AxonError>,
{
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = AxonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(entries) => Ok(entries),
            _ => Err(AxonError::TypeError {
                message: format!("Expected mapping, got {:?}", value),
                line: 0,
                column: 0,
                hint: Some("Use a mapping { ... } in your parameter file".into()),
                code: Some(410),
            }),
        }
    }
}
