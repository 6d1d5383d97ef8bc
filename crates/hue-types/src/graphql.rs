use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};

use crate::color::ColorValue;

/// A color.
///
/// Accepts hex (`#rgb`, `#rrggbb`), `rgb()`, `hsl()` and CSS color names
/// on input; always serializes as lowercase `#rrggbb`.
#[Scalar(name = "ColorValue")]
impl ScalarType for ColorValue {
    // Variables and inline literals both arrive here.
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(s) => s.parse::<ColorValue>().map_err(InputValueError::custom),
            other => Err(InputValueError::expected_type(other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_hex())
    }
}
