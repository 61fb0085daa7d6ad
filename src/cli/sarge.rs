use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::{OutputArg, UnknownValueType, ValueType};

impl ArgumentType for OutputArg {
    type Error = Infallible;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        Some(Ok(val.map(OutputArg::parse).unwrap_or_default()))
    }

    fn default_value() -> Option<Self> {
        Some(OutputArg::default())
    }
}

impl ArgumentType for ValueType {
    type Error = UnknownValueType;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let val = val?;
        Some(ValueType::from_str(val).ok_or_else(|| UnknownValueType(val.to_string())))
    }

    fn default_value() -> Option<Self> {
        Some(ValueType::default())
    }
}
