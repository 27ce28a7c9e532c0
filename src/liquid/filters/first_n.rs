use std::fmt;

use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::runtime::Expression;
use liquid_core::{FilterReflection, Result as LiquidResult, Runtime, Value, ValueView};

use super::args::{array_values, evaluate_count, single_argument};
use crate::utils::slice;

#[derive(Debug)]
pub struct FirstNFilter {
    n: Expression,
}

impl fmt::Display for FirstNFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "first_n: {}", self.n)
    }
}

impl liquid_core::Filter for FirstNFilter {
    fn evaluate(&self, input: &dyn ValueView, runtime: &dyn Runtime) -> LiquidResult<Value> {
        let n = evaluate_count("first_n", &self.n, runtime)?;
        let items = array_values("first_n", input)?;
        Ok(Value::Array(slice::first_n(n, &items)))
    }
}

/// Parse filter factory for first_n
#[derive(Debug, Clone)]
pub struct FirstNFilterParser;

const PARAMETERS: &[ParameterReflection] = &[ParameterReflection {
    name: "n",
    description: "Number of items to keep",
    is_optional: false,
}];

impl FilterReflection for FirstNFilterParser {
    fn name(&self) -> &str {
        "first_n"
    }

    fn description(&self) -> &str {
        "Returns the first n items of an array"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        PARAMETERS
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for FirstNFilterParser {
    fn parse(&self, args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        let n = single_argument("first_n", args)?;
        Ok(Box::new(FirstNFilter { n }))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
