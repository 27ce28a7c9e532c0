use std::fmt;

use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::runtime::Expression;
use liquid_core::{FilterReflection, Result as LiquidResult, Runtime, Value, ValueView};

use super::args::{array_values, evaluate_count, single_argument};
use crate::utils::slice;

#[derive(Debug)]
pub struct LastNFilter {
    n: Expression,
}

impl fmt::Display for LastNFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "last_n: {}", self.n)
    }
}

impl liquid_core::Filter for LastNFilter {
    fn evaluate(&self, input: &dyn ValueView, runtime: &dyn Runtime) -> LiquidResult<Value> {
        let n = evaluate_count("last_n", &self.n, runtime)?;
        let items = array_values("last_n", input)?;
        Ok(Value::Array(slice::last_n(n, &items)))
    }
}

/// Parse filter factory for last_n
#[derive(Debug, Clone)]
pub struct LastNFilterParser;

const PARAMETERS: &[ParameterReflection] = &[ParameterReflection {
    name: "n",
    description: "Number of items to keep",
    is_optional: false,
}];

impl FilterReflection for LastNFilterParser {
    fn name(&self) -> &str {
        "last_n"
    }

    fn description(&self) -> &str {
        "Returns the last n items of an array, in order"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        PARAMETERS
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for LastNFilterParser {
    fn parse(&self, args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        let n = single_argument("last_n", args)?;
        Ok(Box::new(LastNFilter { n }))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
