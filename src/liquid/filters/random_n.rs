use std::fmt;
use std::sync::{Arc, Mutex};

use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::runtime::Expression;
use liquid_core::{Error, FilterReflection, Result as LiquidResult, Runtime, Value, ValueView};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::args::{array_values, evaluate_count, single_argument};
use crate::utils::slice;

/// Picks `n` distinct items of an array in random order
#[derive(Debug)]
pub struct RandomNFilter {
    n: Expression,
    rng: Arc<Mutex<StdRng>>,
}

impl fmt::Display for RandomNFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "random_n: {}", self.n)
    }
}

impl liquid_core::Filter for RandomNFilter {
    fn evaluate(&self, input: &dyn ValueView, runtime: &dyn Runtime) -> LiquidResult<Value> {
        let n = evaluate_count("random_n", &self.n, runtime)?;
        let items = array_values("random_n", input)?;

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| Error::with_msg("random_n generator is poisoned"))?;
        Ok(Value::Array(slice::random_n(n, &items, &mut *rng)))
    }
}

/// Parse filter factory for random_n.
///
/// Every use of the filter draws from the same generator, so a seeded parser
/// renders a whole site reproducibly.
#[derive(Debug, Clone)]
pub struct RandomNFilterParser {
    rng: Arc<Mutex<StdRng>>,
}

impl RandomNFilterParser {
    /// Seeded from `seed`, or from the OS when `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        RandomNFilterParser {
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

const PARAMETERS: &[ParameterReflection] = &[ParameterReflection {
    name: "n",
    description: "Number of items to pick",
    is_optional: false,
}];

impl FilterReflection for RandomNFilterParser {
    fn name(&self) -> &str {
        "random_n"
    }

    fn description(&self) -> &str {
        "Returns n distinct items of an array in random order"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        PARAMETERS
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for RandomNFilterParser {
    fn parse(&self, args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        let n = single_argument("random_n", args)?;
        Ok(Box::new(RandomNFilter {
            n,
            rng: Arc::clone(&self.rng),
        }))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
