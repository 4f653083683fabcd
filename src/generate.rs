//! Random, depth-bounded expression trees for property tests.
//!
//! Generation uses the "grow" method: every node independently becomes a leaf
//! or a binary node, with the leaf odds rising linearly from
//! [`GeneratorConfig::leaf_probability`] at the root to certainty at
//! [`GeneratorConfig::max_depth`]. The explicit depth counter bounds both the
//! recursion and the size of the tree, for every seed.

use std::ops::Range;

use rand::Rng;

use crate::expression::ParameterId;
use crate::real::Real;
use crate::{BinaryOperator, ConfigError, Expression};

/// Shape and leaf ranges of generated expressions.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// No generated tree has a [`depth`](Expression::depth) above this.
    pub max_depth: usize,
    /// Probability that the root is a leaf.
    pub leaf_probability: f64,
    /// Constants are integral values drawn uniformly from this range. The
    /// default skips 0 and 1 so that trivial identities and literal zero
    /// divisors stay rare.
    pub constant_range: Range<i32>,
    /// Parameters index `0..parameter_count`. Zero disables parameters.
    pub parameter_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            leaf_probability: 0.3,
            constant_range: 2..10,
            parameter_count: 5,
        }
    }
}

impl GeneratorConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_leaf_probability(mut self, leaf_probability: f64) -> Self {
        self.leaf_probability = leaf_probability;
        self
    }

    pub fn with_constant_range(mut self, constant_range: Range<i32>) -> Self {
        self.constant_range = constant_range;
        self
    }

    pub fn with_parameter_count(mut self, parameter_count: usize) -> Self {
        self.parameter_count = parameter_count;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.leaf_probability) {
            return Err(ConfigError::LeafProbability(self.leaf_probability));
        }
        if self.constant_range.is_empty() {
            return Err(ConfigError::EmptyConstantRange {
                start: self.constant_range.start,
                end: self.constant_range.end,
            });
        }
        Ok(())
    }

    /// Chance of emitting a leaf at `depth`. Reaches 1 at `max_depth`.
    fn leaf_probability_at(&self, depth: usize) -> f64 {
        if depth >= self.max_depth {
            return 1.0;
        }
        let progress = depth as f64 / self.max_depth as f64;
        self.leaf_probability + (1.0 - self.leaf_probability) * progress
    }
}

/// Validated generator. Generation cannot fail once this exists.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Expression {
        let expr = self.grow(rng, 0);
        log::trace!(
            "generated expression with {} nodes, depth {}",
            expr.node_count(),
            expr.depth()
        );
        expr
    }

    fn grow<R: Rng + ?Sized>(&self, rng: &mut R, depth: usize) -> Expression {
        if rng.random_bool(self.config.leaf_probability_at(depth)) {
            return self.leaf(rng);
        }
        let op = BinaryOperator::ALL[rng.random_range(0..BinaryOperator::ALL.len())];
        let lhs = self.grow(rng, depth + 1);
        let rhs = self.grow(rng, depth + 1);
        Expression::binary(op, lhs, rhs)
    }

    fn leaf<R: Rng + ?Sized>(&self, rng: &mut R) -> Expression {
        if self.config.parameter_count > 0 && rng.random_bool(0.5) {
            let index: ParameterId = rng.random_range(0..self.config.parameter_count);
            return Expression::Parameter(index);
        }
        let value = rng.random_range(self.config.constant_range.clone());
        // Exact for |value| < 2^24, which covers any sensible constant range.
        Expression::Constant(value as Real)
    }
}

/// Generates an expression with [`GeneratorConfig::default`].
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Expression {
    Generator::default().generate(rng)
}
