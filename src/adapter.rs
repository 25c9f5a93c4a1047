use crate::prf::PrfOracle;

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidConfiguration,
}

/// A function from a finite working domain onto itself
///
/// The seam between the oracle side and the cycle/tradeoff engines. Synthetic
/// maps with known structure implement this directly in tests.
pub trait SelfMap {
    /// Apply the map to a working-space point
    fn calc(&self, x: u64) -> u64;

    /// Number of points in the working domain
    fn domain(&self) -> u64;
}

/// View of a PRF oracle as a self-map of one working size
///
/// Handles all three domain/range shapes: a restricting oracle reduces inputs
/// modulo the domain, an expanding oracle mixes the iterate into the query
/// argument so iteration keeps exploring the larger input space, and an
/// equal-size oracle passes through unchanged.
pub struct DomainAdapter<'a, O: PrfOracle> {
    oracle: &'a O,
}

impl<'a, O: PrfOracle> DomainAdapter<'a, O> {
    /// Wrap an oracle, rejecting configurations without birthday coverage
    ///
    /// Requires `domain <= range^2` and `range <= domain^2`; outside those
    /// bounds the derived map has no collision guarantee. The expanding
    /// transform must also stay inside `u64`.
    pub fn new(oracle: &'a O) -> Result<Self, Error> {
        let domain = oracle.domain() as u128;
        let range = oracle.range() as u128;

        if domain > range * range || range > domain * domain {
            return Err(Error::InvalidConfiguration);
        }

        // headroom for x + ((x + 1) % domain) * range
        if domain > range && (domain - 1) * (range + 1) > core::u64::MAX as u128 {
            return Err(Error::InvalidConfiguration);
        }

        Ok(Self { oracle: oracle })
    }

    /// Translate a working-space point back to the oracle's native input
    ///
    /// For a point `x` found by a search over `calc`, returns `x'` with
    /// `oracle.evaluate(x') == self.calc(x)`.
    pub fn recover_x(&self, x: u64) -> u64 {
        let domain = self.oracle.domain();
        let range = self.oracle.range();

        if domain < range {
            x % domain
        } else if domain > range {
            x + ((x + 1) % domain) * range
        } else {
            x
        }
    }
}

impl<'a, O: PrfOracle> SelfMap for DomainAdapter<'a, O> {
    fn calc(&self, x: u64) -> u64 {
        let domain = self.oracle.domain();
        let range = self.oracle.range();

        if domain < range {
            self.oracle.evaluate(x % domain)
        } else if domain > range {
            self.oracle.evaluate(x + ((x + 1) % domain) * range)
        } else {
            self.oracle.evaluate(x)
        }
    }

    fn domain(&self) -> u64 {
        self.oracle.domain()
    }
}
