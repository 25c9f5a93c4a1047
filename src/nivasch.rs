use alloc::vec;
use alloc::vec::Vec;

use crate::adapter::SelfMap;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// Stack count must be non-zero
    InvalidStackCount,
    /// Iteration budget exceeded without detecting a repeat
    DomainExhausted,
}

/// Find a point on the eventual cycle of iterating `f` from `start`
///
/// Keeps `k` stacks, each strictly decreasing from bottom to top, with every
/// visited point routed to `stacks[p % k]`. A point found on top of its stack
/// after the larger entries are popped has been visited before, which can
/// only happen on the cycle. Larger `k` lowers the detection latency past the
/// first cycle entry at the price of more resident stack entries.
///
/// Unlike the two-pointer collision walk this returns a single on-cycle
/// point, not a colliding pair.
pub fn find_cycle<F: SelfMap>(f: &F, k: u64, start: u64) -> Result<u64, Error> {
    if k == 0 {
        return Err(Error::InvalidStackCount);
    }

    let mut stacks: Vec<Vec<u64>> = vec![Vec::new(); k as usize];
    stacks[(start % k) as usize].push(start);

    // a repeat must show up within the tail plus two laps of the cycle
    let budget = f.domain().saturating_mul(2).saturating_add(2);

    let mut next = start;
    for _ in 0..budget {
        next = f.calc(next);
        let stack = &mut stacks[(next % k) as usize];

        while let Some(&top) = stack.last() {
            if top > next {
                stack.pop();
            } else {
                break;
            }
        }

        match stack.last() {
            Some(&top) if top == next => return Ok(next),
            _ => stack.push(next),
        }
    }

    Err(Error::DomainExhausted)
}
