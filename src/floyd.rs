use crate::adapter::SelfMap;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// Iteration budget exceeded without meeting a cycle
    ///
    /// Only reachable when the map violates the working-domain contract;
    /// a genuine self-map always closes a cycle within the budget.
    DomainExhausted,
}

/// Find a colliding pair under `f` with constant extra memory
///
/// Returns `(x0, x1)` with `x0 != x1` and `f.calc(x0) == f.calc(x1)`, using
/// the two-pointer tortoise/hare walk from `start`. When `start` itself lies
/// on the cycle no two-preimage collision is reachable from it, and the
/// degenerate pair `(start, start)` comes back instead; callers detect the
/// equal pair and retry from a different start.
pub fn find_collision<F: SelfMap>(f: &F, start: u64) -> Result<(u64, u64), Error> {
    let budget = f.domain().saturating_add(1);

    // maybe we are lucky and start on a fixed point
    if f.calc(start) == start {
        return Ok((start, start));
    }

    let mut p1 = f.calc(start);
    let mut p2 = f.calc(f.calc(start));
    let mut count = 0_u64;
    while p1 != p2 {
        count += 1;
        if count > budget {
            return Err(Error::DomainExhausted);
        }
        p1 = f.calc(p1);
        p2 = f.calc(f.calc(p2));
    }

    // check whether the walk began inside the cycle
    for _ in 0..count * 2 {
        p1 = f.calc(p1);
        if p1 == start {
            return Ok((start, start));
        }
    }

    // walk the tail and the meeting point together until their successors meet
    let mut p1 = start;
    let mut steps = 0_u64;
    while f.calc(p1) != f.calc(p2) {
        steps += 1;
        if steps > budget {
            return Err(Error::DomainExhausted);
        }
        p1 = f.calc(p1);
        p2 = f.calc(p2);
    }

    Ok((p1, p2))
}
