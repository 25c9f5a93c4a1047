use alloc::vec::Vec;

use hashbrown::HashMap;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::adapter::SelfMap;

/// Chain endpoints mapped to every start whose chain reaches them
type Table = HashMap<u64, Vec<u64>>;

/// Precomputed chains for time-memory-tradeoff preimage search
///
/// One table per perturbation index `i`, where table `i` records `m` chains
/// of exactly `t` applications of the perturbed step
/// `curr = f.calc((curr + i) % N)`. The tables are built once and never
/// mutated afterwards, so online lookups may be shared freely.
pub struct HellmanTables {
    tables: Vec<Table>,
    t: u64,
}

impl HellmanTables {
    /// Build `t` tables of `m` chains each over the map `f`
    ///
    /// Costs `m * t * t` map evaluations. Chain starts are sampled uniformly
    /// from the working domain; colliding endpoints within a table keep every
    /// start that reached them.
    pub fn preprocess<F: SelfMap>(f: &F, m: u64, t: u64, rng: &mut ThreadRng) -> Self {
        let domain = f.domain();
        let mut tables: Vec<Table> = Vec::with_capacity(t as usize);

        for i in 0..t {
            let mut table = Table::new();

            for _ in 0..m {
                let start = rng.gen_range::<u64, u64, u64>(0, domain);
                let mut curr = start;
                for _ in 0..t {
                    curr = f.calc((curr + i) % domain);
                }
                table.entry(curr).or_insert_with(Vec::new).push(start);
            }

            tables.push(table);
        }

        Self {
            tables: tables,
            t: t,
        }
    }

    /// Search for a preimage of `y` under the map the tables were built on
    ///
    /// Walks up to `t` perturbed steps forward from `y` in each table; an
    /// endpoint hit replays the recorded chains and confirms a candidate
    /// before returning it. The returned point `x` satisfies
    /// `f.calc(x) == y`; translate it with the adapter's `recover_x` when the
    /// oracle's domain and range differ. `None` means the tables do not
    /// cover `y`, an expected outcome used for success-rate statistics.
    pub fn online<F: SelfMap>(&self, f: &F, y: u64) -> Option<u64> {
        let domain = f.domain();

        for (index, table) in self.tables.iter().enumerate() {
            let i = index as u64;
            let mut curr = y;

            for _ in 0..self.t {
                if let Some(starts) = table.get(&curr) {
                    for &start in starts.iter() {
                        let mut a = start;
                        for _ in 0..self.t {
                            let next = f.calc((a + i) % domain);
                            if next == y {
                                return Some((a + i) % domain);
                            }
                            a = next;
                        }
                    }
                }
                curr = f.calc((curr + i) % domain);
            }
        }

        None
    }

    /// Chain length and table count the tables were built with
    pub fn chain_len(&self) -> u64 {
        self.t
    }
}
