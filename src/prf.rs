use core::convert::TryInto;

use craes::aes;

/// Maximum byte width for the domain or range of an [`Aes128Prf`]
///
/// Keeps every published size, and the reduction modulus, inside a `u64`.
pub const MAX_SIZE_BYTES: usize = 7;

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidLength,
}

/// Keyed PRF oracle over fixed-size integer domains
///
/// Exposes a single query operation and the published cardinalities of the
/// input and output spaces. Everything else about the function is opaque.
pub trait PrfOracle {
    /// Query the oracle on a single point
    fn evaluate(&self, x: u64) -> u64;

    /// Number of elements in the input space
    fn domain(&self) -> u64;

    /// Number of elements in the output space
    fn range(&self) -> u64;

    /// Byte width for uniformly sampling input-space elements
    fn domain_bytes(&self) -> usize;

    /// Byte width of an output-space element
    fn range_bytes(&self) -> usize;
}

/// PRF realization backed by AES-128 with a fixed key
///
/// Queries encrypt the input as a big-endian block and reduce the big-endian
/// output block modulo the range size.
pub struct Aes128Prf {
    key: [u8; aes::KEY_LEN_128],
    domain: u64,
    range: u64,
    domain_bytes: usize,
    range_bytes: usize,
}

impl Aes128Prf {
    /// Create a PRF with equal domain and range of `block_bytes` bytes
    pub fn new(key: [u8; aes::KEY_LEN_128], block_bytes: usize) -> Result<Self, Error> {
        Self::with_sizes(key, block_bytes, block_bytes)
    }

    /// Create a PRF with distinct domain and range byte widths
    pub fn with_sizes(
        key: [u8; aes::KEY_LEN_128],
        domain_bytes: usize,
        range_bytes: usize,
    ) -> Result<Self, Error> {
        if domain_bytes == 0
            || range_bytes == 0
            || domain_bytes > MAX_SIZE_BYTES
            || range_bytes > MAX_SIZE_BYTES
        {
            return Err(Error::InvalidLength);
        }

        Ok(Self {
            key: key,
            domain: 1_u64 << (8 * domain_bytes),
            range: 1_u64 << (8 * range_bytes),
            domain_bytes: domain_bytes,
            range_bytes: range_bytes,
        })
    }
}

impl PrfOracle for Aes128Prf {
    fn evaluate(&self, x: u64) -> u64 {
        let mut block = [0_u8; aes::BLOCK_LEN];
        block[8..].copy_from_slice(&x.to_be_bytes());
        let out = aes::aes_128(&block, &self.key);
        u64::from_be_bytes(out[8..].try_into().unwrap()) % self.range
    }

    fn domain(&self) -> u64 {
        self.domain
    }

    fn range(&self) -> u64 {
        self.range
    }

    fn domain_bytes(&self) -> usize {
        self.domain_bytes
    }

    fn range_bytes(&self) -> usize {
        self.range_bytes
    }
}
