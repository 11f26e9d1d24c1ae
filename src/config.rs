/// Ceiling for the bounded discrete-log search that finishes every
/// decryption. Plaintexts (and every intermediate exponent a decryption
/// recovers) must stay below this value.
pub const DLOG_BOUND: u64 = 1 << 20;

/// Nominal multiplication budget `d` of the recursive masking layer.
/// Ciphertexts can be encrypted at levels `1..=LEVEL_BUDGET`; products
/// degrade gracefully up to level `2 * LEVEL_BUDGET`.
pub const LEVEL_BUDGET: u32 = 2;

/// Search ceiling for the intermediate exponents recovered while peeling
/// the recursive masking layer. A single multiplication accumulates pad
/// products of up to roughly `2 * PLAINTEXT_MODULUS^2` in its mask line,
/// and a few additions or small scalings on top of that still fit here.
/// Larger aggregates need a wider window.
pub const MASK_DLOG_BOUND: u64 = 1 << 23;

/// log2 of the plaintext modulus used by the recursive masking layer.
pub const PLAINTEXT_BITS: u32 = 10;

/// Modulus for all masked-field arithmetic. Plaintexts handed to the
/// leveled API are reduced modulo this value on decryption.
pub const PLAINTEXT_MODULUS: u64 = 1 << PLAINTEXT_BITS;
