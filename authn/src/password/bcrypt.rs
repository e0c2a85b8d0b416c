use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses bcrypt). The cost
/// factor is fixed at construction so every hash produced by one instance
/// carries the same work factor.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Default bcrypt cost factor.
    pub const DEFAULT_COST: u32 = 10;

    // bcrypt rejects cost factors outside this range.
    const MIN_COST: u32 = 4;
    const MAX_COST: u32 = 31;

    /// Create a new password hasher with the default cost factor.
    ///
    /// # Returns
    /// PasswordHasher instance configured with the default work factor
    pub fn new() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }

    /// Create a password hasher with an explicit cost factor.
    ///
    /// Out-of-range values are clamped into bcrypt's valid range rather than
    /// rejected, so a misconfigured deployment degrades to a legal work factor
    /// instead of failing every hash at call time.
    ///
    /// # Arguments
    /// * `cost` - Desired bcrypt cost factor (clamped to 4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost: cost.clamp(Self::MIN_COST, Self::MAX_COST),
        }
    }

    /// The cost factor this hasher applies.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password securely.
    ///
    /// A fresh random salt is generated per call; salt and cost factor are
    /// embedded in the returned hash string, so verification needs no state
    /// beyond the hash itself.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt format hash (includes algorithm version, cost, and salt)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Recomputes the hash using the salt and cost embedded in `hash` and
    /// compares the results. A malformed or truncated hash verifies as false
    /// rather than erroring, so callers cannot distinguish a corrupt stored
    /// credential from a wrong password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in modular crypt format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
