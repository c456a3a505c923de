pub struct Config {
    /// Output verbosity: 0 full, 1 compact, 2 summary only.
    pub quiet: u8,
    /// Fixed seed for the score jitter. Makes runs reproducible.
    pub seed: Option<u64>,
}
