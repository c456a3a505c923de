/// One network as seen in raw scan output: a name and the
/// platform-specific security label, not yet classified.
///
/// Observations keep their emitted order and are never deduplicated; a
/// network can legitimately appear on several channels or BSSIDs with
/// different observed security.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkObservation {
    pub name: String,
    pub raw_security: String,
}

impl NetworkObservation {
    pub fn new(name: impl Into<String>, raw_security: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_security: raw_security.into(),
        }
    }
}
