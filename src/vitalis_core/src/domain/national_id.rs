use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NationalIdError {
    #[error("National ID must not be empty")]
    Empty,
}

/// The national identity number a local account registers under.
///
/// Globally unique across users; federated-only accounts have none.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalId(String);

impl NationalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NationalId {
    type Error = NationalIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(NationalIdError::Empty);
        }
        Ok(Self(value))
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
