//! Per-user session state.

use reflect_core::{display_name, InteractionRecord, Result, UserKey};

/// An active session: the normalized user key plus this session's exchanges.
///
/// The transcript only feeds the model's short-term history window; it is never read back
/// from storage.
#[derive(Debug, Clone)]
pub struct Session {
    user: UserKey,
    display_name: String,
    transcript: Vec<InteractionRecord>,
}

impl Session {
    /// Logs the user in. Fails on empty or path-like names.
    pub fn start(raw_username: &str) -> Result<Self> {
        let user = UserKey::parse(raw_username)?;
        Ok(Self {
            display_name: display_name(raw_username),
            user,
            transcript: Vec::new(),
        })
    }

    pub fn user(&self) -> &UserKey {
        &self.user
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Records of this session, oldest first.
    pub fn transcript(&self) -> &[InteractionRecord] {
        &self.transcript
    }

    /// Clears the in-memory transcript. Stored history is untouched.
    pub fn reset(&mut self) {
        self.transcript.clear();
    }

    pub(crate) fn push(&mut self, record: InteractionRecord) {
        self.transcript.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflect_core::CoreError;

    #[test]
    fn test_start_normalizes_key_and_title_cases_name() {
        let session = Session::start("  alice smith ").unwrap();
        assert_eq!(session.user().as_str(), "alice smith");
        assert_eq!(session.display_name(), "Alice Smith");
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_start_rejects_empty_name() {
        assert_eq!(Session::start("   ").unwrap_err(), CoreError::EmptyUsername);
    }

    #[test]
    fn test_reset_clears_transcript() {
        let mut session = Session::start("bob").unwrap();
        session.push(InteractionRecord::new("q", "a", "neutral"));
        assert_eq!(session.transcript().len(), 1);

        session.reset();
        assert!(session.transcript().is_empty());
        assert_eq!(session.user().as_str(), "bob");
    }
}
