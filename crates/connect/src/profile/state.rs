//! View state owned by the profile session.

use std::time::{Duration, Instant};

use growfolio_core::accounts::{Account, AccountUpdate};
use growfolio_core::constants::NOTICE_DISMISS_SECS;
use growfolio_core::profiles::{Profile, ProfileUpdate};

/// Lifecycle phase of one modal-open session.
///
/// `Failed` is terminal for the session; there is no auto-retry. A new
/// `open` starts a fresh session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Loading,
    Failed {
        message: String,
    },
    Loaded,
}

/// The loaded profile, or the recorded fact that none exists yet.
///
/// Display and save-path selection branch on this tag. `Absent` is the
/// normal state for a user who has not saved preferences yet, distinct
/// from any transport failure.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadedProfile {
    #[default]
    Absent,
    Present(Profile),
}

impl LoadedProfile {
    pub fn is_present(&self) -> bool {
        matches!(self, LoadedProfile::Present(_))
    }

    pub fn as_option(&self) -> Option<&Profile> {
        match self {
            LoadedProfile::Present(profile) => Some(profile),
            LoadedProfile::Absent => None,
        }
    }
}

/// Edit state of one tab: the draft plus its flags and inline error.
///
/// The account and profile tabs each own one of these; switching tabs
/// never touches the other tab's state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabState<D> {
    pub editing: bool,
    pub saving: bool,
    pub draft: D,
    pub error: Option<String>,
}

impl<D> TabState<D> {
    /// Replaces the draft and leaves edit mode.
    pub(crate) fn reset(&mut self, draft: D) {
        self.editing = false;
        self.saving = false;
        self.error = None;
        self.draft = draft;
    }
}

/// Transient success notice with an explicit expiry instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

impl Notice {
    pub(crate) fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            expires_at: now + Duration::from_secs(NOTICE_DISMISS_SECS),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Complete view state for one session. Cloned out for rendering; only the
/// session controller mutates it.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub account: Option<Account>,
    pub profile: LoadedProfile,
    pub account_tab: TabState<AccountUpdate>,
    pub profile_tab: TabState<ProfileUpdate>,
    pub notice: Option<Notice>,
}
