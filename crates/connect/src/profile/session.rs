//! Session controller for the account/profile screen.
//!
//! `ProfileSession` owns the view state behind the screen and mediates
//! between the user-service client and the per-tab edit drafts. Each
//! operation runs to completion before touching shared state; the state
//! lock is never held across an await.

use std::sync::{Arc, RwLock};
use std::time::Instant;

use log::{debug, error, info};

use growfolio_core::accounts::AccountUpdate;
use growfolio_core::errors::{Error, Result};
use growfolio_core::profiles::{PreferredInvestmentType, ProfileUpdate};

use super::state::{LoadedProfile, Notice, SessionPhase, SessionState};
use super::traits::UserApiClient;

struct Inner {
    state: SessionState,
    /// Bumped on every `open`/`close`. A load or save captures the value
    /// before its first await and re-checks it before every state write,
    /// so a stale in-flight response can never overwrite a newer session.
    generation: u64,
}

/// Controller for one account/profile screen.
///
/// Create once with the API client, call [`open`](Self::open) when the
/// screen is shown, and read view state through
/// [`state`](Self::state) snapshots.
pub struct ProfileSession {
    client: Arc<dyn UserApiClient>,
    inner: RwLock<Inner>,
}

impl ProfileSession {
    /// Creates a new session controller over the given client.
    pub fn new(client: Arc<dyn UserApiClient>) -> Self {
        Self {
            client,
            inner: RwLock::new(Inner {
                state: SessionState::default(),
                generation: 0,
            }),
        }
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> SessionState {
        self.inner.read().unwrap().state.clone()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Opens a session: loads the account, then the profile, and seeds
    /// both edit drafts.
    ///
    /// A missing profile (404) is a valid outcome and lands in
    /// [`LoadedProfile::Absent`]; any other failure is terminal for the
    /// session.
    pub async fn open(&self) -> Result<()> {
        let generation = {
            let mut inner = self.inner.write().unwrap();
            inner.generation += 1;
            inner.state = SessionState {
                phase: SessionPhase::Loading,
                ..SessionState::default()
            };
            inner.generation
        };

        let account = match self.client.fetch_account().await {
            Ok(account) => account,
            Err(err) => return self.fail_load(generation, err),
        };

        let profile = match self.client.fetch_profile(account.user_id).await {
            Ok(profile) => LoadedProfile::Present(profile),
            Err(err) if err.is_not_found() => LoadedProfile::Absent,
            Err(err) => return self.fail_load(generation, err),
        };

        let mut inner = self.inner.write().unwrap();
        if inner.generation != generation {
            debug!("Discarding load result for a superseded session");
            return Ok(());
        }

        let state = &mut inner.state;
        state.account_tab.reset(AccountUpdate::seeded_from(&account));
        state.profile_tab.reset(match &profile {
            LoadedProfile::Present(profile) => ProfileUpdate::seeded_from(profile),
            LoadedProfile::Absent => ProfileUpdate::default(),
        });
        info!(
            "Profile session loaded for user {} (profile {})",
            account.user_id,
            if profile.is_present() {
                "present"
            } else {
                "absent"
            }
        );
        state.account = Some(account);
        state.profile = profile;
        state.phase = SessionPhase::Loaded;
        Ok(())
    }

    /// Closes the session, discarding the result of any in-flight request.
    pub fn close(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.generation += 1;
        inner.state = SessionState::default();
    }

    fn fail_load(&self, generation: u64, err: Error) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.generation == generation {
            error!("Failed to load profile session: {}", err);
            inner.state.phase = SessionPhase::Failed {
                message: err.to_string(),
            };
        }
        Err(err)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────

    /// Enters edit mode on the account tab.
    pub fn begin_account_edit(&self) {
        let mut inner = self.inner.write().unwrap();
        if inner.state.phase == SessionPhase::Loaded {
            inner.state.account_tab.editing = true;
        }
    }

    /// Enters edit mode on the profile tab.
    pub fn begin_profile_edit(&self) {
        let mut inner = self.inner.write().unwrap();
        if inner.state.phase == SessionPhase::Loaded {
            inner.state.profile_tab.editing = true;
        }
    }

    /// Applies a mutation to the account draft.
    pub fn edit_account_draft(&self, edit: impl FnOnce(&mut AccountUpdate)) {
        let mut inner = self.inner.write().unwrap();
        edit(&mut inner.state.account_tab.draft);
    }

    /// Applies a mutation to the profile draft.
    pub fn edit_profile_draft(&self, edit: impl FnOnce(&mut ProfileUpdate)) {
        let mut inner = self.inner.write().unwrap();
        edit(&mut inner.state.profile_tab.draft);
    }

    /// Adds or removes one preferred investment type in the profile draft.
    pub fn toggle_preferred_type(&self, kind: PreferredInvestmentType) {
        let mut inner = self.inner.write().unwrap();
        inner.state.profile_tab.draft.toggle_preferred_type(kind);
    }

    /// Discards account draft mutations, re-seeding from the loaded
    /// account. No network call.
    pub fn cancel_account_edit(&self) {
        let mut inner = self.inner.write().unwrap();
        let state = &mut inner.state;
        let draft = match &state.account {
            Some(account) => AccountUpdate::seeded_from(account),
            None => AccountUpdate::default(),
        };
        state.account_tab.reset(draft);
    }

    /// Discards profile draft mutations, re-seeding from the loaded
    /// profile (or empty if absent). No network call.
    pub fn cancel_profile_edit(&self) {
        let mut inner = self.inner.write().unwrap();
        let state = &mut inner.state;
        let draft = match &state.profile {
            LoadedProfile::Present(profile) => ProfileUpdate::seeded_from(profile),
            LoadedProfile::Absent => ProfileUpdate::default(),
        };
        state.profile_tab.reset(draft);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Saving
    // ─────────────────────────────────────────────────────────────────────

    /// Saves the profile draft: creates the profile when none exists,
    /// updates it otherwise. The service's response replaces the loaded
    /// profile wholesale.
    ///
    /// The required-field check runs before any network call; on any
    /// failure the tab stays in edit mode with the draft intact.
    pub async fn save_profile(&self) -> Result<()> {
        let (generation, user_id, draft, exists) = {
            let mut inner = self.inner.write().unwrap();
            let generation = inner.generation;
            let state = &mut inner.state;
            let user_id = match &state.account {
                Some(account) => account.user_id,
                None => return Err(Error::Unexpected("No account loaded".to_string())),
            };

            let draft = state.profile_tab.draft.clone();
            if let Err(err) = draft.validate_for_save() {
                state.profile_tab.error = Some(err.to_string());
                return Err(err);
            }

            state.profile_tab.saving = true;
            state.profile_tab.error = None;
            (generation, user_id, draft, state.profile.is_present())
        };

        let result = if exists {
            self.client.update_profile(user_id, &draft).await
        } else {
            self.client.create_profile(user_id, &draft).await
        };

        let profile = match result {
            Ok(profile) => profile,
            Err(err) => return self.fail_save(generation, err, TabKind::Profile),
        };

        let mut inner = self.inner.write().unwrap();
        if inner.generation != generation {
            debug!("Discarding profile save result for a superseded session");
            return Ok(());
        }

        info!(
            "Profile {} for user {}",
            if exists { "updated" } else { "created" },
            user_id
        );
        let state = &mut inner.state;
        state.profile_tab.reset(ProfileUpdate::seeded_from(&profile));
        state.profile = LoadedProfile::Present(profile);
        state.notice = Some(Notice::new("Profile saved", Instant::now()));
        Ok(())
    }

    /// Saves the account draft, then re-fetches the account so the loaded
    /// record picks up server-side derived changes.
    ///
    /// A failed update skips the re-fetch; the tab stays in edit mode with
    /// the draft intact.
    pub async fn save_account(&self) -> Result<()> {
        let (generation, user_id, draft) = {
            let mut inner = self.inner.write().unwrap();
            let generation = inner.generation;
            let state = &mut inner.state;
            let user_id = match &state.account {
                Some(account) => account.user_id,
                None => return Err(Error::Unexpected("No account loaded".to_string())),
            };

            state.account_tab.saving = true;
            state.account_tab.error = None;
            (generation, user_id, state.account_tab.draft.clone())
        };

        if let Err(err) = self.client.update_account(user_id, &draft).await {
            return self.fail_save(generation, err, TabKind::Account);
        }

        // The update response echoes the patch; re-fetch for the
        // server-side derived fields before replacing local state.
        let account = match self.client.fetch_account().await {
            Ok(account) => account,
            Err(err) => return self.fail_save(generation, err, TabKind::Account),
        };

        let mut inner = self.inner.write().unwrap();
        if inner.generation != generation {
            debug!("Discarding account save result for a superseded session");
            return Ok(());
        }

        info!("Account settings saved for user {}", user_id);
        let state = &mut inner.state;
        state.account_tab.reset(AccountUpdate::seeded_from(&account));
        state.account = Some(account);
        state.notice = Some(Notice::new("Account updated", Instant::now()));
        Ok(())
    }

    fn fail_save(&self, generation: u64, err: Error, tab: TabKind) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.generation == generation {
            error!("Failed to save {}: {}", tab.label(), err);
            let state = &mut inner.state;
            match tab {
                TabKind::Account => {
                    state.account_tab.saving = false;
                    state.account_tab.error = Some(err.to_string());
                }
                TabKind::Profile => {
                    state.profile_tab.saving = false;
                    state.profile_tab.error = Some(err.to_string());
                }
            }
        }
        Err(err)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the active success notice, purging it once expired.
    pub fn notice(&self, now: Instant) -> Option<Notice> {
        let mut inner = self.inner.write().unwrap();
        let expired = inner
            .state
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(now));
        if expired {
            inner.state.notice = None;
        }
        inner.state.notice.clone()
    }

    /// Dismisses the notice ahead of its expiry.
    pub fn dismiss_notice(&self) {
        self.inner.write().unwrap().state.notice = None;
    }
}

#[derive(Debug, Clone, Copy)]
enum TabKind {
    Account,
    Profile,
}

impl TabKind {
    fn label(self) -> &'static str {
        match self {
            TabKind::Account => "account settings",
            TabKind::Profile => "profile",
        }
    }
}
