//! View controller state machine.
//!
//! ```text
//!                 restore() = Some            sign-in / sign-up ok
//!  Restoring ──────────────────────► Authenticated ◄──────────────┐
//!      │                                  │                        │
//!      │ restore() = None                 │ logout / backend 401   │
//!      ▼                                  ▼                        │
//!  Unauthenticated{Login} ◄──toggle──► Unauthenticated{Register} ──┘
//! ```
//!
//! [`SessionState`] pairs the visible [`ViewState`] with the [`Session`] it is
//! derived from, so the two can never disagree: `Authenticated` exactly when a
//! session is held. A session ended by the backend leaves a notice that the
//! login form shows until the next sign-in.

use store::Session;

/// Which authentication form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Unauthenticated { mode: AuthMode },
    Authenticated,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Unauthenticated {
            mode: AuthMode::Login,
        }
    }
}

/// Session context shared by every view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    view: ViewState,
    session: Option<Session>,
    /// Why the last session ended, shown on the login form.
    notice: Option<String>,
    /// True until the stored session has been read.
    pub loading: bool,
}

impl SessionState {
    /// State before the stored session has been read.
    pub fn restoring() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Initial state once storage has answered.
    pub fn from_restored(session: Option<Session>) -> Self {
        let view = match session {
            Some(_) => ViewState::Authenticated,
            None => ViewState::default(),
        };
        Self {
            view,
            session,
            notice: None,
            loading: false,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.view == ViewState::Authenticated
    }

    /// Switch between the login and register forms. No effect once signed in.
    pub fn show(&mut self, mode: AuthMode) {
        if let ViewState::Unauthenticated { .. } = self.view {
            self.view = ViewState::Unauthenticated { mode };
        }
    }

    pub fn toggle_mode(&mut self) {
        if let ViewState::Unauthenticated { mode } = self.view {
            self.view = ViewState::Unauthenticated {
                mode: mode.toggled(),
            };
        }
    }

    pub fn signed_in(&mut self, session: Session) {
        self.session = Some(session);
        self.view = ViewState::Authenticated;
        self.notice = None;
        self.loading = false;
    }

    /// Replace the session after it was linked to a customer. Ignored when
    /// the user has signed out in the meantime.
    pub fn relinked(&mut self, session: Session) {
        if self.is_authenticated() {
            self.session = Some(session);
        }
    }

    pub fn signed_out(&mut self) {
        self.session = None;
        self.view = ViewState::default();
        self.notice = None;
        self.loading = false;
    }

    /// Sign out because the backend ended the session, keeping `notice` for
    /// the login form.
    pub fn expired(&mut self, notice: impl Into<String>) {
        self.signed_out();
        self.notice = Some(notice.into());
    }
}
