//! Session Gate
//!
//! The combined login/signup form. Validation beyond "email and password are
//! filled in" is left to the auth service.

use crate::backend::AuthService;
use crate::domain::{Profile, Session};
use crate::error::BackendResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Signup",
        }
    }

    /// Label of the button that switches to the other mode
    pub fn switch_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Switch to Signup",
            AuthMode::Signup => "Switch to Login",
        }
    }
}

/// Entered form values. Name and phone only matter in signup mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

/// What a submit sends to the auth service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String, profile: Profile },
}

impl AuthForm {
    /// Flip between login and signup, keeping everything typed so far
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
    }

    /// `None` while a required field is empty
    pub fn request(&self) -> Option<AuthRequest> {
        if self.email.is_empty() || self.password.is_empty() {
            return None;
        }
        let email = self.email.clone();
        let password = self.password.clone();
        Some(match self.mode {
            AuthMode::Login => AuthRequest::SignIn { email, password },
            AuthMode::Signup => AuthRequest::SignUp {
                email,
                password,
                profile: Profile::from_fields(&self.name, &self.phone),
            },
        })
    }
}

/// Run one sign-in or sign-up call
pub async fn authenticate<A: AuthService + ?Sized>(auth: &A, request: &AuthRequest) -> BackendResult<Session> {
    match request {
        AuthRequest::SignIn { email, password } => auth.sign_in(email, password).await,
        AuthRequest::SignUp { email, password, profile } => auth.sign_up(email, password, profile).await,
    }
}

/// Text shown when sign-out fails
pub fn sign_out_failure(err: &impl std::fmt::Display) -> String {
    format!("Error logging out: {}", err)
}
