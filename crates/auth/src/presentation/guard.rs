//! Route Guard
//!
//! Pure redirect policy over a session snapshot and the navigation
//! root the UI currently sits in. The shell applies whatever redirect
//! this returns after every state change; because the policy is a
//! function of (state, root) only, applying its own output reaches a
//! fixed point in one step.

use crate::application::session::SessionState;

/// Top-level navigation roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RouteRoot {
    #[display("login")]
    Login,
    #[display("sign-up")]
    SignUp,
    #[display("tabs")]
    Tabs,
}

impl RouteRoot {
    /// Whether this root requires a signed-in user
    pub fn is_authenticated(self) -> bool {
        matches!(self, RouteRoot::Tabs)
    }
}

/// Redirect required for this state and location, if any
///
/// While startup is still loading, no redirect is issued; the shell
/// keeps showing its splash until the state settles.
pub fn required_redirect(state: &SessionState, current: RouteRoot) -> Option<RouteRoot> {
    if state.is_loading {
        return None;
    }

    match (state.is_authenticated(), current.is_authenticated()) {
        (false, true) => Some(RouteRoot::Login),
        (true, false) => Some(RouteRoot::Tabs),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::entity::User;
    use crate::domain::value_object::{Pin, UserName};

    fn loading() -> SessionState {
        SessionState {
            user: None,
            is_loading: true,
        }
    }

    fn signed_out() -> SessionState {
        SessionState {
            user: None,
            is_loading: false,
        }
    }

    fn signed_in() -> SessionState {
        SessionState {
            user: Some(User::new_local(
                UserName::new("Dave").unwrap(),
                Pin::new("1234").unwrap(),
            )),
            is_loading: false,
        }
    }

    #[test]
    fn test_no_redirect_while_loading() {
        for root in [RouteRoot::Login, RouteRoot::SignUp, RouteRoot::Tabs] {
            assert_eq!(required_redirect(&loading(), root), None);
        }
    }

    #[test]
    fn test_signed_out_is_kicked_out_of_tabs() {
        assert_eq!(
            required_redirect(&signed_out(), RouteRoot::Tabs),
            Some(RouteRoot::Login)
        );
    }

    #[test]
    fn test_signed_out_may_browse_auth_screens() {
        assert_eq!(required_redirect(&signed_out(), RouteRoot::Login), None);
        assert_eq!(required_redirect(&signed_out(), RouteRoot::SignUp), None);
    }

    #[test]
    fn test_signed_in_is_pushed_into_tabs() {
        assert_eq!(
            required_redirect(&signed_in(), RouteRoot::Login),
            Some(RouteRoot::Tabs)
        );
        assert_eq!(
            required_redirect(&signed_in(), RouteRoot::SignUp),
            Some(RouteRoot::Tabs)
        );
        assert_eq!(required_redirect(&signed_in(), RouteRoot::Tabs), None);
    }

    #[test]
    fn test_redirects_reach_a_fixed_point() {
        // Applying the guard's own output must never trigger another
        // redirect.
        for state in [loading(), signed_out(), signed_in()] {
            for root in [RouteRoot::Login, RouteRoot::SignUp, RouteRoot::Tabs] {
                if let Some(target) = required_redirect(&state, root) {
                    assert_eq!(required_redirect(&state, target), None);
                }
            }
        }
    }
}
