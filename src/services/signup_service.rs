use serde::Serialize;
use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupConfirmation {
    pub message: String,
    pub participants: Vec<String>,
}

/// Registers `email` for `activity_name`.
///
/// The email is taken verbatim; no format validation or normalization.
pub fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation> {
    match store.add_participant(activity_name, email) {
        Ok(participants) => {
            info!(
                activity = %activity_name,
                participants = participants.len(),
                "signup_accepted"
            );
            Ok(SignupConfirmation {
                message: format!("{} has been signed up for {}", email, activity_name),
                participants,
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, reason = %e, "signup_rejected");
            Err(e)
        }
    }
}
