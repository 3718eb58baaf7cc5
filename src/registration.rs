use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::Catalog;

/// Rejection reasons for signup/unregister requests.
///
/// The unknown-activity case is always reported before any check on the
/// participant list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
}

impl RegistrationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrationError::ActivityNotFound => ErrorKind::NotFound,
            RegistrationError::AlreadySignedUp
            | RegistrationError::ActivityFull
            | RegistrationError::NotSignedUp => ErrorKind::BadRequest,
        }
    }
}

/// Append `email` to the activity's participants.
pub fn signup(
    catalog: &mut Catalog,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistrationError> {
    let activity = catalog
        .get_mut(activity_name)
        .ok_or(RegistrationError::ActivityNotFound)?;

    if activity.has_participant(email) {
        debug!("{} is already signed up for {}", email, activity_name);
        return Err(RegistrationError::AlreadySignedUp);
    }
    if activity.is_full() {
        debug!(
            "{} is full ({}/{})",
            activity_name,
            activity.participants.len(),
            activity.max_participants
        );
        return Err(RegistrationError::ActivityFull);
    }

    activity.participants.push(email.to_string());
    info!(
        "Signed up {} for {} ({} spots left)",
        email,
        activity_name,
        activity.free_spots()
    );
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Remove `email` from the activity's participants.
pub fn unregister(
    catalog: &mut Catalog,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistrationError> {
    let activity = catalog
        .get_mut(activity_name)
        .ok_or(RegistrationError::ActivityNotFound)?;

    let pos = activity
        .participants
        .iter()
        .position(|p| p == email)
        .ok_or(RegistrationError::NotSignedUp)?;
    activity.participants.remove(pos);

    info!("Unregistered {} from {}", email, activity_name);
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
