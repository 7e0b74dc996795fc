//! Login/logout flow: resolve the roll number, then update the PC pool.

use std::fmt;
use std::sync::Arc;

use tracing::{error, info};

use libdesk_core::error::AppError;
use libdesk_core::result::AppResult;
use libdesk_core::traits::{DirectoryLookup, LoginOutcome, LogoutOutcome, OccupancyTracker};
use libdesk_core::types::{DirectoryEntry, OccupancyStatus, RollNumber};

const UNKNOWN_ON_LOGIN: &str = "Roll Number not found. Access denied.";
const UNKNOWN_ON_LOGOUT: &str = "Roll Number not found.";
const NO_PCS_AVAILABLE: &str = "No PCs available.";

/// What a successful request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// The student took a PC.
    LoggedIn,
    /// The student released a PC.
    LoggedOut,
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedIn => write!(f, "logged in"),
            Self::LoggedOut => write!(f, "logged out"),
        }
    }
}

/// A completed login or logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionChange {
    /// The student involved.
    pub entry: DirectoryEntry,
    /// What happened.
    pub action: SessionAction,
}

impl SessionChange {
    /// Message shown to the student, e.g. `"komal patil logged in successfully."`.
    pub fn message(&self) -> String {
        format!("{} {} successfully.", self.entry.name, self.action)
    }
}

/// Library PC service shared by every request handler.
#[derive(Debug, Clone)]
pub struct LibraryService {
    directory: Arc<dyn DirectoryLookup>,
    tracker: Arc<dyn OccupancyTracker>,
}

impl LibraryService {
    /// Creates a service over a directory and a tracker.
    pub fn new(directory: Arc<dyn DirectoryLookup>, tracker: Arc<dyn OccupancyTracker>) -> Self {
        Self { directory, tracker }
    }

    /// Take a PC for the student with this roll number.
    pub async fn login(&self, raw_roll_no: &str) -> AppResult<SessionChange> {
        let roll_no = RollNumber::parse(raw_roll_no)?;
        let entry = self.resolve(roll_no, UNKNOWN_ON_LOGIN).await?;

        match self.tracker.login(&entry.roll_no).await? {
            LoginOutcome::Admitted => {
                info!(roll_no = %entry.roll_no, "Student logged in");
                Ok(SessionChange {
                    entry,
                    action: SessionAction::LoggedIn,
                })
            }
            LoginOutcome::AlreadyActive => Err(AppError::already_active(format!(
                "{} is already logged in.",
                entry.name
            ))),
            LoginOutcome::CapacityExceeded => Err(AppError::capacity_exceeded(NO_PCS_AVAILABLE)),
        }
    }

    /// Release the PC held by the student with this roll number.
    pub async fn logout(&self, raw_roll_no: &str) -> AppResult<SessionChange> {
        let roll_no = RollNumber::parse(raw_roll_no)?;
        let entry = self.resolve(roll_no, UNKNOWN_ON_LOGOUT).await?;

        match self.tracker.logout(&entry.roll_no).await? {
            LogoutOutcome::Released => {
                info!(roll_no = %entry.roll_no, "Student logged out");
                Ok(SessionChange {
                    entry,
                    action: SessionAction::LoggedOut,
                })
            }
            LogoutOutcome::NotActive => Err(AppError::not_active(format!(
                "{} is not logged in.",
                entry.name
            ))),
        }
    }

    /// Current pool status.
    pub async fn status(&self) -> AppResult<OccupancyStatus> {
        self.tracker.status().await
    }

    /// Resolve a roll number, rejecting unknown students before the pool is touched.
    ///
    /// A directory row with a blank name counts as unknown.
    async fn resolve(&self, roll_no: RollNumber, unknown_message: &str) -> AppResult<DirectoryEntry> {
        let name = match self.directory.resolve(&roll_no).await {
            Ok(name) => name,
            Err(e) => {
                error!(roll_no = %roll_no, error = %e, "Directory lookup failed");
                return Err(e);
            }
        };

        match name {
            Some(name) if !name.trim().is_empty() => Ok(DirectoryEntry::new(roll_no, name)),
            _ => {
                info!(roll_no = %roll_no, "Rejected unknown roll number");
                Err(AppError::unknown_identifier(unknown_message))
            }
        }
    }
}
