// Domain Error Types

use thiserror::Error;

/// Rejection of a job draft. Only the first violated rule is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Job title must be at least 3 characters and company name at least 2 characters long.")]
    TitleOrCompanyTooShort,

    #[error("Start date must be before or equal to the end date.")]
    DatesOutOfOrder,

    #[error("Please add at least one job description.")]
    MissingDescription,

    #[error("Please add at least one skill.")]
    MissingSkill,
}

pub type Result<T> = std::result::Result<T, ValidationError>;
