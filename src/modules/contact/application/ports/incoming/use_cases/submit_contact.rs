use async_trait::async_trait;
use email_address::EmailAddress;

use crate::modules::contact::application::domain::{
    ContactAcknowledgement, ProjectType, UnknownProjectType,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error(transparent)]
    UnknownProjectType(#[from] UnknownProjectType),
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// A validated contact form. Text is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitContactCommand {
    name: String,
    email: String,
    project_type: ProjectType,
    message: String,
}

fn filled(field: &'static str, value: &str) -> Result<String, SubmitContactError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SubmitContactError::MissingField(field));
    }
    Ok(value.to_string())
}

impl SubmitContactCommand {
    pub fn new(
        name: &str,
        email: &str,
        project_type: &str,
        message: &str,
    ) -> Result<Self, SubmitContactError> {
        let name = filled("name", name)?;
        let email = filled("email", email)?;
        if !EmailAddress::is_valid(&email) {
            return Err(SubmitContactError::InvalidEmail);
        }
        let project_type = filled("project_type", project_type)?.parse::<ProjectType>()?;
        let message = filled("message", message)?;

        Ok(Self {
            name,
            email,
            project_type,
            message,
        })
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactAcknowledgement, SubmitContactError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_is_trimmed() {
        let cmd = SubmitContactCommand::new(
            " Ana ",
            "ana@example.com",
            "Web Design",
            " Need a site ",
        )
        .unwrap();

        assert_eq!(
            cmd,
            SubmitContactCommand::new("Ana", "ana@example.com", "Web Design", "Need a site")
                .unwrap()
        );
        assert_eq!(cmd.project_type(), ProjectType::WebDesign);
        assert_eq!(cmd.message(), "Need a site");
    }

    #[test]
    fn blank_fields_are_named() {
        let err = SubmitContactCommand::new("Ana", "ana@example.com", "Other", "  ").unwrap_err();
        assert_eq!(err, SubmitContactError::MissingField("message"));

        let err = SubmitContactCommand::new("", "ana@example.com", "Other", "Hi").unwrap_err();
        assert_eq!(err, SubmitContactError::MissingField("name"));

        let err = SubmitContactCommand::new("Ana", "ana@example.com", "", "Hi").unwrap_err();
        assert_eq!(err, SubmitContactError::MissingField("project_type"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err = SubmitContactCommand::new("Ana", "ana.example.com", "Other", "Hi").unwrap_err();
        assert_eq!(err, SubmitContactError::InvalidEmail);
    }

    #[test]
    fn unknown_project_type_is_rejected() {
        let err = SubmitContactCommand::new("Ana", "ana@example.com", "Logo", "Hi").unwrap_err();
        assert_eq!(
            err,
            SubmitContactError::UnknownProjectType(UnknownProjectType("Logo".to_string()))
        );
    }
}
