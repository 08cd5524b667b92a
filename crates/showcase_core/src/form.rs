//! Three-step contact form held on the client until it is submitted.

use std::str::FromStr;

use thiserror::Error;

use crate::contact::{is_valid_email, Attachment, ContactSubmission};

pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;
pub const MIN_BUDGET: u64 = 5_000;
pub const MAX_BUDGET: u64 = 500_000;
pub const DEFAULT_BUDGET: u64 = 50_000;
pub const DEFAULT_SERVICE: &str = "General";

pub const SERVICES: [&str; 5] = [
    "General",
    "Web & App Development",
    "Social Media & Ads",
    "Branding & Graphics",
    "Video & Motion",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name required")]
    NameRequired,
    #[error("Valid email required")]
    EmailRequired,
    #[error("Budget must be between {} and {}", MIN_BUDGET, MAX_BUDGET)]
    BudgetOutOfRange,
    #[error("Please add a message or brief")]
    MessageRequired,
    #[error("Attachment must be <= 10 MB")]
    AttachmentTooLarge,
    #[error("Spam detected")]
    Spam,
    #[error("A submission is already in progress")]
    SubmissionPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum FormStep {
    #[default]
    Details,
    Project,
    Brief,
}

impl FormStep {
    pub fn number(self) -> u8 {
        match self {
            FormStep::Details => 1,
            FormStep::Project => 2,
            FormStep::Brief => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    #[default]
    Normal,
    Fast,
    Research,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Normal => "normal",
            Urgency::Fast => "fast",
            Urgency::Research => "research",
        }
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Urgency::Normal),
            "fast" => Ok(Urgency::Fast),
            "research" => Ok(Urgency::Research),
            other => Err(format!("unknown urgency: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub budget: u64,
    pub deadline: String,
    pub urgency: Urgency,
    pub message: String,
    /// Hidden field; humans never fill it.
    pub honeypot: String,
    attachment: Option<Attachment>,
    step: FormStep,
    pending: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            service: DEFAULT_SERVICE.to_string(),
            budget: DEFAULT_BUDGET,
            deadline: String::new(),
            urgency: Urgency::default(),
            message: String::new(),
            honeypot: String::new(),
            attachment: None,
            step: FormStep::default(),
            pending: false,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Validates the current step and moves to the next one.
    pub fn advance(&mut self) -> Result<FormStep, FormError> {
        match self.step {
            FormStep::Details => {
                self.check_details()?;
                self.step = FormStep::Project;
            }
            FormStep::Project => {
                self.check_project()?;
                self.step = FormStep::Brief;
            }
            FormStep::Brief => {}
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> FormStep {
        self.step = match self.step {
            FormStep::Details | FormStep::Project => FormStep::Details,
            FormStep::Brief => FormStep::Project,
        };
        self.step
    }

    /// Keeps the previous attachment when the new one is too large.
    pub fn attach(&mut self, attachment: Attachment) -> Result<(), FormError> {
        if attachment.size > MAX_ATTACHMENT_BYTES {
            return Err(FormError::AttachmentTooLarge);
        }
        self.attachment = Some(attachment);
        Ok(())
    }

    pub fn remove_attachment(&mut self) {
        self.attachment = None;
    }

    /// Validates every step and marks the form pending.
    ///
    /// While pending, further calls fail with [`FormError::SubmissionPending`].
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, FormError> {
        if self.pending {
            return Err(FormError::SubmissionPending);
        }
        if !self.honeypot.is_empty() {
            return Err(FormError::Spam);
        }
        self.check_details()?;
        self.check_project()?;
        if self.message.trim().is_empty() {
            return Err(FormError::MessageRequired);
        }
        self.pending = true;
        Ok(self.to_submission())
    }

    /// Ends a pending submission. Success resets the form; failure keeps the
    /// input so the visitor can resubmit.
    pub fn finish_submit(&mut self, accepted: bool) {
        if accepted {
            *self = Self::default();
        } else {
            self.pending = false;
        }
    }

    fn check_details(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::NameRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::EmailRequired);
        }
        Ok(())
    }

    fn check_project(&self) -> Result<(), FormError> {
        if !(MIN_BUDGET..=MAX_BUDGET).contains(&self.budget) {
            return Err(FormError::BudgetOutOfRange);
        }
        Ok(())
    }

    fn to_submission(&self) -> ContactSubmission {
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        ContactSubmission {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.clone()),
            message: Some(self.message.clone()),
            phone: optional(&self.phone),
            service: Some(self.service.clone()),
            budget: Some(self.budget),
            deadline: optional(&self.deadline),
            urgency: Some(self.urgency.as_str().to_string()),
            file: self.attachment.clone(),
        }
    }
}
