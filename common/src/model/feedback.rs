//! Feedback submitted from the form screen.
//!
//! `FeedbackDraft` mirrors the editable form fields, each of which may still be
//! unset. `FeedbackDraft::finalize` is the only way to obtain a
//! `FeedbackRecord`, so a record always carries every user-supplied field.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Self-reported experience with a product.
///
/// Serialized with the Portuguese labels the service already stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "Feliz")]
    Happy,
    #[serde(rename = "Bom")]
    Good,
    #[serde(rename = "Médio")]
    Average,
    #[serde(rename = "Ruim")]
    Bad,
}

impl Experience {
    /// All options in the order the form lists them.
    pub const ALL: [Experience; 4] = [
        Experience::Happy,
        Experience::Good,
        Experience::Average,
        Experience::Bad,
    ];

    /// Label shown on the option button; identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Experience::Happy => "Feliz",
            Experience::Good => "Bom",
            Experience::Average => "Médio",
            Experience::Bad => "Ruim",
        }
    }

    /// Inverse of [`Experience::label`].
    pub fn from_label(label: &str) -> Option<Experience> {
        Experience::ALL.into_iter().find(|e| e.label() == label)
    }
}

/// Body of `POST /evaluations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// Milliseconds since the Unix epoch at submission time.
    pub id: u64,
    pub product_id: i64,
    pub name: String,
    pub email: String,
    pub feedback: String,
    pub experience: Experience,
    pub recommend: bool,
}

/// First required field found missing while finalizing a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Email,
    Feedback,
    Experience,
    Recommend,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            MissingField::Name => "name",
            MissingField::Email => "email",
            MissingField::Feedback => "feedback",
            MissingField::Experience => "experience",
            MissingField::Recommend => "recommend",
        };
        write!(f, "missing required field `{}`", field)
    }
}

impl std::error::Error for MissingField {}

/// Editable form contents. Text fields count as unset while empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub feedback: String,
    pub experience: Option<Experience>,
    pub recommend: Option<bool>,
}

impl FeedbackDraft {
    /// Checks presence of every field and builds the record to send.
    ///
    /// Only presence is checked: the e-mail is not parsed and whitespace-only
    /// text is accepted as given. The draft itself is left untouched so a
    /// failed submission can be retried without re-entering data.
    pub fn finalize(&self, product_id: i64, id: u64) -> Result<FeedbackRecord, MissingField> {
        if self.name.is_empty() {
            return Err(MissingField::Name);
        }
        if self.email.is_empty() {
            return Err(MissingField::Email);
        }
        if self.feedback.is_empty() {
            return Err(MissingField::Feedback);
        }
        let experience = self.experience.ok_or(MissingField::Experience)?;
        let recommend = self.recommend.ok_or(MissingField::Recommend)?;

        Ok(FeedbackRecord {
            id,
            product_id,
            name: self.name.clone(),
            email: self.email.clone(),
            feedback: self.feedback.clone(),
            experience,
            recommend,
        })
    }
}
