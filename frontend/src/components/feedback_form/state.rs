//! State of the feedback form and the submit decisions derived from it.
//!
//! `update.rs` never inspects the draft itself on submit. It asks
//! [`FeedbackFormComponent::submit_effect`] what to do and, once the request
//! settles, asks [`resolve_submission`] what the user should see. Both are
//! plain functions so the whole submit cycle can be checked without a browser.

use common::model::feedback::{FeedbackDraft, FeedbackRecord, MissingField};

use crate::api::ApiError;
use crate::navigation::Route;

pub struct FeedbackFormComponent {
    /// Current field values. Never cleared by a failed submission.
    pub draft: FeedbackDraft,
}

/// What pressing "Enviar Feedback" leads to.
#[derive(Debug, PartialEq)]
pub enum SubmitEffect {
    /// A field is missing: alert only, nothing goes on the network.
    Alert(MissingField),
    /// One `POST /evaluations` with this record.
    Post(FeedbackRecord),
}

/// User-visible result of a settled POST.
#[derive(Debug, PartialEq)]
pub struct SubmitResolution {
    pub title: &'static str,
    pub message: &'static str,
    /// Screen to show afterwards; `None` keeps the form as it is.
    pub route: Option<Route>,
}

impl FeedbackFormComponent {
    pub fn new() -> Self {
        Self {
            draft: FeedbackDraft::default(),
        }
    }

    /// Decides the effect of a submit press.
    ///
    /// # Arguments
    /// * `product_id` - Product bound through `Route::FeedbackForm`.
    /// * `now_millis` - Timestamp used as the record id.
    ///
    /// # Returns
    /// `SubmitEffect::Post` with the finished record when every field is set,
    /// otherwise `SubmitEffect::Alert` naming the first missing field. The
    /// draft is only read, so the same contents can be submitted again.
    pub fn submit_effect(&self, product_id: i64, now_millis: u64) -> SubmitEffect {
        match self.draft.finalize(product_id, now_millis) {
            Ok(record) => SubmitEffect::Post(record),
            Err(missing) => SubmitEffect::Alert(missing),
        }
    }
}

/// Maps the outcome of the POST to the alert and follow-up screen.
///
/// Any failure, transport or status, gets the same generic message and leaves
/// the user on the form.
pub fn resolve_submission(outcome: &Result<(), ApiError>) -> SubmitResolution {
    match outcome {
        Ok(()) => SubmitResolution {
            title: "Sucesso",
            message: "Feedback enviado com sucesso!",
            route: Some(Route::Home),
        },
        Err(_) => SubmitResolution {
            title: "Erro",
            message: "Ocorreu um erro ao enviar o feedback.",
            route: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use common::model::feedback::Experience;

    use super::*;

    fn filled() -> FeedbackFormComponent {
        let mut form = FeedbackFormComponent::new();
        form.draft.name = "Bruno".to_string();
        form.draft.email = "bruno@example.com".to_string();
        form.draft.feedback = "Bateria dura pouco".to_string();
        form.draft.experience = Some(Experience::Average);
        form.draft.recommend = Some(true);
        form
    }

    #[test]
    fn empty_form_only_alerts() {
        let form = FeedbackFormComponent::new();
        assert_eq!(form.submit_effect(1, 1), SubmitEffect::Alert(MissingField::Name));
    }

    #[test]
    fn any_unset_field_never_posts() {
        let clears: [fn(&mut FeedbackFormComponent); 5] = [
            |f| f.draft.name.clear(),
            |f| f.draft.email.clear(),
            |f| f.draft.feedback.clear(),
            |f| f.draft.experience = None,
            |f| f.draft.recommend = None,
        ];

        for clear in clears {
            let mut form = filled();
            clear(&mut form);
            assert!(matches!(form.submit_effect(1, 1), SubmitEffect::Alert(_)));
        }
    }

    #[test]
    fn complete_form_posts_record_bound_to_route_product() {
        let form = filled();
        let SubmitEffect::Post(record) = form.submit_effect(21, 1_718_000_000_123) else {
            panic!("expected a post");
        };

        assert_eq!(record.product_id, 21);
        assert_eq!(record.id, 1_718_000_000_123);
        assert_eq!(record.name, "Bruno");
        assert_eq!(record.email, "bruno@example.com");
        assert_eq!(record.feedback, "Bateria dura pouco");
        assert_eq!(record.experience, Experience::Average);
        assert!(record.recommend);
    }

    #[test]
    fn successful_post_goes_home() {
        let resolution = resolve_submission(&Ok(()));
        assert_eq!(resolution.route, Some(Route::Home));
        assert_eq!(resolution.title, "Sucesso");
    }

    #[test]
    fn failed_post_keeps_form_for_resubmission() {
        let form = filled();
        let before = form.draft.clone();

        let SubmitEffect::Post(first) = form.submit_effect(21, 5) else {
            panic!("expected a post");
        };
        let resolution = resolve_submission(&Err(ApiError::Status(500)));

        assert_eq!(resolution.route, None);
        assert_eq!(resolution.message, "Ocorreu um erro ao enviar o feedback.");
        assert_eq!(form.draft, before);

        let SubmitEffect::Post(retry) = form.submit_effect(21, 6) else {
            panic!("expected a second post");
        };
        assert_eq!(retry.name, first.name);
        assert_eq!(retry.id, 6);
    }
}
