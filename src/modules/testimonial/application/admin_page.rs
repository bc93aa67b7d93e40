use crate::modules::admin::application::domain::{
    required, AdminEntity, BadgeVariant, Cell, Column, DataTable, FormContext, FormError,
    Identified, ListCodecError, RowCommand,
};
use crate::modules::testimonial::application::domain::{Rating, Testimonial, TestimonialDraft};

impl Identified for Testimonial {
    fn id(&self) -> &str {
        &self.id
    }
}

impl AdminEntity for Testimonial {
    type Draft = TestimonialDraft;
    const PAGE: &'static str = "testimonials";
    const NOUN: &'static str = "Testimonial";

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.client_name.as_str(), self.client_role.as_str()]
    }

    fn blank_draft(_ctx: &FormContext) -> TestimonialDraft {
        TestimonialDraft::default()
    }

    fn to_draft(&self) -> Result<TestimonialDraft, ListCodecError> {
        Ok(TestimonialDraft {
            client_name: self.client_name.clone(),
            client_role: self.client_role.clone(),
            feedback: self.feedback.clone(),
            rating: self.rating,
        })
    }

    /// New testimonials start unapproved; an edit never changes approval.
    fn from_draft(
        draft: &TestimonialDraft,
        editing: Option<&Testimonial>,
        ctx: &FormContext,
    ) -> Result<Testimonial, FormError> {
        Ok(Testimonial {
            id: editing
                .map(|t| t.id.clone())
                .unwrap_or_else(|| ctx.timestamp_id()),
            client_name: required("client_name", &draft.client_name)?,
            client_role: required("client_role", &draft.client_role)?,
            feedback: required("feedback", &draft.feedback)?,
            rating: draft.rating,
            is_approved: editing.map(|t| t.is_approved).unwrap_or(false),
            created_at: editing.map(|t| t.created_at).unwrap_or_else(|| ctx.today()),
        })
    }

    fn table() -> DataTable<Testimonial, RowCommand> {
        DataTable::new(vec![
            Column::text("client_name", "Client", |t: &Testimonial| {
                t.client_name.as_str()
            }),
            Column::text("client_role", "Role", |t: &Testimonial| t.client_role.as_str()),
            Column::text("feedback", "Feedback", |t: &Testimonial| t.feedback.as_str())
                .render(|t: &Testimonial| Cell::clamped(t.feedback.clone(), 1)),
            Column::new("rating", "Rating", |t: &Testimonial| {
                Some(t.rating.value().to_string())
            })
            .render(|t: &Testimonial| Cell::rating(t.rating.value(), Rating::MAX)),
            Column::new("is_approved", "Status", |t: &Testimonial| {
                Some(t.is_approved.to_string())
            })
            .render(|t: &Testimonial| {
                if t.is_approved {
                    Cell::badge("Approved", BadgeVariant::Default)
                } else {
                    Cell::badge("Pending", BadgeVariant::Secondary)
                }
            }),
        ])
        .editable()
        .toggleable()
    }

    fn visibility(&self) -> Option<bool> {
        Some(self.is_approved)
    }

    fn set_visibility(&mut self, visible: bool) {
        self.is_approved = visible;
    }

    fn visibility_notice(visible: bool) -> String {
        if visible {
            "Testimonial approved".to_string()
        } else {
            "Testimonial hidden".to_string()
        }
    }
}
