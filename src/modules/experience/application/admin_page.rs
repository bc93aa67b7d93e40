use crate::modules::admin::application::domain::{
    optional, parse_month, required, AdminEntity, Cell, Column, DataTable, FormContext,
    FormError, Identified, ListCodecError, RowCommand,
};
use crate::modules::experience::application::domain::{
    format_duration, Experience, ExperienceDraft,
};

impl Identified for Experience {
    fn id(&self) -> &str {
        &self.id
    }
}

impl AdminEntity for Experience {
    type Draft = ExperienceDraft;
    const PAGE: &'static str = "experience";
    const NOUN: &'static str = "Experience";

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.company.as_str(), self.role.as_str()]
    }

    fn blank_draft(_ctx: &FormContext) -> ExperienceDraft {
        ExperienceDraft::default()
    }

    fn to_draft(&self) -> Result<ExperienceDraft, ListCodecError> {
        Ok(ExperienceDraft {
            company: self.company.clone(),
            role: self.role.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone().unwrap_or_default(),
            is_current: self.is_current,
        })
    }

    fn from_draft(
        draft: &ExperienceDraft,
        editing: Option<&Experience>,
        ctx: &FormContext,
    ) -> Result<Experience, FormError> {
        let company = required("company", &draft.company)?;
        let role = required("role", &draft.role)?;
        let description = required("description", &draft.description)?;
        let start = parse_month("start_date", &required("start_date", &draft.start_date)?)?;

        // A current position never keeps an end month.
        let end = match (draft.is_current, optional(&draft.end_date)) {
            (false, Some(end)) => Some(parse_month("end_date", &end)?),
            _ => None,
        };

        Ok(Experience {
            id: editing
                .map(|e| e.id.clone())
                .unwrap_or_else(|| ctx.timestamp_id()),
            company,
            role,
            description,
            start_date: start.format("%Y-%m").to_string(),
            end_date: end.map(|end| end.format("%Y-%m").to_string()),
            is_current: draft.is_current,
            duration: format_duration(start, end, draft.is_current),
        })
    }

    fn table() -> DataTable<Experience, RowCommand> {
        DataTable::new(vec![
            Column::text("company", "Company", |e: &Experience| e.company.as_str()),
            Column::text("role", "Role", |e: &Experience| e.role.as_str()),
            Column::text("duration", "Duration", |e: &Experience| e.duration.as_str()),
            Column::text("description", "Description", |e: &Experience| {
                e.description.as_str()
            })
            .render(|e: &Experience| Cell::clamped(e.description.clone(), 1)),
        ])
        .editable()
    }

    /// Most recent start first. Ties keep list order.
    fn display_order(items: &mut Vec<&Experience>) {
        items.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    }
}
