use crate::modules::admin::application::domain::{
    optional, required, AdminEntity, BadgeVariant, Cell, Column, DataTable, FormContext,
    FormError, Identified, ListCodec, ListCodecError, RowCommand,
};
use crate::modules::project::application::domain::{
    Project, ProjectDraft, ProjectStatus,
};

/// Tech stack cells show this many badges before collapsing into `+N`.
const TECH_BADGES: usize = 3;

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl AdminEntity for Project {
    type Draft = ProjectDraft;
    const PAGE: &'static str = "projects";
    const NOUN: &'static str = "Project";

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.category.as_str()]
    }

    fn blank_draft(ctx: &FormContext) -> ProjectDraft {
        ProjectDraft {
            year: ctx.now.format("%Y").to_string(),
            ..Default::default()
        }
    }

    fn to_draft(&self) -> Result<ProjectDraft, ListCodecError> {
        Ok(ProjectDraft {
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            features: ListCodec::Lines.format(&self.features)?,
            results: ListCodec::Lines.format(&self.results)?,
            technologies: ListCodec::Comma.format(&self.technologies)?,
            images: ListCodec::Lines.format(&self.images)?,
            live_url: self.live_url.clone().unwrap_or_default(),
            youtube_url: self.youtube_url.clone().unwrap_or_default(),
            buy_url: self.buy_url.clone().unwrap_or_default(),
            status: self.status,
            year: self.year.clone(),
            client: self.client.clone(),
            duration: self.duration.clone(),
        })
    }

    fn from_draft(
        draft: &ProjectDraft,
        editing: Option<&Project>,
        ctx: &FormContext,
    ) -> Result<Project, FormError> {
        let title = required("title", &draft.title)?;
        let category = required("category", &draft.category)?;
        let description = required("description", &draft.description)?;
        let technologies = ListCodec::Comma.parse(&draft.technologies);
        if technologies.is_empty() {
            return Err(FormError::MissingField("technologies"));
        }

        Ok(Project {
            id: editing
                .map(|p| p.id.clone())
                .unwrap_or_else(|| ctx.timestamp_id()),
            title,
            category,
            description,
            features: ListCodec::Lines.parse(&draft.features),
            results: ListCodec::Lines.parse(&draft.results),
            technologies,
            images: ListCodec::Lines.parse(&draft.images),
            live_url: optional(&draft.live_url),
            youtube_url: optional(&draft.youtube_url),
            buy_url: optional(&draft.buy_url),
            status: draft.status,
            year: draft.year.trim().to_string(),
            client: draft.client.trim().to_string(),
            duration: draft.duration.trim().to_string(),
            created_at: editing.map(|p| p.created_at).unwrap_or_else(|| ctx.today()),
        })
    }

    fn table() -> DataTable<Project, RowCommand> {
        DataTable::new(vec![
            Column::text("title", "Title", |p: &Project| p.title.as_str()),
            Column::text("category", "Category", |p: &Project| p.category.as_str()),
            Column::text("description", "Description", |p: &Project| {
                p.description.as_str()
            })
            .render(|p: &Project| Cell::clamped(p.description.clone(), 1)),
            Column::new("technologies", "Tech Stack", |p: &Project| {
                Some(p.technologies.join(", "))
            })
            .render(|p: &Project| Cell::tags(&p.technologies, TECH_BADGES)),
            Column::new("status", "Status", |p: &Project| Some(p.status.to_string())).render(
                |p: &Project| {
                    let variant = match p.status {
                        ProjectStatus::Active => BadgeVariant::Default,
                        ProjectStatus::Archived => BadgeVariant::Secondary,
                    };
                    Cell::badge(p.status.to_string(), variant)
                },
            ),
        ])
        .editable()
    }
}
