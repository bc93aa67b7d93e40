use crate::modules::admin::application::domain::{
    optional, required, slugify, AdminEntity, BadgeVariant, Cell, Column, DataTable,
    FormContext, FormError, Identified, ListCodecError, RowCommand,
};
use crate::modules::blog::application::domain::{BlogPost, BlogPostDraft};

impl Identified for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }
}

impl AdminEntity for BlogPost {
    type Draft = BlogPostDraft;
    const PAGE: &'static str = "blog";
    const NOUN: &'static str = "Blog post";

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.category.as_str()]
    }

    fn blank_draft(ctx: &FormContext) -> BlogPostDraft {
        BlogPostDraft {
            author: ctx.default_author.clone(),
            ..Default::default()
        }
    }

    fn to_draft(&self) -> Result<BlogPostDraft, ListCodecError> {
        Ok(BlogPostDraft {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            category: self.category.clone(),
            author: self.author.clone(),
            read_time: self.read_time.clone(),
            image: self.image.clone(),
            featured: self.featured,
        })
    }

    /// The id is re-derived from the title on every submit; the page makes
    /// it unique. The publication date is set once, on create.
    fn from_draft(
        draft: &BlogPostDraft,
        editing: Option<&BlogPost>,
        ctx: &FormContext,
    ) -> Result<BlogPost, FormError> {
        let title = required("title", &draft.title)?;

        Ok(BlogPost {
            id: slugify(&title),
            excerpt: required("excerpt", &draft.excerpt)?,
            category: required("category", &draft.category)?,
            author: optional(&draft.author).unwrap_or_else(|| ctx.default_author.clone()),
            date: editing.map(|p| p.date).unwrap_or_else(|| ctx.today()),
            read_time: required("read_time", &draft.read_time)?,
            image: required("image", &draft.image)?,
            featured: draft.featured,
            title,
        })
    }

    fn table() -> DataTable<BlogPost, RowCommand> {
        DataTable::new(vec![
            Column::text("title", "Title", |p: &BlogPost| p.title.as_str()),
            Column::text("category", "Category", |p: &BlogPost| p.category.as_str()),
            Column::new("date", "Date", |p: &BlogPost| {
                Some(p.date.format("%Y-%m-%d").to_string())
            }),
            Column::new("featured", "Featured", |p: &BlogPost| {
                Some(p.featured.to_string())
            })
            .render(|p: &BlogPost| {
                if p.featured {
                    Cell::badge("Yes", BadgeVariant::Default)
                } else {
                    Cell::badge("No", BadgeVariant::Secondary)
                }
            }),
        ])
        .editable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::domain::{AdminPage, Notification};
    use crate::modules::admin::application::ports::outgoing::SeedSource;
    use crate::modules::blog::adapter::outgoing::BlogPostSeed;
    use crate::tests::support::fixtures::form_context;

    fn page() -> AdminPage<BlogPost> {
        AdminPage::new(BlogPostSeed.seed())
    }

    fn draft(title: &str) -> BlogPostDraft {
        BlogPostDraft {
            title: title.to_string(),
            excerpt: "Short".to_string(),
            category: "Automation".to_string(),
            author: String::new(),
            read_time: "3 min read".to_string(),
            image: "https://img.example/cover.png".to_string(),
            featured: false,
        }
    }

    fn create(page: &mut AdminPage<BlogPost>, title: &str) -> Option<Notification> {
        page.begin_new(&form_context());
        page.set_draft(draft(title)).unwrap();
        page.submit(&form_context()).unwrap()
    }

    #[test]
    fn blank_draft_prefills_author() {
        let draft = BlogPost::blank_draft(&form_context());
        assert_eq!(draft.author, "Likhil");
    }

    #[test]
    fn create_slugs_title_and_dates_today() {
        let mut page = page();

        let notification = create(&mut page, "Scaling  n8n Workflows");

        assert_eq!(notification, Some(Notification::created("Blog post")));
        let post = &page.items()[0];
        assert_eq!(post.id, "scaling-n8n-workflows");
        assert_eq!(post.author, "Likhil");
        assert_eq!(post.date, form_context().today());
    }

    #[test]
    fn duplicate_titles_get_distinct_slugs() {
        let mut page = page();

        create(&mut page, "Getting Started with Business Automation");

        assert_eq!(
            page.items()[0].id,
            "getting-started-with-business-automation-2"
        );
        assert_eq!(page.items()[1].id, "getting-started-with-business-automation");
    }

    #[test]
    fn renaming_reslugs_in_place_and_keeps_date() {
        let mut page = page();
        let original = page.items()[1].clone();
        page.begin_edit(&original.id).unwrap();

        let mut input = page.draft().cloned().unwrap();
        input.title = "WhatsApp Automation Playbook".to_string();
        page.set_draft(input).unwrap();
        let notification = page.submit(&form_context()).unwrap();

        assert_eq!(notification, Some(Notification::updated("Blog post")));
        let updated = &page.items()[1];
        assert_eq!(updated.id, "whatsapp-automation-playbook");
        assert_eq!(updated.date, original.date);
        assert_eq!(page.items().len(), 2);
    }

    #[test]
    fn resubmitting_unchanged_title_keeps_slug() {
        let mut page = page();
        let id = page.items()[0].id.clone();
        page.begin_edit(&id).unwrap();

        page.submit(&form_context()).unwrap();

        assert_eq!(page.items()[0].id, id);
    }

    #[test]
    fn missing_image_blocks_submit() {
        let mut input = draft("Title");
        input.image = String::new();

        let err = BlogPost::from_draft(&input, None, &form_context()).unwrap_err();

        assert_eq!(err, FormError::MissingField("image"));
    }

    #[test]
    fn featured_column_reads_yes_or_no() {
        let view = page().table_view();

        assert_eq!(view.headers, vec!["Title", "Category", "Date", "Featured", "Actions"]);
        assert_eq!(view.rows()[0].cells[2], Cell::text("2024-01-10"));
        assert_eq!(view.rows()[0].cells[3], Cell::badge("Yes", BadgeVariant::Default));
        assert_eq!(view.rows()[1].cells[3], Cell::badge("No", BadgeVariant::Secondary));
    }
}
