use crate::modules::admin::application::ports::outgoing::SeedSource;
use crate::modules::experience::application::domain::Experience;

/// Work history every admin page session starts from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperienceSeed;

impl SeedSource<Experience> for ExperienceSeed {
    fn seed(&self) -> Vec<Experience> {
        vec![
            Experience {
                id: "1".to_string(),
                company: "Tech Corp".to_string(),
                role: "Senior Developer".to_string(),
                description: "Leading frontend development team and architecting scalable solutions."
                    .to_string(),
                start_date: "2023-01".to_string(),
                end_date: None,
                is_current: true,
                duration: "Jan 2023 - Present".to_string(),
            },
            Experience {
                id: "2".to_string(),
                company: "StartupXYZ".to_string(),
                role: "Full Stack Developer".to_string(),
                description:
                    "Built and maintained multiple web applications using React and Node.js."
                        .to_string(),
                start_date: "2021-03".to_string(),
                end_date: Some("2022-12".to_string()),
                is_current: false,
                duration: "Mar 2021 - Dec 2022".to_string(),
            },
            Experience {
                id: "3".to_string(),
                company: "Digital Agency".to_string(),
                role: "Junior Developer".to_string(),
                description: "Developed responsive websites and learned modern web technologies."
                    .to_string(),
                start_date: "2019-06".to_string(),
                end_date: Some("2021-02".to_string()),
                is_current: false,
                duration: "Jun 2019 - Feb 2021".to_string(),
            },
        ]
    }
}
