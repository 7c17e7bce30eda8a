use sensei_core::model::TopicGroup;
use services::CourseOverview;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
    pub last_attempt_str: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicGroupVm {
    pub title: &'static str,
    pub description: &'static str,
    pub completed: usize,
    pub total: usize,
    pub topics: Vec<TopicCardVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub percentage: u8,
    pub completed: usize,
    pub total: usize,
    pub groups: Vec<TopicGroupVm>,
}

impl HomeVm {
    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.percentage)
    }
}

#[must_use]
pub fn map_home(overview: &CourseOverview) -> HomeVm {
    let groups = TopicGroup::ALL
        .into_iter()
        .map(|group| {
            let (completed, total) = overview.group_counts(group);
            let topics = group
                .topics()
                .iter()
                .map(|topic| {
                    let record = overview.topic(*topic);
                    TopicCardVm {
                        slug: topic.as_str(),
                        title: topic.title(),
                        description: topic.description(),
                        completed: overview.is_completed(*topic),
                        last_attempt_str: record
                            .and_then(|r| r.last_attempt())
                            .map(format_datetime),
                    }
                })
                .collect();
            TopicGroupVm {
                title: group.title(),
                description: group.description(),
                completed,
                total,
                topics,
            }
        })
        .collect();

    HomeVm {
        percentage: overview.percentage(),
        completed: overview.completed(),
        total: overview.total(),
        groups,
    }
}
