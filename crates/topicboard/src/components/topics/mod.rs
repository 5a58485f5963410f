//! Topic components: list, cards, creation dialog and the detail/report views.

mod create_dialog;
mod topic_card;
mod topic_detail;
mod topic_list;

pub use create_dialog::CreateTopicDialog;
pub use topic_card::{CardKind, TopicActions, TopicCard};
pub use topic_detail::{ReportView, TopicView};
pub use topic_list::TopicList;
