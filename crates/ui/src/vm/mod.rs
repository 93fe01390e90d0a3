mod hub_vm;
mod markdown_vm;
mod quiz_vm;
mod time_fmt;

pub use hub_vm::{
    BriefingVm, CategoryCardVm, HubStatsVm, map_briefing, map_category_cards, map_hub_stats,
};
pub use markdown_vm::{inline_markdown_to_html, markdown_to_html, sanitize_html};
pub use quiz_vm::{
    OptionState, OptionVm, PrimaryAction, QuestionVm, ResultVm, map_question, map_result,
};
pub use time_fmt::format_countdown;
