//! Localized interface text shared by the terminal and web views.

use crate::stats::PriorityFilter;
use crate::types::Locale;

pub struct Text {
    pub title: &'static str,
    pub project: &'static str,
    pub updated: &'static str,
    pub view_dashboard: &'static str,
    pub view_list: &'static str,
    pub filter: &'static str,
    pub all_characters: &'static str,
    pub completion_all: &'static str,
    pub completion_suffix: &'static str,
    pub based_on_filter: &'static str,
    pub needs_attention: &'static str,
    pub blocking: &'static str,
    pub in_production: &'static str,
    pub flowing: &'static str,
    pub delivered: &'static str,
    pub awaiting: &'static str,
    pub stages_unit: &'static str,
    pub distribution: &'static str,
    pub backlog: &'static str,
    pub backlog_note: &'static str,
    pub revision_short: &'static str,
    pub doing_short: &'static str,
    pub no_data: &'static str,
    pub col_character: &'static str,
    pub col_role: &'static str,
    pub col_priority: &'static str,
    pub col_progress: &'static str,
    pub no_characters: &'static str,
}

static EN: Text = Text {
    title: "Character asset board",
    project: "Project",
    updated: "Updated",
    view_dashboard: "Dashboard",
    view_list: "Detailed list",
    filter: "Filter",
    all_characters: "All characters",
    completion_all: "Overall completion",
    completion_suffix: "completion",
    based_on_filter: "based on current filter",
    needs_attention: "Needs attention (revision)",
    blocking: "Blocking the pipeline",
    in_production: "In production",
    flowing: "Moving normally",
    delivered: "Delivered",
    awaiting: "Awaiting next step",
    stages_unit: "stages",
    distribution: "Status distribution",
    backlog: "Backlog and revisions by stage",
    backlog_note: "Shows which production stage is the bottleneck under the current filter",
    revision_short: "revision",
    doing_short: "in progress",
    no_data: "No data",
    col_character: "Character",
    col_role: "Role",
    col_priority: "Priority",
    col_progress: "Progress",
    no_characters: "No characters match this filter.",
};

static ZH: Text = Text {
    title: "角色资产进度看板",
    project: "项目代号",
    updated: "更新时间",
    view_dashboard: "仪表盘",
    view_list: "详细列表",
    filter: "筛选",
    all_characters: "全部角色",
    completion_all: "总完工率",
    completion_suffix: "完工率",
    based_on_filter: "基于当前筛选",
    needs_attention: "需关注 (返修中)",
    blocking: "阻碍流程推进",
    in_production: "制作中",
    flowing: "正常流转中",
    delivered: "已交付",
    awaiting: "等待下一步",
    stages_unit: "个环节",
    distribution: "任务状态分布",
    backlog: "各阶段积压与返修情况",
    backlog_note: "此图表展示当前筛选下，哪个制作环节是瓶颈",
    revision_short: "返修",
    doing_short: "进行",
    no_data: "无数据",
    col_character: "角色信息",
    col_role: "定位",
    col_priority: "优先级",
    col_progress: "整体进度",
    no_characters: "当前筛选下没有角色。",
};

impl Text {
    pub fn for_locale(locale: Locale) -> &'static Text {
        match locale {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }

    /// Title of the completion card: the overall title for `all`, otherwise
    /// the tier badge followed by the completion suffix (`P0 completion`).
    pub fn completion_title(&self, filter: PriorityFilter) -> String {
        match filter {
            PriorityFilter::All => self.completion_all.to_string(),
            PriorityFilter::Only(p) => format!("{} {}", p.badge(), self.completion_suffix),
        }
    }

    pub fn filter_label(&self, filter: PriorityFilter) -> &'static str {
        match filter {
            PriorityFilter::All => self.all_characters,
            PriorityFilter::Only(p) => p.badge(),
        }
    }
}
