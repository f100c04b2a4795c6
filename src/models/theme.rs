//! 行业主题
//!
//! 按行业名称映射前端展示主题（背景渐变、强调色、图标、图表配色、底纹）。
//! 主题表编译期确定，只读，未收录的行业统一使用默认主题。

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// 行业展示主题
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndustryTheme {
    /// 背景渐变（Tailwind class）
    pub bg_color: Cow<'static, str>,
    /// 强调色
    pub accent_color: Cow<'static, str>,
    /// 图标文件名
    pub icon: Cow<'static, str>,
    /// 图表配色（主色、辅色、浅色）
    pub chart_colors: [Cow<'static, str>; 3],
    /// 背景底纹
    pub pattern: Cow<'static, str>,
}

const fn theme(
    bg_color: &'static str,
    accent_color: &'static str,
    icon: &'static str,
    chart_colors: [&'static str; 3],
    pattern: &'static str,
) -> IndustryTheme {
    IndustryTheme {
        bg_color: Cow::Borrowed(bg_color),
        accent_color: Cow::Borrowed(accent_color),
        icon: Cow::Borrowed(icon),
        chart_colors: [
            Cow::Borrowed(chart_colors[0]),
            Cow::Borrowed(chart_colors[1]),
            Cow::Borrowed(chart_colors[2]),
        ],
        pattern: Cow::Borrowed(pattern),
    }
}

/// 默认主题
pub static DEFAULT_THEME: IndustryTheme = theme(
    "bg-gradient-to-br from-slate-900 via-gray-800 to-zinc-900",
    "slate",
    "default.svg",
    ["#64748B", "#94A3B8", "#CBD5E1"],
    "default-pattern",
);

/// 行业主题表
pub static INDUSTRY_THEMES: [(&str, IndustryTheme); 9] = [
    (
        "银行",
        theme(
            "bg-gradient-to-br from-blue-900 via-blue-800 to-indigo-900",
            "blue",
            "bank.svg",
            ["#3B82F6", "#60A5FA", "#93C5FD"],
            "banking-pattern",
        ),
    ),
    (
        "证券",
        theme(
            "bg-gradient-to-br from-purple-900 via-purple-800 to-fuchsia-900",
            "purple",
            "securities.svg",
            ["#9333EA", "#A855F7", "#C084FC"],
            "securities-pattern",
        ),
    ),
    (
        "房地产",
        theme(
            "bg-gradient-to-br from-emerald-900 via-emerald-800 to-teal-900",
            "emerald",
            "real-estate.svg",
            ["#059669", "#10B981", "#34D399"],
            "realestate-pattern",
        ),
    ),
    (
        "医药生物",
        theme(
            "bg-gradient-to-br from-rose-900 via-red-800 to-pink-900",
            "rose",
            "medical.svg",
            ["#E11D48", "#F43F5E", "#FB7185"],
            "medical-pattern",
        ),
    ),
    (
        "计算机",
        theme(
            "bg-gradient-to-br from-sky-900 via-cyan-800 to-blue-900",
            "sky",
            "tech.svg",
            ["#0EA5E9", "#38BDF8", "#7DD3FC"],
            "tech-pattern",
        ),
    ),
    (
        "新能源",
        theme(
            "bg-gradient-to-br from-lime-900 via-green-800 to-emerald-900",
            "lime",
            "energy.svg",
            ["#84CC16", "#A3E635", "#BEF264"],
            "energy-pattern",
        ),
    ),
    (
        "消费",
        theme(
            "bg-gradient-to-br from-amber-900 via-yellow-800 to-orange-900",
            "amber",
            "consumer.svg",
            ["#F59E0B", "#FBBF24", "#FCD34D"],
            "consumer-pattern",
        ),
    ),
    (
        "电子",
        theme(
            "bg-gradient-to-br from-indigo-900 via-violet-800 to-purple-900",
            "indigo",
            "tech.svg",
            ["#6366F1", "#818CF8", "#A5B4FC"],
            "electronics-pattern",
        ),
    ),
    (
        "汽车",
        theme(
            "bg-gradient-to-br from-zinc-900 via-slate-800 to-gray-900",
            "zinc",
            "consumer.svg",
            ["#71717A", "#A1A1AA", "#D4D4D8"],
            "auto-pattern",
        ),
    ),
];

/// 根据行业名称查找主题，未收录（含空行业）时返回默认主题
pub fn theme_for(industry: Option<&str>) -> &'static IndustryTheme {
    industry
        .and_then(|name| INDUSTRY_THEMES.iter().find(|(key, _)| *key == name))
        .map(|(_, theme)| theme)
        .unwrap_or(&DEFAULT_THEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_industry() {
        let theme = theme_for(Some("银行"));
        assert_eq!(theme.accent_color, "blue");
        assert_eq!(theme.icon, "bank.svg");
        assert_eq!(theme.chart_colors[0], "#3B82F6");
    }

    #[test]
    fn test_unknown_industry_falls_back_to_default() {
        assert_eq!(theme_for(Some("未知行业XYZ")), &DEFAULT_THEME);
        assert_eq!(theme_for(Some("")), &DEFAULT_THEME);
        assert_eq!(theme_for(None), &DEFAULT_THEME);
    }

    #[test]
    fn test_industry_names_are_unique() {
        let mut names: Vec<&str> = INDUSTRY_THEMES.iter().map(|(name, _)| *name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), INDUSTRY_THEMES.len());
    }

    #[test]
    fn test_theme_wire_shape() {
        let value = serde_json::to_value(&DEFAULT_THEME).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "bg_color": "bg-gradient-to-br from-slate-900 via-gray-800 to-zinc-900",
                "accent_color": "slate",
                "icon": "default.svg",
                "chart_colors": ["#64748B", "#94A3B8", "#CBD5E1"],
                "pattern": "default-pattern"
            })
        );
    }
}
