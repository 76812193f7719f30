//! Styling seam between the renderer and the host's UI kit.
//!
//! Components never hardcode class names. They ask a [`Theme`] for the
//! classes of a [`Slot`] (a structural position) or a [`Tone`] (an accent
//! color), so the same markup can be skinned or stripped.

/// Structural positions that carry styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Page,
    Sidebar,
    SidebarNav,
    SidebarFooterNav,
    BrandLink,
    BrandGlyph,
    NavLink,
    NavLinkActive,
    NavGlyph,
    ScreenReaderOnly,
    Column,
    Header,
    HeaderTitle,
    HeaderMission,
    HeaderActions,
    StatusPill,
    StatusGlyph,
    ExecuteButton,
    ExecuteGlyph,
    Main,
    StatGrid,
    PanelGrid,
    PanelWide,
    PanelNarrow,
    Card,
    CardHeader,
    CardTitle,
    CardContent,
    StatCardHeader,
    StatTitle,
    StatGlyph,
    StatValue,
    ChangeIncrease,
    ChangeDecrease,
    Table,
    TableHeadRow,
    TableHead,
    TableHeadAction,
    TableRow,
    CellName,
    CellScope,
    CellStatus,
    StatusBadge,
    CellAction,
    ActionButton,
    ActionGlyph,
    EmptyCell,
    LogList,
    LogRow,
    LogGlyphWrap,
    LogGlyph,
    LogTime,
    LogMessage,
    LogEmpty,
}

/// Accent colors used by category icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Purple,
    Red,
    Cyan,
    Blue,
    Yellow,
    Gray,
}

/// Supplies class strings and document assets to the renderer.
pub trait Theme {
    /// Classes for a structural slot. An empty string omits the attribute.
    fn class(&self, slot: Slot) -> &str;

    /// Classes for an accent tone.
    fn tone(&self, tone: Tone) -> &str;

    /// Raw markup placed at the end of `<head>`.
    fn head_assets(&self) -> &str {
        ""
    }

    /// Raw markup placed at the end of `<body>`.
    fn body_assets(&self) -> &str {
        ""
    }
}

/// Dark Tailwind skin with lucide icons, loaded from their CDNs by the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChimeraTheme;

impl Theme for ChimeraTheme {
    fn class(&self, slot: Slot) -> &str {
        match slot {
            Slot::Page => "flex min-h-screen w-full bg-black text-gray-50",
            Slot::Sidebar => {
                "flex h-screen w-16 flex-col items-center border-r border-gray-800 bg-black py-6"
            }
            Slot::SidebarNav => "flex flex-col items-center gap-6",
            Slot::SidebarFooterNav => "mt-auto flex flex-col items-center gap-6",
            Slot::BrandLink => "group",
            Slot::BrandGlyph => "h-8 w-8 text-cyan-400 transition-transform group-hover:scale-110",
            Slot::NavLink => {
                "rounded-lg p-2 text-gray-400 transition-colors hover:text-cyan-400 hover:bg-gray-800"
            }
            Slot::NavLinkActive => {
                "rounded-lg bg-gray-800 p-2 text-cyan-400 transition-colors hover:bg-gray-700"
            }
            Slot::NavGlyph => "h-5 w-5",
            Slot::ScreenReaderOnly => "sr-only",
            Slot::Column => "flex flex-1 flex-col",
            Slot::Header => {
                "flex items-center justify-between border-b border-gray-800 bg-black/50 p-4 backdrop-blur-sm"
            }
            Slot::HeaderTitle => "text-2xl font-bold tracking-wider text-gray-50",
            Slot::HeaderMission => "font-mono text-sm text-cyan-400",
            Slot::HeaderActions => "flex items-center gap-4",
            Slot::StatusPill => {
                "flex items-center gap-2 rounded-full bg-green-900/50 px-3 py-1 text-xs font-medium text-green-400 ring-1 ring-green-400/30"
            }
            Slot::StatusGlyph => "h-3 w-3 animate-pulse",
            Slot::ExecuteButton => {
                "inline-flex items-center rounded-md border border-cyan-400/50 bg-transparent px-3 py-1.5 text-sm text-cyan-400 hover:bg-cyan-900/50 hover:text-cyan-300"
            }
            Slot::ExecuteGlyph => "mr-2 h-4 w-4",
            Slot::Main => "flex-1 p-4 md:p-6",
            Slot::StatGrid => "grid gap-4 md:grid-cols-2 lg:grid-cols-4",
            Slot::PanelGrid => "mt-6 grid grid-cols-1 gap-6 lg:grid-cols-3",
            Slot::PanelWide => "lg:col-span-2",
            Slot::PanelNarrow => "lg:col-span-1",
            Slot::Card => "rounded-lg border border-gray-800 bg-gray-900/50 text-gray-50",
            Slot::CardHeader => "flex flex-col space-y-1.5 p-6",
            Slot::CardTitle => "font-semibold leading-none tracking-tight text-gray-300",
            Slot::CardContent => "p-6 pt-0",
            Slot::StatCardHeader => "flex flex-row items-center justify-between space-y-0 p-6 pb-2",
            Slot::StatTitle => "text-sm font-medium text-gray-400",
            Slot::StatGlyph => "h-5 w-5 text-gray-500",
            Slot::StatValue => "text-2xl font-bold",
            Slot::ChangeIncrease => "text-xs text-green-400",
            Slot::ChangeDecrease => "text-xs text-red-400",
            Slot::Table => "w-full caption-bottom text-sm",
            Slot::TableHeadRow => "border-b border-gray-800 hover:bg-gray-800/50",
            Slot::TableHead => "h-12 px-4 text-left align-middle font-medium text-gray-400",
            Slot::TableHeadAction => "h-12 px-4 text-right align-middle font-medium text-gray-400",
            Slot::TableRow => "border-b border-gray-800 font-mono text-xs hover:bg-gray-800/50",
            Slot::CellName => "p-4 align-middle font-medium text-gray-200",
            Slot::CellScope => "p-4 align-middle text-gray-400",
            Slot::CellStatus => "p-4 align-middle",
            Slot::StatusBadge => {
                "inline-flex items-center rounded-full border border-cyan-400 border-opacity-50 px-2.5 py-0.5 text-xs font-semibold text-cyan-400"
            }
            Slot::CellAction => "p-4 align-middle text-right",
            Slot::ActionButton => {
                "inline-flex h-8 w-8 items-center justify-center rounded-md text-gray-400 hover:bg-gray-700 hover:text-white"
            }
            Slot::ActionGlyph => "h-4 w-4",
            Slot::EmptyCell => "h-24 p-4 text-center align-middle text-gray-500",
            Slot::LogList => "space-y-3",
            Slot::LogRow => "flex items-start gap-3 font-mono text-xs",
            Slot::LogGlyphWrap => "mt-0.5",
            Slot::LogGlyph => "h-3 w-3",
            Slot::LogTime => "text-gray-500",
            Slot::LogMessage => "flex-1 text-gray-300",
            Slot::LogEmpty => {
                "flex h-full min-h-[200px] items-center justify-center text-center text-sm text-gray-500"
            }
        }
    }

    fn tone(&self, tone: Tone) -> &str {
        match tone {
            Tone::Green => "text-green-400",
            Tone::Purple => "text-purple-400",
            Tone::Red => "text-red-500",
            Tone::Cyan => "text-cyan-400",
            Tone::Blue => "text-blue-400",
            Tone::Yellow => "text-yellow-400",
            Tone::Gray => "text-gray-500",
        }
    }

    fn head_assets(&self) -> &str {
        concat!(
            r#"<script src="https://cdn.tailwindcss.com"></script>"#,
            "\n",
            r#"<script src="https://unpkg.com/lucide@latest"></script>"#,
        )
    }

    fn body_assets(&self) -> &str {
        "<script>lucide.createIcons();</script>"
    }
}

/// Unstyled skin: no classes, no external assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn class(&self, _slot: Slot) -> &str {
        ""
    }

    fn tone(&self, _tone: Tone) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_slots_are_green_and_red() {
        let theme = ChimeraTheme;
        assert!(theme.class(Slot::ChangeIncrease).contains("text-green-400"));
        assert!(theme.class(Slot::ChangeDecrease).contains("text-red-400"));
    }

    #[test]
    fn test_plain_theme_has_no_assets() {
        let theme = PlainTheme;
        assert!(theme.class(Slot::Card).is_empty());
        assert!(theme.head_assets().is_empty());
        assert!(theme.body_assets().is_empty());
    }
}
