use chimera_core::{
    category_icon, render_digest, render_stat_card, ChangeType, ChimeraTheme, Dashboard,
    DashboardSnapshot, Glyph, LogCategory, LogEntry, PlainTheme, StatDescriptor, Target,
    TargetStatus, FALLBACK_ICON, NO_ACTIVITY_MESSAGE, NO_TARGETS_MESSAGE,
};

fn busy_snapshot() -> DashboardSnapshot {
    let mut snapshot = DashboardSnapshot::placeholder();
    snapshot.stats[3] = StatDescriptor::new(
        "ACTIVE HUNTS",
        "2",
        Glyph::Target,
        "-1 since last hour",
        ChangeType::Decrease,
    );
    snapshot.targets = vec![
        Target::new("Acme Corp", "*.acme.com", TargetStatus::Scanning),
        Target::new("Globex", "api.globex.io", TargetStatus::Triaging),
    ];
    snapshot.logs = vec![
        LogEntry::new("12:00:01", LogCategory::Init, "System boot"),
        LogEntry::new("12:00:02", LogCategory::Recon, "Scope extracted"),
        LogEntry::new("12:00:09", LogCategory::parse("heartbeat"), "tick"),
    ];
    snapshot
}

#[test]
fn placeholder_dashboard_is_idle() {
    let html = Dashboard::placeholder(&ChimeraTheme).render_document();

    for value in [
        "POTENTIAL EARNINGS (24H)",
        "REPORTS SUBMITTED (24H)",
        "VULNERABILITIES FOUND (24H)",
        "ACTIVE HUNTS",
        "System Idle",
        "Awaiting command",
        ">$0</div>",
    ] {
        assert!(html.contains(value), "missing {value}");
    }
    assert_eq!(html.matches("No activity").count(), 2);
    assert_eq!(html.matches("data-change=\"increase\"").count(), 4);
    assert!(html.contains(NO_TARGETS_MESSAGE));
    assert!(html.contains(NO_ACTIVITY_MESSAGE));
}

#[test]
fn rendering_is_deterministic() {
    let a = Dashboard::new(busy_snapshot(), &ChimeraTheme).render_document();
    let b = Dashboard::new(busy_snapshot(), &ChimeraTheme).render_document();
    assert_eq!(a, b);
    assert_eq!(render_digest(&a), render_digest(&b));

    let idle = Dashboard::placeholder(&ChimeraTheme).render_document();
    assert_ne!(render_digest(&a), render_digest(&idle));
}

#[test]
fn theme_changes_style_not_structure() {
    let styled = Dashboard::new(busy_snapshot(), &ChimeraTheme).render_fragment();
    let plain = Dashboard::new(busy_snapshot(), &PlainTheme).render_fragment();

    assert!(!plain.contains("class=\""));
    for marker in [
        "data-kind=\"stat-card\"",
        "data-kind=\"target-row\"",
        "data-kind=\"log-entry\"",
    ] {
        assert_eq!(styled.matches(marker).count(), plain.matches(marker).count());
    }
}

#[test]
fn populated_dashboard_switches_both_panels() {
    let html = Dashboard::new(busy_snapshot(), &PlainTheme).render_fragment();

    assert_eq!(html.matches("data-kind=\"target-row\"").count(), 2);
    assert_eq!(html.matches("data-kind=\"log-entry\"").count(), 3);
    assert!(!html.contains(NO_TARGETS_MESSAGE));
    assert!(!html.contains(NO_ACTIVITY_MESSAGE));
    assert!(html.contains("data-change=\"decrease\""));
}

#[test]
fn each_entry_icon_follows_its_category() {
    let snapshot = busy_snapshot();
    let html = Dashboard::new(snapshot.clone(), &PlainTheme).render_fragment();

    for entry in &snapshot.logs {
        let icon = category_icon(&entry.category);
        let row_start = html
            .find(&format!("data-category=\"{}\"", entry.category))
            .expect("entry row");
        let row = &html[row_start..];
        let row = &row[..row.find("</div>").expect("row end")];
        assert!(
            row.contains(&format!("data-lucide=\"{}\"", icon.glyph.lucide_name())),
            "icon for {}",
            entry.category
        );
    }
    assert_eq!(category_icon(&LogCategory::parse("heartbeat")), FALLBACK_ICON);
}

#[test]
fn stat_card_colors_follow_change_type() {
    let up = StatDescriptor::new("T", "1", Glyph::Bug, "+1", ChangeType::Increase);
    let down = StatDescriptor::new("T", "1", Glyph::Bug, "-1", ChangeType::Decrease);

    let up_html = render_stat_card(&up, &ChimeraTheme);
    let down_html = render_stat_card(&down, &ChimeraTheme);

    assert!(up_html.contains("text-green-400"));
    assert!(!up_html.contains("text-red-400"));
    assert!(down_html.contains("text-red-400"));
    assert!(!down_html.contains("text-green-400"));
}
