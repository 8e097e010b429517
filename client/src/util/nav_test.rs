use super::*;

fn bot(id: &str) -> BotSummary {
    BotSummary { id: id.to_owned(), name: None }
}

// =============================================================
// resolve_active_tab
// =============================================================

#[test]
fn bot_paths_are_my_agent_for_any_query() {
    for query in ["", "tab=activity", "tab=sub-agents", "?tab=bogus"] {
        assert_eq!(resolve_active_tab("/bot/42", query), Some(NavTarget::MyAgent), "{query}");
        assert_eq!(resolve_active_tab("/bot/", query), Some(NavTarget::MyAgent), "{query}");
    }
}

#[test]
fn create_bot_is_my_agent_for_any_query() {
    assert_eq!(resolve_active_tab("/create-bot", ""), Some(NavTarget::MyAgent));
    assert_eq!(resolve_active_tab("/create-bot", "tab=activity"), Some(NavTarget::MyAgent));
}

#[test]
fn profile_highlights_nothing() {
    for query in ["", "tab=activity", "tab=sub-agents"] {
        assert_eq!(resolve_active_tab("/profile", query), None, "{query}");
    }
}

#[test]
fn dashboard_tab_param_selects_tab() {
    assert_eq!(resolve_active_tab("/dashboard", "tab=sub-agents"), Some(NavTarget::SubAgents));
    assert_eq!(resolve_active_tab("/dashboard", "tab=activity"), Some(NavTarget::Activity));
}

#[test]
fn dashboard_missing_or_unknown_tab_defaults_to_my_agent() {
    assert_eq!(resolve_active_tab("/dashboard", ""), Some(NavTarget::MyAgent));
    assert_eq!(resolve_active_tab("/dashboard", "tab=bogus"), Some(NavTarget::MyAgent));
    assert_eq!(resolve_active_tab("/dashboard", "tab=Activity"), Some(NavTarget::MyAgent));
}

#[test]
fn leading_question_mark_is_accepted() {
    assert_eq!(resolve_active_tab("/dashboard", "?tab=activity"), Some(NavTarget::Activity));
}

#[test]
fn prefix_checks_are_case_sensitive() {
    assert_eq!(resolve_active_tab("/Bot/1", "tab=activity"), Some(NavTarget::Activity));
    assert_eq!(resolve_active_tab("/Profile", ""), Some(NavTarget::MyAgent));
}

#[test]
fn resolve_active_tab_is_idempotent() {
    let first = resolve_active_tab("/dashboard", "tab=sub-agents");
    let second = resolve_active_tab("/dashboard", "tab=sub-agents");
    assert_eq!(first, second);
}

// =============================================================
// resolve_primary_href
// =============================================================

#[test]
fn primary_href_without_bots_is_dashboard() {
    assert_eq!(resolve_primary_href(&[]), "/dashboard");
}

#[test]
fn primary_href_uses_first_bot_in_fetch_order() {
    let bots = [bot("42"), bot("7")];
    assert_eq!(resolve_primary_href(&bots), "/bot/42");
    assert_eq!(resolve_primary_href(&bots), "/bot/42");
}

// =============================================================
// Sidebar items
// =============================================================

#[test]
fn sidebar_items_carry_dynamic_and_tab_hrefs() {
    let items = sidebar_items("/bot/42");
    let hrefs: Vec<&str> = items.iter().map(|i| i.href.as_str()).collect();
    assert_eq!(hrefs, vec!["/bot/42", "/dashboard?tab=sub-agents", "/dashboard?tab=activity"]);
}

#[test]
fn sidebar_test_ids_follow_labels() {
    let items = sidebar_items("/dashboard");
    let ids: Vec<String> = items.iter().map(SidebarItem::sidebar_test_id).collect();
    assert_eq!(ids, vec!["sidebar-my-agent", "sidebar-sub-agent", "sidebar-activity"]);
}

#[test]
fn bottom_nav_test_ids_follow_target_ids() {
    let items = sidebar_items("/dashboard");
    let ids: Vec<String> = items.iter().map(SidebarItem::bottom_nav_test_id).collect();
    assert_eq!(ids, vec!["nav-my-agent", "nav-sub-agents", "nav-activity"]);
}

#[test]
fn dashboard_tab_hrefs_resolve_back_to_their_tab() {
    for target in [NavTarget::SubAgents, NavTarget::Activity] {
        let href = dashboard_tab_href(target);
        let (path, query) = href.split_once('?').unwrap();
        assert_eq!(resolve_active_tab(path, query), Some(target));
    }
}

// =============================================================
// query_param
// =============================================================

#[test]
fn query_param_returns_first_occurrence() {
    assert_eq!(query_param("tab=activity&tab=sub-agents", "tab").as_deref(), Some("activity"));
}

#[test]
fn query_param_decodes_plus_and_percent() {
    assert_eq!(query_param("q=a+b%2Fc", "q").as_deref(), Some("a b/c"));
    assert_eq!(query_param("t%61b=activity", "tab").as_deref(), Some("activity"));
}

#[test]
fn query_param_keeps_malformed_escape() {
    assert_eq!(query_param("q=100%", "q").as_deref(), Some("100%"));
    assert_eq!(query_param("q=%zz", "q").as_deref(), Some("%zz"));
}

#[test]
fn query_param_key_without_value_is_empty() {
    assert_eq!(query_param("tab&x=1", "tab").as_deref(), Some(""));
}

#[test]
fn query_param_absent_is_none() {
    assert_eq!(query_param("", "tab"), None);
    assert_eq!(query_param("&&x=1", "tab"), None);
}

#[test]
fn query_param_decodes_utf8_escapes() {
    assert_eq!(query_param("?name=caf%C3%A9", "name").as_deref(), Some("café"));
}
