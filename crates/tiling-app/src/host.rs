// Host: owns the store and applies the UI-level policy the engine leaves to
// its caller (nesting cap), plus the bookkeeping a shell needs after a replay.

use std::cell::RefCell;
use std::rc::Rc;

use tiling_core::{PanelId, Rect, Size, TabId};
use tiling_layout::{compute_rects, depth_of, SequentialIds, TilesStore, Transition};

use crate::script::HostAction;
use crate::session::{Layout, TabContent};
use crate::settings::TilingSettings;

/// What a replay did, action by action.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReplayReport {
    pub applied: usize,
    pub unchanged: usize,
    pub refused: usize,
    pub closed_tabs: Vec<TabId>,
}

pub struct Host {
    store: TilesStore<TabContent>,
    max_split_depth: usize,
    closed: Rc<RefCell<Vec<TabId>>>,
}

impl Host {
    pub fn new(layout: Layout, settings: &TilingSettings) -> Self {
        let mut store = TilesStore::with_ids(
            layout,
            SequentialIds::new(settings.panel_id_prefix.clone()),
        );
        let closed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&closed);
        store.subscribe(move |transition: &Transition<TabContent>| {
            for tab_id in &transition.closed_tabs {
                log::info!("closed tab {tab_id}");
            }
            sink.borrow_mut().extend(transition.closed_tabs.iter().cloned());
        });
        Self {
            store,
            max_split_depth: settings.max_split_depth,
            closed,
        }
    }

    pub fn layout(&self) -> &Layout {
        self.store.state()
    }

    /// Dispatch an action, refusing splits and edge drops that would push a
    /// panel already at `max_split_depth` one level deeper.
    pub fn dispatch(&mut self, action: HostAction) -> Option<Transition<TabContent>> {
        if let Some(target) = action.nesting_target() {
            if let Some(depth) = depth_of(self.store.state(), target) {
                if depth >= self.max_split_depth {
                    log::warn!(
                        "refusing {} on {target}: already {depth} levels deep (max {})",
                        action.kind(),
                        self.max_split_depth
                    );
                    return None;
                }
            }
        }
        Some(self.store.dispatch(action))
    }

    pub fn replay(&mut self, actions: impl IntoIterator<Item = HostAction>) -> ReplayReport {
        let mut report = ReplayReport::default();
        for action in actions {
            match self.dispatch(action) {
                Some(transition) if transition.changed => report.applied += 1,
                Some(_) => report.unchanged += 1,
                None => report.refused += 1,
            }
        }
        report.closed_tabs = std::mem::take(&mut *self.closed.borrow_mut());
        report
    }

    pub fn rects(&self, window: Size) -> Vec<(PanelId, Rect)> {
        compute_rects(self.store.state(), Rect::from_size(window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;
    use crate::session::default_layout;
    use tiling_layout::{find_item, validate, Action, PanelOrder, SplitDirection};

    fn split(panel_id: &str) -> HostAction {
        Action::PanelSplit {
            panel_id: panel_id.into(),
            direction: SplitDirection::Vertical,
            new_panel_order: PanelOrder::After,
            tabs: vec![],
        }
    }

    #[test]
    fn replay_counts_outcomes_and_closed_tabs() {
        let mut host = Host::new(default_layout(), &TilingSettings::default());
        let actions = parse_script(
            r#"[
                {"type":"tab-set-active","panelId":"description","tabId":"solutions"},
                {"type":"tab-set-active","panelId":"description","tabId":"solutions"},
                {"type":"tab-close","panelId":"editor","tabId":"code"},
                {"type":"panel-close","panelId":"console"}
            ]"#,
        )
        .unwrap();

        let report = host.replay(actions);
        assert_eq!(report.applied, 2);
        assert_eq!(report.unchanged, 2);
        assert_eq!(report.refused, 0);
        assert_eq!(report.closed_tabs, vec!["code"]);
        assert!(find_item(host.layout(), "editor").is_none());
        assert_eq!(validate(host.layout()), Ok(()));
    }

    #[test]
    fn splits_beyond_max_depth_are_refused() {
        let settings = TilingSettings {
            panel_id_prefix: "pane".into(),
            max_split_depth: 2,
            ..TilingSettings::default()
        };
        let mut host = Host::new(default_layout(), &settings);

        // "editor" sits at depth 2 in the default layout.
        assert!(host.dispatch(split("editor")).is_none());

        // "description" sits at depth 1: one split is fine, the new sibling
        // then sits at the cap.
        let transition = host.dispatch(split("description")).unwrap();
        assert!(transition.changed);
        assert_eq!(depth_of(host.layout(), "pane-2"), Some(2));
        assert!(host.dispatch(split("pane-2")).is_none());
    }

    #[test]
    fn edge_drops_respect_the_cap_but_center_drops_do_not() {
        let settings = TilingSettings {
            max_split_depth: 2,
            ..TilingSettings::default()
        };
        let mut host = Host::new(default_layout(), &settings);
        let actions = parse_script(
            r#"[
                {"type":"tab-drop","src":{"panelId":"description","tabId":"prompt"},
                 "dst":{"panelId":"editor","dropAreaSection":"left"}},
                {"type":"tab-drop","src":{"panelId":"description","tabId":"prompt"},
                 "dst":{"panelId":"editor","dropAreaSection":"center"}}
            ]"#,
        )
        .unwrap();
        let report = host.replay(actions);
        assert_eq!(report.refused, 1);
        assert_eq!(report.applied, 1);
        let editor = find_item(host.layout(), "editor").unwrap();
        assert_eq!(editor.active_tab_id.as_deref(), Some("prompt"));
    }

    #[test]
    fn rects_cover_the_window() {
        let settings = TilingSettings::default();
        let host = Host::new(default_layout(), &settings);
        let rects = host.rects(settings.window_size());
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].0, "description");
        assert!((rects[0].1.width - 512.0).abs() < 0.01);
        let area: f32 = rects.iter().map(|(_, r)| r.width * r.height).sum();
        assert!((area - 1280.0 * 800.0).abs() < 1.0);
    }
}
