//! Tab Registry state machine.
//!
//! State is an ordered sequence of tabs (open order, reorderable) plus the
//! key of the active tab. Every transition computes the new sequence in
//! full and assigns it once, so readers never observe a half-applied
//! change.
//!
//! Lifecycle of a tab:
//! 1. `open()` / `visit()` - created on first visit of its route
//! 2. `refresh()` - timestamp bumped, consumers remount its content
//! 3. `close*()` - removed explicitly; `hide_tab` tabs are also dropped on
//!    the next `open()`

use chrono::Utc;

use navkit_protocol::{FlatRouteEntry, RouteParams, Tab};
use navkit_routes::{replace_dynamic_params, MissingParamPolicy, Resolution, RouteTable};

use crate::{Navigator, TabError};

pub struct TabRegistry<N: Navigator> {
    tabs: Vec<Tab>,
    /// Key of the active tab; empty until the first route is opened.
    active: String,
    home_path: String,
    navigator: N,
    policy: MissingParamPolicy,
    last_timestamp: i64,
}

impl<N: Navigator> TabRegistry<N> {
    pub fn new(navigator: N, home_path: impl Into<String>) -> Self {
        Self {
            tabs: Vec::new(),
            active: String::new(),
            home_path: home_path.into(),
            navigator,
            policy: MissingParamPolicy::default(),
            last_timestamp: 0,
        }
    }

    /// Parameter policy used when substituting tab keys.
    pub fn with_policy(mut self, policy: MissingParamPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn keys(&self) -> Vec<&str> {
        self.tabs.iter().map(|tab| tab.key.as_str()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.key == key)
    }

    pub fn active_tab_route_path(&self) -> &str {
        &self.active
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    fn position(&self, key: &str) -> Result<usize, TabError> {
        self.tabs
            .iter()
            .position(|tab| tab.key == key)
            .ok_or_else(|| TabError::NotFound(key.to_string()))
    }

    /// Millisecond timestamp, strictly increasing across calls.
    fn next_timestamp(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_timestamp = now.max(self.last_timestamp + 1);
        self.last_timestamp
    }

    fn navigate(&mut self, key: &str) {
        self.active = key.to_string();
        self.navigator.push(key);
    }

    /// Record a visit of `entry`; returns the tab key (entry key with params substituted).
    ///
    /// Transient (`hide_tab`) tabs from earlier visits are dropped first.
    pub fn open(&mut self, entry: &FlatRouteEntry, params: &RouteParams) -> Result<String, TabError> {
        let key = replace_dynamic_params(&entry.key, params, self.policy)?;

        let mut tabs: Vec<Tab> = self.tabs.iter().filter(|tab| !tab.hide_tab).cloned().collect();
        if !tabs.iter().any(|tab| tab.key == key) {
            let timestamp = self.next_timestamp();
            tabs.push(Tab {
                key: key.clone(),
                label: entry.label.clone(),
                params: params.clone(),
                timestamp,
                hide_tab: entry.hide_tab,
            });
            tracing::debug!(key = %key, tabs = tabs.len(), "Opened tab");
        }

        self.tabs = tabs;
        self.active = key.clone();
        Ok(key)
    }

    /// Resolve `path` against `table` and open its tab.
    ///
    /// Unknown paths redirect to the home path and yield `None`.
    pub fn visit(
        &mut self,
        path: &str,
        params: &RouteParams,
        table: &RouteTable,
    ) -> Result<Option<String>, TabError> {
        match table.resolve(path, params) {
            Resolution::Matched(route) => self.open(route.entry, &route.params).map(Some),
            Resolution::NotFound => {
                tracing::warn!(path, home = %self.home_path, "Unknown route, redirecting home");
                self.go_home(table)?;
                Ok(None)
            }
        }
    }

    /// Navigate to the home path and open its tab.
    ///
    /// A home path with no route leaves no active tab.
    fn go_home(&mut self, table: &RouteTable) -> Result<(), TabError> {
        let home = self.home_path.clone();
        self.navigator.push(&home);

        match table.resolve(&home, &RouteParams::new()) {
            Resolution::Matched(route) => {
                self.open(route.entry, &route.params)?;
            }
            Resolution::NotFound => {
                tracing::warn!(home = %home, "Home path has no route");
                if self.get(&self.active).is_none() {
                    self.active.clear();
                }
            }
        }
        Ok(())
    }

    /// Close the tab for `key`. The last remaining tab cannot be closed.
    ///
    /// Closing the active tab activates its left neighbour, or the right
    /// one when it was first.
    pub fn close(&mut self, key: &str) -> Result<(), TabError> {
        let index = self.position(key)?;
        if self.tabs.len() == 1 {
            return Err(TabError::LastTab);
        }

        let was_active = self.active == key;
        let neighbour = if index == 0 {
            self.tabs[1].key.clone()
        } else {
            self.tabs[index - 1].key.clone()
        };

        let mut tabs = self.tabs.clone();
        tabs.remove(index);
        self.tabs = tabs;

        if was_active {
            self.navigate(&neighbour);
        }
        tracing::debug!(key, active = %self.active, "Closed tab");
        Ok(())
    }

    /// Keep only the tab for `key` and make it active.
    pub fn close_others(&mut self, key: &str) -> Result<(), TabError> {
        let index = self.position(key)?;
        self.tabs = vec![self.tabs[index].clone()];

        if self.active != key {
            self.navigate(key);
        }
        Ok(())
    }

    /// Keep the tabs up to and including `key`, then navigate to it.
    pub fn close_left(&mut self, key: &str) -> Result<(), TabError> {
        let index = self.position(key)?;
        self.tabs = self.tabs[..=index].to_vec();
        self.navigate(key);
        Ok(())
    }

    /// Keep the tabs from `key` onwards, then navigate to it.
    pub fn close_right(&mut self, key: &str) -> Result<(), TabError> {
        let index = self.position(key)?;
        self.tabs = self.tabs[index..].to_vec();
        self.navigate(key);
        Ok(())
    }

    /// Drop every tab and go home; the home route's tab is reopened from `table`.
    pub fn close_all(&mut self, table: &RouteTable) -> Result<(), TabError> {
        self.tabs = Vec::new();
        self.go_home(table)?;
        tracing::debug!(home = %self.home_path, active = %self.active, "Closed all tabs");
        Ok(())
    }

    /// Move the tab at `old_index` to `new_index`.
    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> Result<(), TabError> {
        let len = self.tabs.len();
        for index in [old_index, new_index] {
            if index >= len {
                return Err(TabError::IndexOutOfRange { index, len });
            }
        }
        if old_index == new_index {
            return Ok(());
        }

        let mut tabs = self.tabs.clone();
        let tab = tabs.remove(old_index);
        tabs.insert(new_index, tab);
        self.tabs = tabs;
        Ok(())
    }

    /// Give the tab for `key` a fresh timestamp so its content is remounted.
    pub fn refresh(&mut self, key: &str) -> Result<(), TabError> {
        let index = self.position(key)?;
        let timestamp = self.next_timestamp();
        self.tabs[index].timestamp = timestamp;
        tracing::debug!(key, timestamp, "Refreshed tab");
        Ok(())
    }
}
