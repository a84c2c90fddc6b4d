//! Plugin lifecycle and command dispatch.
//!
//! The host drives two hooks: `activate` when the plugin is enabled and
//! `deactivate` when it is torn down. In between, the host calls `run` from
//! its command callbacks and `update_settings` from its settings panel.
//! This is a plain struct satisfying those capabilities; the host's own
//! plugin base classes stay on the host's side of the trait boundary.

use anyhow::{
  Result,
  bail,
};

use crate::{
  commands::{
    self,
    Context,
  },
  config::Config,
  host::{
    HostEditor,
    SettingsStore,
  },
};

/// The plugin's long-lived state: the user configuration, nothing else.
/// Everything per-invocation lives on the stack of a command handler.
pub struct Plugin {
  config: Config,
}

impl Plugin {
  /// Lifecycle hook: loads settings and readies the command set.
  pub fn activate(store: &dyn SettingsStore) -> Self {
    let config = Config::load(store);
    log::info!("text transform plugin loaded");
    Self { config }
  }

  /// Lifecycle hook: nothing to tear down, the host owns every resource.
  pub fn deactivate(&self) {
    log::info!("text transform plugin unloaded");
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Runs the named command against the host editor.
  ///
  /// Commands only act while the editor has focus; without focus the call is
  /// a no-op. Unknown names are an error so the host glue notices a stale
  /// binding immediately.
  pub fn run(&self, name: &str, editor: &mut dyn HostEditor) -> Result<()> {
    let Some(command) = commands::find(name) else {
      bail!("unknown command: {name}");
    };

    if !editor.has_focus() {
      log::debug!("ignoring {name}: editor does not have focus");
      return Ok(());
    }

    let mut cx = Context {
      editor,
      config: &self.config,
    };
    (command.fun)(&mut cx)
  }

  /// Applies a settings edit and persists it, the save-on-change contract of
  /// the settings panel. Save failures are logged, not fatal; the in-memory
  /// configuration keeps the new value either way.
  pub fn update_settings(&mut self, store: &dyn SettingsStore, edit: impl FnOnce(&mut Config)) {
    edit(&mut self.config);
    if let Err(err) = self.config.save(store) {
      log::warn!("failed to save settings: {err}");
    }
  }
}
