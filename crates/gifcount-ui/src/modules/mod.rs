// crates/gifcount-ui/src/modules/mod.rs
//
// Panel registry. To add a new panel:
//   1. Create modules/mypanel.rs implementing CounterModule
//   2. Add `pub mod mypanel;` below
//   3. Give it a field and a panel slot in app.rs

pub mod file_list;
pub mod results;

use gifcount_core::commands::CounterCommand;
use gifcount_core::state::CounterState;
use egui::Ui;

/// Every panel implements this trait.
/// Modules read state, emit commands — they never mutate state directly.
pub trait CounterModule {
    fn name(&self) -> &str;
    fn ui(&mut self, ui: &mut Ui, state: &CounterState, cmd: &mut Vec<CounterCommand>);
}
