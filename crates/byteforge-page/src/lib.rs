pub mod app;
pub mod contact_form;
pub mod content;
pub mod event;
pub mod input;
pub mod navigator;
pub mod presentation;
pub mod scroll;
pub mod sections;
pub mod side_nav;
pub mod signals;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use navigator::{InputOutcome, NavKey, ScrollDriver, StepDecision, StepNavigator};
pub use signals::{PageSignal, SignalBus, SignalSender};
pub use theme::Theme;
