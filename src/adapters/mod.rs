// Adapters layer: concrete implementations of the domain ports.

pub mod presenter;

pub use presenter::{StdoutPresenter, TracingPresenter};
