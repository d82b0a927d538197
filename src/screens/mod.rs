pub mod dashboard;

// The TUI has a single screen: the live dish dashboard with the event log
// pane below it. Welcome and help are modals drawn over it (see app::View).

pub use dashboard::Dashboard;
